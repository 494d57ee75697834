//! Event payloads published by the inventory store and the engine.

use crate::engine::{DropOutcome, PickupOutcome};
use crate::env::ItemHandle;
use crate::hint::Hint;
use crate::state::WorldItemId;

/// Change notifications emitted by [`crate::state::InventoryStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryEvent {
    ItemAdded { item: ItemHandle, amount: u32 },
    ItemRemoved { item: ItemHandle, amount: u32 },
    /// Emitted after every successful mutation, including `clear`.
    Changed,
}

/// Core-to-presentation events published by [`crate::engine::GameEngine`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// An item left the world and is now held by the player.
    ItemCollected { item: ItemHandle, world: WorldItemId },

    /// A held item was put back into the world.
    ItemDropped { item: ItemHandle, world: WorldItemId },

    /// Collected/total counters changed.
    ProgressChanged { collected: u32, total: u32 },

    /// Published once per session, when the collection goal is first reached.
    WinConditionMet { collected: u32, total: u32 },

    PickupFailed {
        world: WorldItemId,
        reason: PickupOutcome,
    },

    DropFailed {
        item: Option<ItemHandle>,
        reason: DropOutcome,
    },

    WeaponEquipped { weapon: ItemHandle, world: WorldItemId },

    WeaponUnequipped { weapon: ItemHandle, world: WorldItemId },

    ShotFired {
        weapon: ItemHandle,
        ammo: ItemHandle,
        remaining: u32,
    },

    HintChanged(Hint),
}

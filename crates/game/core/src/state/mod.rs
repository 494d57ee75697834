//! Mutable game state owned by the core.
//!
//! Each collaborator exclusively owns its part of the state:
//! - [`InventoryStore`]: held items
//! - [`EquipSlot`]: the equipped weapon
//! - [`WorldPlacement`]: every placed item instance
//!
//! Only [`crate::engine::GameEngine`] moves items between them.
mod equipment;
mod inventory;
mod world;

pub use equipment::{EquipError, EquipSlot, EquippedWeapon};
pub use inventory::{InventoryEntry, InventoryError, InventorySnapshot, InventoryStore};
pub use world::{Position, Presence, WorldError, WorldItemId, WorldItemInstance, WorldPlacement};

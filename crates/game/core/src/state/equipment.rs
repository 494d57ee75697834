//! Equip slot for the player's weapon.
//!
//! The slot is separate from inventory containment: the inventory records that
//! the weapon is owned, the slot records which world instance is in the
//! player's hands.

use crate::env::{ItemDefinition, ItemHandle};
use crate::error::{ErrorSeverity, GameError};
use crate::state::WorldItemId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EquipError {
    #[error("already holding weapon {current}")]
    AlreadyEquipped { current: ItemHandle },

    #[error("item {0} is not a weapon")]
    NotAWeapon(ItemHandle),
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyEquipped { .. } => ErrorSeverity::Recoverable,
            Self::NotAWeapon(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyEquipped { .. } => "EQUIP_ALREADY_EQUIPPED",
            Self::NotAWeapon(_) => "EQUIP_NOT_A_WEAPON",
        }
    }
}

/// Weapon currently in the player's hands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquippedWeapon {
    pub definition: ItemDefinition,
    /// World instance used as the held representation.
    pub handle: WorldItemId,
}

/// Two-state machine: empty, or holding exactly one weapon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquipSlot {
    equipped: Option<EquippedWeapon>,
}

impl EquipSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equips `weapon`, represented in the world by `handle`.
    ///
    /// Fails without touching the slot when a weapon is already held.
    pub fn equip(&mut self, weapon: &ItemDefinition, handle: WorldItemId) -> Result<(), EquipError> {
        if !weapon.is_weapon() {
            tracing::error!(item = %weapon.handle, "equip failed: item is not a weapon");
            return Err(EquipError::NotAWeapon(weapon.handle));
        }
        if let Some(current) = &self.equipped {
            tracing::debug!(
                current = %current.definition.handle,
                requested = %weapon.handle,
                "already holding a weapon"
            );
            return Err(EquipError::AlreadyEquipped {
                current: current.definition.handle,
            });
        }

        self.equipped = Some(EquippedWeapon {
            definition: weapon.clone(),
            handle,
        });
        tracing::info!(weapon = %weapon.handle, name = %weapon.name, %handle, "equipped weapon");
        Ok(())
    }

    /// Empties the slot and hands back the world instance that was held.
    pub fn unequip(&mut self) -> Option<WorldItemId> {
        match self.equipped.take() {
            Some(weapon) => {
                tracing::info!(weapon = %weapon.definition.handle, handle = %weapon.handle, "weapon unequipped");
                Some(weapon.handle)
            }
            None => {
                tracing::warn!("unequip called but no weapon equipped");
                None
            }
        }
    }

    pub fn current_weapon(&self) -> Option<&ItemDefinition> {
        self.equipped.as_ref().map(|weapon| &weapon.definition)
    }

    pub fn equipped(&self) -> Option<&EquippedWeapon> {
        self.equipped.as_ref()
    }

    pub fn has_weapon(&self) -> bool {
        self.equipped.is_some()
    }

    pub fn held_handle(&self) -> Option<WorldItemId> {
        self.equipped.as_ref().map(|weapon| weapon.handle)
    }

    /// Ammo type bound to the equipped weapon.
    pub fn ammo_type(&self) -> Option<ItemHandle> {
        self.current_weapon().and_then(ItemDefinition::ammo_type)
    }

    pub fn is_equipped(&self, item: ItemHandle) -> bool {
        self.current_weapon().is_some_and(|weapon| weapon.handle == item)
    }
}

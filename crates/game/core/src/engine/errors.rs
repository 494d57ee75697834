//! Error types for engine requests.

use crate::env::ItemHandle;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EquipError, InventoryError, Presence, WorldError, WorldItemId};

/// Requests the engine cannot act on at all.
///
/// Ordinary refusals (inventory full, weapon already held, ammo not droppable)
/// are not errors; they come back as outcome values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("world instance {0} does not exist")]
    UnknownWorldItem(WorldItemId),

    #[error("world instance {world} is {presence}, not present")]
    NotInteractable {
        world: WorldItemId,
        presence: Presence,
    },

    #[error("item {0} is not in the catalog")]
    UnknownItem(ItemHandle),

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("inventory out of sync: {0}")]
    Inventory(#[from] InventoryError),

    #[error("equip slot out of sync: {0}")]
    Equip(#[from] EquipError),

    #[error("world placement out of sync: {0}")]
    World(#[from] WorldError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownWorldItem(_) | Self::NotInteractable { .. } | Self::UnknownItem(_) => {
                ErrorSeverity::Validation
            }
            Self::InvalidConfig(_) => ErrorSeverity::Fatal,
            Self::Inventory(_) | Self::Equip(_) | Self::World(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownWorldItem(_) => "ENGINE_UNKNOWN_WORLD_ITEM",
            Self::NotInteractable { .. } => "ENGINE_NOT_INTERACTABLE",
            Self::UnknownItem(_) => "ENGINE_UNKNOWN_ITEM",
            Self::InvalidConfig(_) => "ENGINE_INVALID_CONFIG",
            Self::Inventory(err) => err.error_code(),
            Self::Equip(err) => err.error_code(),
            Self::World(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_code() {
        let err = EngineError::from(InventoryError::Full { capacity: 1 });
        assert_eq!(err.error_code(), "INVENTORY_FULL");
        assert_eq!(err.severity(), ErrorSeverity::Internal);

        let err = EngineError::NotInteractable {
            world: WorldItemId(0),
            presence: Presence::Removed,
        };
        assert_eq!(err.error_code(), "ENGINE_NOT_INTERACTABLE");
        assert_eq!(err.severity().to_string(), "validation");
    }
}

//! Item, inventory and equipment rules for a single-player collection game.
//!
//! `game-core` owns the canonical state (catalog, world placement, inventory,
//! equip slot, collection progress) and exposes synchronous APIs that a host
//! drives frame by frame. All transfers between the world and the player flow
//! through [`engine::GameEngine`]; presentation layers observe them through
//! [`events::GameEvent`]s and never mutate state directly.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod events;
pub mod hint;
pub mod progress;
pub mod schedule;
pub mod state;

pub use config::GameConfig;
pub use engine::{DropOutcome, EngineError, FireOutcome, GameEngine, PickupOutcome};
pub use env::{
    AmmoData, CatalogError, ItemCatalog, ItemDefinition, ItemHandle, ItemKind,
    ItemOracle, WeaponData,
};
pub use error::{ErrorSeverity, GameError};
pub use events::{EventBus, EventRecorder, GameEvent, InventoryEvent, ListenerId};
pub use hint::{Hint, HintAdvisor};
pub use progress::{ProgressTracker, ProgressUpdate};
pub use schedule::DeferredScheduler;
pub use state::{
    EquipError, EquipSlot, EquippedWeapon, InventoryEntry, InventoryError, InventorySnapshot,
    InventoryStore, Position, Presence, WorldError, WorldItemId, WorldItemInstance,
    WorldPlacement,
};

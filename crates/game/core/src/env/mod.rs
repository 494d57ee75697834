//! Static, externally authored content the core reads but never mutates.
//!
//! The item catalog is loaded before the core initializes. Every lookup from
//! the engine and the progress census goes through [`ItemOracle`].
mod items;

pub use items::{
    AmmoData, CatalogError, ItemCatalog, ItemDefinition, ItemHandle, ItemKind,
    ItemOracle, WeaponData,
};

//! Item catalog loader.

use std::path::Path;

use anyhow::Context;
use game_core::{GameError, ItemCatalog, ItemDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load and validate the item catalog from a RON file.
    ///
    /// Fails if the file is unreadable, malformed, or describes an invalid
    /// catalog (duplicate ids, a weapon bound to a missing or non-ammo item,
    /// zero pack sizes).
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid item catalog {}", path.display()))
    }

    /// Parse and validate a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let file: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let catalog = ItemCatalog::new(file.items).inspect_err(|err| {
            tracing::error!(code = err.error_code(), severity = %err.severity(), %err, "invalid item catalog");
        })?;
        tracing::info!(items = catalog.len(), "item catalog loaded");
        Ok(catalog)
    }
}

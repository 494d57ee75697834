//! World layout loader.
//!
//! A layout lists the items placed in the level at startup. Instance ids are
//! assigned in file order, starting at `w0`.

use std::path::Path;

use anyhow::{Context, bail};
use game_core::{ItemCatalog, ItemHandle, Position, WorldPlacement};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// World layout structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldLayout {
    pub items: Vec<(ItemHandle, Position)>,
}

impl WorldLayout {
    /// Builds the initial placement, rejecting items missing from `catalog`.
    pub fn into_placement(self, catalog: &ItemCatalog) -> LoadResult<WorldPlacement> {
        let mut world = WorldPlacement::new();
        for (index, (item, position)) in self.items.into_iter().enumerate() {
            if !catalog.contains(item) {
                bail!("World entry {} places unknown item {}", index, item);
            }
            if !(position.x.is_finite() && position.y.is_finite() && position.z.is_finite()) {
                bail!("World entry {} has a non-finite position", index);
            }
            world.spawn(item, position);
        }
        Ok(world)
    }
}

/// Loader for world layouts from RON files.
pub struct WorldLoader;

impl WorldLoader {
    pub fn load(path: &Path, catalog: &ItemCatalog) -> LoadResult<WorldPlacement> {
        let content = read_file(path)?;
        Self::parse(&content, catalog)
            .with_context(|| format!("Invalid world layout {}", path.display()))
    }

    pub fn parse(content: &str, catalog: &ItemCatalog) -> LoadResult<WorldPlacement> {
        let layout: WorldLayout = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world layout RON: {}", e))?;

        let world = layout.into_placement(catalog)?;
        tracing::info!(placed = world.len(), "world layout loaded");
        Ok(world)
    }
}

//! Content factory for building a session from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use game_core::{GameConfig, GameEngine, ItemCatalog, WorldPlacement};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, WorldLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── world.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the sample level shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Self::bundled_data_dir())
    }

    pub fn bundled_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load the initial world from `world.ron`.
    pub fn load_world(&self, catalog: &ItemCatalog) -> LoadResult<WorldPlacement> {
        let path = self.data_dir.join("world.ron");
        WorldLoader::load(&path, catalog)
    }

    /// Loads every file and builds a ready-to-run engine.
    pub fn build_engine(&self) -> LoadResult<GameEngine> {
        let config = self.load_config()?;
        let catalog = self.load_items()?;
        let world = self.load_world(&catalog)?;

        GameEngine::new(catalog, world, config)
            .with_context(|| format!("Failed to build session from {}", self.data_dir.display()))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

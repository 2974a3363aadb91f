//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use progression_core::{ProgressionConfig, TeleportGrid};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, MapLoader};
use crate::oracle::CatalogItemOracle;

/// Content factory that loads all progression content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── progression.toml
/// ├── items.ron
/// └── maps/
///     ├── forest_1.ron
///     └── cave_3.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load progression configuration from `progression.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<ProgressionConfig> {
        let path = self.data_dir.join("progression.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no progression config; using defaults");
            return Ok(ProgressionConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron` as an item oracle.
    pub fn load_items(&self) -> LoadResult<CatalogItemOracle> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load_oracle(&path)
    }

    /// Load a teleport map from `maps/{map_name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `map_name` - Name of the map file (without `.ron` extension)
    pub fn load_map(&self, map_name: &str) -> LoadResult<TeleportGrid> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

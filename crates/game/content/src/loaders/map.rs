//! Teleport map loader.
//!
//! Loads map dimensions and teleport pad positions from map RON files.
//! Terrain and rendering data stay with the map editor.

use std::path::Path;

use progression_core::{MapDimensions, Position, TeleportGrid};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    #[serde(default = "default_tile_size")]
    tile_size: u32,
    pads: Vec<(i32, i32)>, // (x, y)
}

fn default_tile_size() -> u32 {
    TeleportGrid::DEFAULT_TILE_SIZE
}

/// Loader for teleport maps from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load map data from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing MapData
    pub fn load(path: &Path) -> LoadResult<TeleportGrid> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse map data from RON text.
    ///
    /// Pads outside the map and repeated pads are errors rather than being
    /// silently dropped.
    pub fn parse(content: &str) -> LoadResult<TeleportGrid> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        if data.tile_size == 0 {
            anyhow::bail!("tile_size must be positive");
        }

        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);
        let mut grid = TeleportGrid::new(dimensions, data.tile_size);
        for (x, y) in data.pads {
            let pad = Position::new(x, y);
            if !dimensions.contains(pad) {
                anyhow::bail!(
                    "Teleport pad {} lies outside the {}x{} map",
                    pad,
                    dimensions.width,
                    dimensions.height
                );
            }
            if !grid.add_pad(pad) {
                anyhow::bail!("Duplicate teleport pad {}", pad);
            }
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progression_core::{MapPoint, TileMapOracle};

    #[test]
    fn parses_pads_and_default_tile_size() {
        let grid = MapLoader::parse("(dimensions: (20, 10), pads: [(1, 1), (18, 7)])").unwrap();

        assert_eq!(grid.tile_size(), TeleportGrid::DEFAULT_TILE_SIZE);
        assert_eq!(grid.dimensions(), MapDimensions::new(20, 10));
        assert_eq!(
            grid.teleport_candidates(Position::new(1, 1)),
            vec![Position::new(18, 7)]
        );
        assert_eq!(grid.to_map_coords(Position::new(18, 7)), MapPoint::new(288, 112));
    }

    #[test]
    fn pad_outside_map_is_rejected() {
        let err = MapLoader::parse("(dimensions: (4, 4), pads: [(4, 0)])").unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn duplicate_pad_is_rejected() {
        let err =
            MapLoader::parse("(dimensions: (4, 4), tile_size: 8, pads: [(1, 2), (1, 2)])")
                .unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }
}

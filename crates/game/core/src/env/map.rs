use std::collections::BTreeSet;

use crate::state::{MapPoint, Position};

/// Tile map queries needed by the teleport helper.
///
/// The map owns geometry and the pixel/tile conversion; the core only picks
/// among the targets it offers.
pub trait TileMapOracle: Send + Sync {
    /// Tile containing a map-space point.
    fn tile_coords_of(&self, point: MapPoint) -> Position;

    /// Teleport tiles reachable from `tile`.
    ///
    /// Must be non-empty for every tile that offers teleportation.
    fn teleport_candidates(&self, tile: Position) -> Vec<Position>;

    /// Map-space origin of a tile.
    fn to_map_coords(&self, tile: Position) -> MapPoint;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Square-tile grid with a fixed set of teleport pads.
///
/// Every pad links to every other pad, so a pad is never its own target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeleportGrid {
    dimensions: MapDimensions,
    tile_size: u32,
    pads: BTreeSet<Position>,
}

impl TeleportGrid {
    pub const DEFAULT_TILE_SIZE: u32 = 16;

    pub fn new(dimensions: MapDimensions, tile_size: u32) -> Self {
        Self {
            dimensions,
            tile_size: tile_size.max(1),
            pads: BTreeSet::new(),
        }
    }

    /// Adds a teleport pad. Pads outside the map are ignored.
    pub fn with_pad(mut self, pad: Position) -> Self {
        self.add_pad(pad);
        self
    }

    pub fn add_pad(&mut self, pad: Position) -> bool {
        if !self.dimensions.contains(pad) {
            return false;
        }
        self.pads.insert(pad)
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn pads(&self) -> impl Iterator<Item = Position> + '_ {
        self.pads.iter().copied()
    }
}

impl TileMapOracle for TeleportGrid {
    fn tile_coords_of(&self, point: MapPoint) -> Position {
        let size = self.tile_size as i32;
        Position::new(point.x.div_euclid(size), point.y.div_euclid(size))
    }

    fn teleport_candidates(&self, tile: Position) -> Vec<Position> {
        self.pads().filter(|pad| *pad != tile).collect()
    }

    fn to_map_coords(&self, tile: Position) -> MapPoint {
        let size = self.tile_size as i32;
        MapPoint::new(tile.x * size, tile.y * size)
    }
}

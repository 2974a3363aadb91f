//! Teleport pads.

use crate::env::{RngSource, TileMapOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CardinalDirection, MapPoint, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TeleportError {
    /// The map offered no target for a tile that teleports.
    #[error("no teleport targets reachable from tile {tile}")]
    NoCandidates { tile: Position },
}

impl GameError for TeleportError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoCandidates { .. } => "TELEPORT_NO_CANDIDATES",
        }
    }
}

/// Picks a teleport target uniformly and returns its map-space position.
///
/// # Errors
///
/// Returns `TeleportError::NoCandidates` when the map offers no target.
pub fn teleport(
    map: &dyn TileMapOracle,
    current: MapPoint,
    rng: &mut dyn RngSource,
) -> Result<MapPoint, TeleportError> {
    let tile = map.tile_coords_of(current);
    let candidates = map.teleport_candidates(tile);
    if candidates.is_empty() {
        tracing::error!(%tile, "teleport tile has no targets");
        return Err(TeleportError::NoCandidates { tile });
    }

    let index = rng.below(candidates.len() as u32) as usize;
    let target = candidates[index];
    tracing::debug!(from = %tile, to = %target, "teleported");
    Ok(map.to_map_coords(target))
}

/// Direction to step off the destination pad.
pub fn exit_direction(rng: &mut dyn RngSource) -> CardinalDirection {
    CardinalDirection::from_index(rng.below(4))
}

//! Encounter tiles and teleport pads.
//!
//! Reward and curse tiles share a trigger gate: each roll first checks
//! `tile_interaction_percent`, and a miss leaves the ledger untouched.
//! Magnitudes scale with the map level.
mod curse;
mod outcome;
mod reward;
mod teleport;

pub use curse::roll_curse;
pub use outcome::{EncounterOutcome, EncounterReport, EncounterTile};
pub use reward::roll_reward;
pub use teleport::{TeleportError, exit_direction, teleport};

use crate::config::StatRange;
use crate::env::RngSource;

/// Sums one draw from `range` per map level.
pub(crate) fn sum_draws(rng: &mut dyn RngSource, map_level: u32, range: StatRange) -> u32 {
    (0..map_level).fold(0u32, |total, _| {
        total.saturating_add(rng.range(range.min, range.max))
    })
}

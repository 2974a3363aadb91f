//! Experience and leveling.
mod level_up;

pub use level_up::{LevelUpSummary, grant_experience, resolve_level_up};

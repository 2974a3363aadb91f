//! Player progression and encounter rules for a tile-based RPG.
//!
//! `progression-core` owns the stat ledger, the multi-level-up resolver,
//! equipment stat deltas, and the two randomized encounter tables (reward and
//! curse tiles). Loot generation, map geometry, and the experience curve are
//! consumed through oracle traits, and every random draw comes from an
//! explicit [`RngSource`] so outcomes replay exactly under a fixed seed.
//! Mutations normally flow through [`engine::ProgressionEngine`].
pub mod config;
pub mod encounter;
pub mod engine;
pub mod env;
pub mod error;
pub mod progression;
pub mod state;

pub use config::{CurseTable, ProgressionConfig, RewardTable, StatRange};
pub use encounter::{EncounterOutcome, EncounterReport, EncounterTile, TeleportError};
pub use engine::{EngineError, ProgressionEngine};
pub use env::{
    Env, EquipSlot, ExperienceCurve, FlatCurve, GameEnv, ItemDefinition, ItemKind, ItemOracle,
    MapDimensions, OracleError, PcgRng, RngSource, ScriptedRng, StandardCurve, TeleportGrid,
    TileMapOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use progression::LevelUpSummary;
pub use state::{
    CardinalDirection, EquipmentModifier, Inventory, InventoryError, InventoryState, ItemHandle,
    LedgerViolation, MapPoint, PendingLevelUp, PlayerState, Position, StatLedger,
};

//! Authoritative player progression state.
//!
//! This module owns the stat ledger and the inventory loot lands in. Callers
//! read this state freely but mutate it through the engine or the ledger's
//! own clamping methods.
pub mod types;

pub use types::{
    CardinalDirection, EquipmentModifier, Inventory, InventoryError, InventoryState, ItemHandle,
    LedgerViolation, MapPoint, PendingLevelUp, Position, StatLedger,
};

use crate::config::ProgressionConfig;
use crate::env::{ExperienceCurve, RngSource};

/// Canonical snapshot of one player's progression.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub ledger: StatLedger,
    pub inventory: InventoryState,
}

impl PlayerState {
    /// Creates a fresh level 1 player with an empty inventory.
    pub fn new(
        config: &ProgressionConfig,
        curve: &dyn ExperienceCurve,
        rng: &mut dyn RngSource,
    ) -> Self {
        Self {
            ledger: StatLedger::new(config, curve, rng),
            inventory: InventoryState::empty(),
        }
    }
}

//! Player-facing facade over the progression rules.
//!
//! The [`ProgressionEngine`] borrows one player's state and routes every
//! mutation through the rule modules, resolving oracles from a [`GameEnv`]
//! and logging what happened. The random source is always passed per call.

use crate::config::ProgressionConfig;
use crate::encounter::{self, EncounterReport, TeleportError};
use crate::env::{GameEnv, OracleError, RngSource};
use crate::error::{ErrorSeverity, GameError};
use crate::progression::{self, LevelUpSummary};
use crate::state::{CardinalDirection, EquipmentModifier, MapPoint, PendingLevelUp, PlayerState};

/// Errors surfaced by engine operations that need an oracle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Teleport(#[from] TeleportError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::Teleport(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::Teleport(err) => err.error_code(),
        }
    }
}

/// Engine that applies progression rules to one player.
pub struct ProgressionEngine<'a> {
    player: &'a mut PlayerState,
    config: &'a ProgressionConfig,
}

impl<'a> ProgressionEngine<'a> {
    pub fn new(player: &'a mut PlayerState, config: &'a ProgressionConfig) -> Self {
        Self { player, config }
    }

    pub fn player(&self) -> &PlayerState {
        self.player
    }

    pub fn config(&self) -> &ProgressionConfig {
        self.config
    }

    /// Adds battle experience and stages any level-ups it earns.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CurveNotAvailable` without touching the ledger if
    /// the environment has no experience curve.
    pub fn grant_experience(
        &mut self,
        env: GameEnv<'_>,
        amount: u32,
        rng: &mut dyn RngSource,
    ) -> Result<LevelUpSummary, EngineError> {
        let curve = env.curve()?;
        let summary =
            progression::grant_experience(&mut self.player.ledger, amount, curve, rng, self.config);
        if summary.leveled_up() {
            tracing::info!(
                levels = summary.levels_gained,
                level = self.player.ledger.level(),
                "player leveled up"
            );
        }
        Ok(summary)
    }

    /// Resolves level-ups from an experience overflow directly.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CurveNotAvailable` if the environment has no curve.
    pub fn resolve_level_up(
        &mut self,
        env: GameEnv<'_>,
        overflow: u32,
        rng: &mut dyn RngSource,
    ) -> Result<LevelUpSummary, EngineError> {
        let curve = env.curve()?;
        Ok(progression::resolve_level_up(
            &mut self.player.ledger,
            overflow,
            curve,
            rng,
            self.config,
        ))
    }

    /// Commits staged level-up gains. Returns what was committed.
    pub fn apply_pending_level_up(&mut self) -> PendingLevelUp {
        let committed = self.player.ledger.apply_pending_level_up();
        if !committed.is_empty() {
            tracing::debug!(?committed, "committed level-up gains");
        }
        committed
    }

    pub fn equip(&mut self, modifier: &EquipmentModifier) {
        self.player.ledger.equip(modifier);
        tracing::debug!(?modifier, "equipped");
    }

    pub fn unequip(&mut self, modifier: &EquipmentModifier) {
        self.player.ledger.unequip(modifier);
        tracing::debug!(?modifier, "unequipped");
    }

    /// Consumes a potion or similar flat heal.
    pub fn heal(&mut self, amount: i32) {
        self.player.ledger.heal(amount);
    }

    /// Rolls a reward tile on a map of the given level.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if the environment has no item
    /// oracle. The check happens before any draw so a misconfigured env never
    /// consumes randomness.
    pub fn roll_reward(
        &mut self,
        env: GameEnv<'_>,
        map_level: u32,
        rng: &mut dyn RngSource,
    ) -> Result<EncounterReport, EngineError> {
        let items = env.items()?;
        let PlayerState { ledger, inventory } = &mut *self.player;
        Ok(encounter::roll_reward(
            ledger,
            inventory,
            items,
            map_level,
            rng,
            self.config,
        ))
    }

    /// Rolls a curse tile on a map of the given level.
    pub fn roll_curse(&mut self, map_level: u32, rng: &mut dyn RngSource) -> EncounterReport {
        encounter::roll_curse(&mut self.player.ledger, map_level, rng, self.config)
    }

    /// Moves from the teleport pad at `current` to a random linked pad.
    ///
    /// Returns the destination in map space and the direction to step off it.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` without a map, or
    /// `TeleportError::NoCandidates` when the map links the pad nowhere.
    pub fn teleport(
        &self,
        env: GameEnv<'_>,
        current: MapPoint,
        rng: &mut dyn RngSource,
    ) -> Result<(MapPoint, CardinalDirection), EngineError> {
        let map = env.map()?;
        let target = encounter::teleport(map, current, rng)?;
        Ok((target, encounter::exit_direction(rng)))
    }
}

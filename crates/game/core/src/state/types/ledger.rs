//! Player stat ledger.
//!
//! The ledger is the single source of truth for the player's live stats and
//! progress. Every mutating method restores the ledger invariants before it
//! returns:
//!
//! - `0 ≤ hp ≤ max_hp`
//! - `gold ≥ 0` (by type; subtraction saturates)
//! - `min_damage ≤ max_damage`
//!
//! Level-up gains are staged in [`PendingLevelUp`] and only reach the live
//! stats through [`StatLedger::apply_pending_level_up`], so the caller can
//! show a stat-gain screen between the two phases.

use crate::config::ProgressionConfig;
use crate::env::{ExperienceCurve, RngSource};
use crate::error::{ErrorSeverity, GameError};
use crate::state::EquipmentModifier;

/// Stat gains computed by level-ups but not yet committed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingLevelUp {
    /// Level-ups staged since the last commit. Gains may all be zero under a
    /// flat config, so this count is what marks a commit as due.
    pub levels: u32,
    pub hp_increase: i32,
    pub min_dmg_increase: i32,
    pub max_dmg_increase: i32,
    pub accuracy_increase: i32,
    /// Growth of `max_exp` across the staged level-ups (display only).
    pub max_exp_increase: i32,
}

impl PendingLevelUp {
    /// True when no level-up is staged.
    pub fn is_empty(&self) -> bool {
        self.levels == 0
    }
}

/// Invariant breach found by [`StatLedger::check_invariants`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LedgerViolation {
    #[error("hp {hp} outside [0, {max_hp}]")]
    HpOutOfRange { hp: i32, max_hp: i32 },

    #[error("damage range inverted: min {min} > max {max}")]
    DamageRangeInverted { min: i32, max: i32 },

    #[error("experience {exp} not below threshold {max_exp}")]
    ExperienceOverflow { exp: u32, max_exp: u32 },
}

impl GameError for LedgerViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::HpOutOfRange { .. } => "LEDGER_HP_OUT_OF_RANGE",
            Self::DamageRangeInverted { .. } => "LEDGER_DAMAGE_RANGE_INVERTED",
            Self::ExperienceOverflow { .. } => "LEDGER_EXPERIENCE_OVERFLOW",
        }
    }
}

/// The player's stat and progress record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatLedger {
    pub(crate) level: u32,
    pub(crate) exp: u32,
    pub(crate) max_exp: u32,
    pub(crate) hp: i32,
    pub(crate) max_hp: i32,
    pub(crate) accuracy: i32,
    pub(crate) min_damage: i32,
    pub(crate) max_damage: i32,
    pub(crate) gold: u32,
    pub(crate) pending: PendingLevelUp,
}

impl StatLedger {
    /// Creates a level 1 ledger from the configured starting stats.
    ///
    /// The first experience threshold is drawn from the curve with a random
    /// offset, like every later one.
    pub fn new(
        config: &ProgressionConfig,
        curve: &dyn ExperienceCurve,
        rng: &mut dyn RngSource,
    ) -> Self {
        let offset = rng.range(config.max_exp_offset.min, config.max_exp_offset.max);
        Self::with_max_exp(config, curve.max_exp(1, offset).max(1))
    }

    /// Creates a level 1 ledger with an explicit first threshold.
    pub fn with_max_exp(config: &ProgressionConfig, max_exp: u32) -> Self {
        let min_damage = config.initial_min_damage;
        Self {
            level: 1,
            exp: 0,
            max_exp: max_exp.max(1),
            hp: config.initial_max_hp,
            max_hp: config.initial_max_hp,
            accuracy: config.initial_accuracy,
            min_damage,
            max_damage: config.initial_max_damage.max(min_damage),
            gold: 0,
            pending: PendingLevelUp::default(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    pub fn max_exp(&self) -> u32 {
        self.max_exp
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn accuracy(&self) -> i32 {
        self.accuracy
    }

    pub fn min_damage(&self) -> i32 {
        self.min_damage
    }

    pub fn max_damage(&self) -> i32 {
        self.max_damage
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn pending(&self) -> &PendingLevelUp {
        &self.pending
    }

    /// Current hp as a whole percentage of max hp.
    pub fn hp_percent(&self) -> u32 {
        if self.max_hp <= 0 {
            return 0;
        }
        (self.hp.max(0) as i64 * 100 / self.max_hp as i64) as u32
    }

    /// Restores hp, never above max (potions, heal tiles).
    pub fn heal(&mut self, amount: i32) {
        self.hp = self.hp.saturating_add(amount.max(0));
        self.clamp_hp();
    }

    /// Sets hp to `hp` and clamps it into `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp;
        self.clamp_hp();
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Removes gold, stopping at zero. Returns how much was actually removed.
    pub fn remove_gold(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.gold);
        self.gold -= removed;
        removed
    }

    /// Adds an item's bonuses to the live stats.
    pub fn equip(&mut self, modifier: &EquipmentModifier) {
        self.apply_modifier(modifier);
    }

    /// Removes an item's bonuses from the live stats. Exact inverse of [`equip`](Self::equip)
    /// apart from hp clamping and the zero floor on max hp.
    pub fn unequip(&mut self, modifier: &EquipmentModifier) {
        self.apply_modifier(&-*modifier);
    }

    fn apply_modifier(&mut self, modifier: &EquipmentModifier) {
        let max_hp = self.max_hp.saturating_add(modifier.max_hp);
        if max_hp < 0 {
            tracing::warn!(max_hp, "equipment drove max hp negative; flooring at 0");
        }
        self.max_hp = max_hp.max(0);
        self.min_damage += modifier.damage;
        self.max_damage += modifier.damage;
        self.accuracy += modifier.accuracy;
        self.clamp_hp();
    }

    /// Commits staged level-up gains to the live stats and refills hp.
    ///
    /// No-op when nothing is staged, so calling it twice is safe.
    pub fn apply_pending_level_up(&mut self) -> PendingLevelUp {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return pending;
        }

        self.max_hp += pending.hp_increase;
        self.hp = self.max_hp;
        self.min_damage += pending.min_dmg_increase;
        self.max_damage += pending.max_dmg_increase;
        self.accuracy += pending.accuracy_increase;
        self.clamp_hp();
        pending
    }

    /// Checks every ledger invariant.
    ///
    /// # Errors
    ///
    /// Returns the first `LedgerViolation` found.
    pub fn check_invariants(&self) -> Result<(), LedgerViolation> {
        if self.hp < 0 || self.hp > self.max_hp {
            return Err(LedgerViolation::HpOutOfRange {
                hp: self.hp,
                max_hp: self.max_hp,
            });
        }
        if self.min_damage > self.max_damage {
            return Err(LedgerViolation::DamageRangeInverted {
                min: self.min_damage,
                max: self.max_damage,
            });
        }
        if self.exp >= self.max_exp {
            return Err(LedgerViolation::ExperienceOverflow {
                exp: self.exp,
                max_exp: self.max_exp,
            });
        }
        Ok(())
    }

    pub(crate) fn clamp_hp(&mut self) {
        self.hp = self.hp.min(self.max_hp).max(0);
    }
}

//! Level-up resolution.
//!
//! A single experience grant can cross several thresholds. Each crossed
//! threshold raises the level, stages randomized stat gains in the ledger's
//! [`PendingLevelUp`], and draws the next threshold from the experience
//! curve. Nothing reaches the live stats until
//! [`StatLedger::apply_pending_level_up`] runs.

use crate::config::ProgressionConfig;
use crate::env::{ExperienceCurve, RngSource};
use crate::state::{PendingLevelUp, StatLedger};

/// What a resolution pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpSummary {
    pub levels_gained: u32,
    /// Total staged gains after the pass, including any staged earlier.
    pub pending: PendingLevelUp,
}

impl LevelUpSummary {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Adds experience and resolves every threshold it crosses.
///
/// The ledger's `exp` is topped up first; if it reaches `max_exp`, the excess
/// is handed to [`resolve_level_up`].
pub fn grant_experience(
    ledger: &mut StatLedger,
    amount: u32,
    curve: &dyn ExperienceCurve,
    rng: &mut dyn RngSource,
    config: &ProgressionConfig,
) -> LevelUpSummary {
    ledger.exp = ledger.exp.saturating_add(amount);
    if ledger.exp < ledger.max_exp {
        return LevelUpSummary {
            levels_gained: 0,
            pending: ledger.pending,
        };
    }

    let overflow = ledger.exp - ledger.max_exp;
    resolve_level_up(ledger, overflow, curve, rng, config)
}

/// Levels up once, then keeps going while `overflow` covers the next threshold.
///
/// Per level, in draw order:
///
/// 1. hp gain from `config.hp_gain`
/// 2. damage mean from `config.damage_gain`
/// 3. min jitter in `{0, 1}` subtracted from the mean for min damage
/// 4. max jitter in `{0, 1}` added to the mean for max damage
/// 5. curve offset from `config.max_exp_offset`
///
/// Accuracy grows by one on every `config.accuracy_interval`-th level.
///
/// `overflow` shrinks by the new threshold on every extra level and thresholds
/// are at least 1, so the loop always terminates.
pub fn resolve_level_up(
    ledger: &mut StatLedger,
    mut overflow: u32,
    curve: &dyn ExperienceCurve,
    rng: &mut dyn RngSource,
    config: &ProgressionConfig,
) -> LevelUpSummary {
    let mut levels_gained = 0;

    loop {
        ledger.level += 1;
        levels_gained += 1;
        ledger.pending.levels += 1;

        let hp_gain = rng.range(config.hp_gain.min, config.hp_gain.max) as i32;
        let dmg_mean = rng.range(config.damage_gain.min, config.damage_gain.max) as i32;
        let jitter_low = rng.below(2) as i32;
        let jitter_high = rng.below(2) as i32;

        let pending = &mut ledger.pending;
        pending.hp_increase += hp_gain;
        pending.min_dmg_increase += dmg_mean - jitter_low;
        pending.max_dmg_increase += dmg_mean + jitter_high;
        if config.accuracy_interval > 0 && ledger.level % config.accuracy_interval == 0 {
            pending.accuracy_increase += 1;
        }

        let previous = ledger.max_exp;
        let offset = rng.range(config.max_exp_offset.min, config.max_exp_offset.max);
        ledger.max_exp = next_threshold(curve, ledger.level, offset);
        ledger.pending.max_exp_increase += ledger.max_exp as i32 - previous as i32;

        tracing::debug!(
            level = ledger.level,
            hp_gain,
            dmg_mean,
            max_exp = ledger.max_exp,
            "level up"
        );

        if overflow >= ledger.max_exp {
            overflow -= ledger.max_exp;
        } else {
            ledger.exp = overflow;
            break;
        }
    }

    LevelUpSummary {
        levels_gained,
        pending: ledger.pending,
    }
}

fn next_threshold(curve: &dyn ExperienceCurve, level: u32, offset: u32) -> u32 {
    let max_exp = curve.max_exp(level, offset);
    if max_exp == 0 {
        tracing::warn!(level, offset, "experience curve returned 0; using 1");
        return 1;
    }
    max_exp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatRange;
    use crate::env::{FlatCurve, PcgRng, ScriptedRng, StandardCurve};

    fn ledger(max_exp: u32) -> StatLedger {
        StatLedger::with_max_exp(&ProgressionConfig::default(), max_exp)
    }

    #[test]
    fn single_level_up_stages_gains() {
        let config = ProgressionConfig::default();
        let mut ledger = ledger(13);
        // hp 10, mean 3, jitter 1 / 0, offset 4
        let mut rng = ScriptedRng::new([10, 3, 1, 0, 4]);

        let summary = resolve_level_up(&mut ledger, 5, &StandardCurve, &mut rng, &config);

        assert_eq!(summary.levels_gained, 1);
        assert_eq!(ledger.level(), 2);
        assert_eq!(ledger.exp(), 5);
        assert_eq!(ledger.max_exp(), 36);
        assert_eq!(
            *ledger.pending(),
            PendingLevelUp {
                levels: 1,
                hp_increase: 10,
                min_dmg_increase: 2,
                max_dmg_increase: 3,
                accuracy_increase: 0,
                max_exp_increase: 23,
            }
        );
        // Live stats untouched until commit.
        assert_eq!(ledger.max_hp(), config.initial_max_hp);
    }

    #[test]
    fn overflow_crossing_two_thresholds_chains_level_ups() {
        let config = ProgressionConfig::default();
        let mut ledger = ledger(13);
        let mut rng = ScriptedRng::new([
            8, 2, 0, 1, 3, // level 2: threshold 4·3 + 20 = 32
            14, 4, 1, 1, 5, // level 3: threshold 9·5 + 30 = 75
        ]);

        let summary = resolve_level_up(&mut ledger, 40, &StandardCurve, &mut rng, &config);

        assert_eq!(summary.levels_gained, 2);
        assert_eq!(ledger.level(), 3);
        assert_eq!(ledger.exp(), 8);
        assert_eq!(ledger.max_exp(), 75);
        assert_eq!(
            summary.pending,
            PendingLevelUp {
                levels: 2,
                hp_increase: 8 + 14,
                min_dmg_increase: 2 + 3,
                max_dmg_increase: 3 + 5,
                accuracy_increase: 0,
                max_exp_increase: 75 - 13,
            }
        );
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn exact_threshold_overflow_terminates() {
        let config = ProgressionConfig::default();
        let mut ledger = ledger(10);
        let mut rng = PcgRng::new(5);

        // Every threshold is 10, so 30 overflow clears three more levels and leaves 0.
        let summary = resolve_level_up(&mut ledger, 30, &FlatCurve(10), &mut rng, &config);

        assert_eq!(summary.levels_gained, 4);
        assert_eq!(ledger.level(), 5);
        assert_eq!(ledger.exp(), 0);
        assert_eq!(ledger.pending().max_exp_increase, 0);
    }

    #[test]
    fn zero_threshold_curve_still_terminates() {
        let config = ProgressionConfig::default();
        let mut ledger = ledger(10);
        let mut rng = PcgRng::new(11);

        let summary = resolve_level_up(&mut ledger, 3, &FlatCurve(0), &mut rng, &config);

        assert_eq!(summary.levels_gained, 4);
        assert_eq!(ledger.max_exp(), 1);
        assert_eq!(ledger.exp(), 0);
    }

    #[test]
    fn commit_after_zero_gain_level_up_refills_hp() {
        let config = ProgressionConfig {
            hp_gain: StatRange::new(0, 0),
            damage_gain: StatRange::new(0, 0),
            ..ProgressionConfig::default()
        };
        // Same threshold before and after, so every staged gain is zero.
        let mut ledger = ledger(10);
        ledger.set_hp(5);
        let mut rng = ScriptedRng::new([0, 0, 0, 0, 3]);

        let summary = resolve_level_up(&mut ledger, 0, &FlatCurve(10), &mut rng, &config);
        assert_eq!(summary.levels_gained, 1);
        assert_eq!(summary.pending.levels, 1);
        assert_eq!(summary.pending.hp_increase, 0);
        assert_eq!(summary.pending.max_exp_increase, 0);

        let committed = ledger.apply_pending_level_up();

        assert_eq!(committed.levels, 1);
        assert_eq!(ledger.hp(), config.initial_max_hp);
        assert_eq!(ledger.hp(), ledger.max_hp());
        assert!(ledger.pending().is_empty());
    }

    #[test]
    fn accuracy_grows_every_tenth_level() {
        let config = ProgressionConfig::default();
        let mut ledger = ledger(1);
        let mut rng = PcgRng::new(3);

        // Flat threshold of 1 and 19 overflow: levels 2..=21.
        let summary = resolve_level_up(&mut ledger, 19, &FlatCurve(1), &mut rng, &config);

        assert_eq!(ledger.level(), 21);
        assert_eq!(summary.levels_gained, 20);
        assert_eq!(summary.pending.accuracy_increase, 2);
    }

    #[test]
    fn damage_range_widens_without_inverting() {
        let config = ProgressionConfig::default();
        let mut ledger = ledger(1);
        let mut rng = PcgRng::new(77);

        resolve_level_up(&mut ledger, 50, &FlatCurve(1), &mut rng, &config);
        let pending = *ledger.pending();
        assert!(pending.min_dmg_increase <= pending.max_dmg_increase);

        ledger.apply_pending_level_up();
        assert!(ledger.min_damage() <= ledger.max_damage());
        assert_eq!(ledger.hp(), ledger.max_hp());
    }

    #[test]
    fn grant_below_threshold_only_adds_exp() {
        let config = ProgressionConfig::default();
        let mut ledger = ledger(13);
        let mut rng = ScriptedRng::default();

        let summary = grant_experience(&mut ledger, 12, &StandardCurve, &mut rng, &config);

        assert!(!summary.leveled_up());
        assert_eq!(ledger.exp(), 12);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn grant_reaching_threshold_resolves_excess() {
        let config = ProgressionConfig::default();
        let mut ledger = ledger(13);
        ledger.exp = 10;
        let mut rng = ScriptedRng::new([9, 2, 0, 0, 3]);

        let summary = grant_experience(&mut ledger, 7, &StandardCurve, &mut rng, &config);

        assert_eq!(summary.levels_gained, 1);
        assert_eq!(ledger.level(), 2);
        assert_eq!(ledger.exp(), 4);
        assert_eq!(ledger.check_invariants(), Ok(()));
    }
}

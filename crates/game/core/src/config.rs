//! Balance constants and tunable parameters for progression and encounters.

/// Inclusive integer range used for per-level gains and encounter draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Odds and magnitudes for the beneficial "question mark" tile.
///
/// `k` is drawn from `[0, 100)`; `k < gold_threshold` pays gold,
/// `k < heal_threshold` heals, everything above drops an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardTable {
    pub gold_threshold: u32,
    pub heal_threshold: u32,
    /// Gold drawn once per map level and summed.
    pub gold_per_level: StatRange,
    /// Heal amount as a percentage of max hp (floored).
    pub heal_percent: i32,
}

impl RewardTable {
    pub const DEFAULT_GOLD_THRESHOLD: u32 = 50;
    pub const DEFAULT_HEAL_THRESHOLD: u32 = 95;
    pub const DEFAULT_GOLD_PER_LEVEL: StatRange = StatRange::new(7, 13);
    pub const DEFAULT_HEAL_PERCENT: i32 = 20;
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            gold_threshold: Self::DEFAULT_GOLD_THRESHOLD,
            heal_threshold: Self::DEFAULT_HEAL_THRESHOLD,
            gold_per_level: Self::DEFAULT_GOLD_PER_LEVEL,
            heal_percent: Self::DEFAULT_HEAL_PERCENT,
        }
    }
}

/// Odds and magnitudes for the adversarial "exclamation mark" tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CurseTable {
    /// Chance (percent) that an activated curse deals damage instead of stealing gold.
    pub damage_percent: u32,
    /// Damage dealt per map level.
    pub damage_per_level: i32,
    /// Gold stolen per map level, drawn once per level and summed.
    pub theft_per_level: StatRange,
}

impl CurseTable {
    pub const DEFAULT_DAMAGE_PERCENT: u32 = 60;
    pub const DEFAULT_DAMAGE_PER_LEVEL: i32 = 3;
    pub const DEFAULT_THEFT_PER_LEVEL: StatRange = StatRange::new(4, 9);
}

impl Default for CurseTable {
    fn default() -> Self {
        Self {
            damage_percent: Self::DEFAULT_DAMAGE_PERCENT,
            damage_per_level: Self::DEFAULT_DAMAGE_PER_LEVEL,
            theft_per_level: Self::DEFAULT_THEFT_PER_LEVEL,
        }
    }
}

/// Progression configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionConfig {
    pub initial_max_hp: i32,
    pub initial_accuracy: i32,
    pub initial_min_damage: i32,
    pub initial_max_damage: i32,

    /// Max hp gained per level.
    pub hp_gain: StatRange,
    /// Mean damage gained per level; min/max damage jitter around it by 0 or 1.
    pub damage_gain: StatRange,
    /// Offset fed to the experience curve on every level.
    pub max_exp_offset: StatRange,
    /// Accuracy grows by one every `accuracy_interval` levels.
    pub accuracy_interval: u32,

    /// Chance (percent) that an encounter tile does anything at all.
    pub tile_interaction_percent: u32,
    pub reward: RewardTable,
    pub curse: CurseTable,
}

impl ProgressionConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INVENTORY_SLOTS: usize = 24;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INITIAL_MAX_HP: i32 = 65;
    pub const DEFAULT_INITIAL_ACCURACY: i32 = 80;
    pub const DEFAULT_INITIAL_MIN_DAMAGE: i32 = 8;
    pub const DEFAULT_INITIAL_MAX_DAMAGE: i32 = 12;
    pub const DEFAULT_HP_GAIN: StatRange = StatRange::new(8, 14);
    pub const DEFAULT_DAMAGE_GAIN: StatRange = StatRange::new(2, 4);
    pub const DEFAULT_MAX_EXP_OFFSET: StatRange = StatRange::new(3, 5);
    pub const DEFAULT_ACCURACY_INTERVAL: u32 = 10;
    pub const DEFAULT_TILE_INTERACTION_PERCENT: u32 = 70;

    pub fn new() -> Self {
        Self {
            initial_max_hp: Self::DEFAULT_INITIAL_MAX_HP,
            initial_accuracy: Self::DEFAULT_INITIAL_ACCURACY,
            initial_min_damage: Self::DEFAULT_INITIAL_MIN_DAMAGE,
            initial_max_damage: Self::DEFAULT_INITIAL_MAX_DAMAGE,
            hp_gain: Self::DEFAULT_HP_GAIN,
            damage_gain: Self::DEFAULT_DAMAGE_GAIN,
            max_exp_offset: Self::DEFAULT_MAX_EXP_OFFSET,
            accuracy_interval: Self::DEFAULT_ACCURACY_INTERVAL,
            tile_interaction_percent: Self::DEFAULT_TILE_INTERACTION_PERCENT,
            reward: RewardTable::default(),
            curse: CurseTable::default(),
        }
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self::new()
    }
}

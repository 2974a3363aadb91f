//! Progression configuration loader.

use std::path::Path;

use progression_core::ProgressionConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for progression configuration from TOML files.
///
/// Missing keys fall back to [`ProgressionConfig::default`], so a file only
/// needs the values it overrides.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing ProgressionConfig
    pub fn load(path: &Path) -> LoadResult<ProgressionConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<ProgressionConfig> {
        let config: ProgressionConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        validate(&config)?;
        Ok(config)
    }
}

fn validate(config: &ProgressionConfig) -> LoadResult<()> {
    let ranges = [
        ("hp_gain", config.hp_gain),
        ("damage_gain", config.damage_gain),
        ("max_exp_offset", config.max_exp_offset),
        ("reward.gold_per_level", config.reward.gold_per_level),
        ("curse.theft_per_level", config.curse.theft_per_level),
    ];
    for (name, range) in ranges {
        if range.min > range.max {
            anyhow::bail!("{name}: min {} exceeds max {}", range.min, range.max);
        }
    }

    if config.reward.gold_threshold > config.reward.heal_threshold {
        anyhow::bail!(
            "reward.gold_threshold {} exceeds reward.heal_threshold {}",
            config.reward.gold_threshold,
            config.reward.heal_threshold
        );
    }
    if config.initial_min_damage > config.initial_max_damage {
        anyhow::bail!(
            "initial_min_damage {} exceeds initial_max_damage {}",
            config.initial_min_damage,
            config.initial_max_damage
        );
    }
    if config.initial_max_hp <= 0 {
        anyhow::bail!("initial_max_hp must be positive");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use progression_core::{RewardTable, StatRange};
    use tempfile::TempDir;

    #[test]
    fn partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
initial_max_hp = 80
tile_interaction_percent = 100

[hp_gain]
min = 5
max = 9

[reward]
gold_threshold = 40
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(&path).unwrap();

        assert_eq!(config.initial_max_hp, 80);
        assert_eq!(config.tile_interaction_percent, 100);
        assert_eq!(config.hp_gain, StatRange::new(5, 9));
        assert_eq!(config.reward.gold_threshold, 40);
        assert_eq!(
            config.reward.heal_threshold,
            RewardTable::DEFAULT_HEAL_THRESHOLD
        );
        assert_eq!(config.curse, ProgressionConfig::default().curse);
    }

    #[test]
    fn empty_file_is_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), ProgressionConfig::default());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = ConfigLoader::parse("[damage_gain]\nmin = 5\nmax = 2\n").unwrap_err();
        assert!(err.to_string().contains("damage_gain"));
    }

    #[test]
    fn missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}

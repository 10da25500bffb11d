//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`BattleConfig`] from a TOML file. Missing keys keep their
    /// defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &BattleConfig) -> LoadResult<()> {
        let probabilities = [
            ("crit_base_chance", config.crit_base_chance),
            ("crit_chance_per_luck", config.crit_chance_per_luck),
            ("flee_base_chance", config.flee_base_chance),
            ("flee_chance_per_speed", config.flee_chance_per_speed),
            ("flee_min_chance", config.flee_min_chance),
            ("flee_max_chance", config.flee_max_chance),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("{name} must be within [0, 1], got {value}");
            }
        }
        if config.flee_min_chance > config.flee_max_chance {
            anyhow::bail!(
                "flee_min_chance ({}) exceeds flee_max_chance ({})",
                config.flee_min_chance,
                config.flee_max_chance
            );
        }
        if !config.crit_multiplier.is_finite() || config.crit_multiplier < 0.0 {
            anyhow::bail!(
                "crit_multiplier must be finite and not negative, got {}",
                config.crit_multiplier
            );
        }
        Ok(())
    }
}

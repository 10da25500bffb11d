//! Simulator configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_content::{ConfigLoader, MonsterCatalog, MonsterLoader};
use battle_runtime::RuntimeConfig;

/// Configuration shared by every subcommand.
#[derive(Clone, Debug, Default)]
pub struct SimConfig {
    pub runtime: RuntimeConfig,
    pub log_dir: Option<PathBuf>,
    pub monsters_file: Option<PathBuf>,
    pub battle_config_file: Option<PathBuf>,
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_LOG_DIR` - Also write logs to `battle-sim.log` in this directory
    /// - `BATTLE_MONSTERS` - RON catalog merged over the built-in monsters
    /// - `BATTLE_CONFIG` - TOML file with battle formula overrides
    /// - plus everything [`RuntimeConfig::from_env`] reads
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            runtime: RuntimeConfig::from_lookup(&lookup),
            log_dir: lookup("BATTLE_LOG_DIR").map(PathBuf::from),
            monsters_file: lookup("BATTLE_MONSTERS").map(PathBuf::from),
            battle_config_file: lookup("BATTLE_CONFIG").map(PathBuf::from),
        }
    }

    /// Runtime configuration with file overrides applied. A `seed` given on
    /// the command line wins over `BATTLE_SEED`.
    pub fn runtime_config(&self, seed: Option<u64>) -> Result<RuntimeConfig> {
        let mut config = self.runtime.clone();
        if let Some(path) = &self.battle_config_file {
            config.battle = ConfigLoader::load(path)
                .with_context(|| format!("loading battle config from {}", path.display()))?;
        }
        if seed.is_some() {
            config.seed = seed;
        }
        Ok(config)
    }

    /// Built-in monsters, extended by `BATTLE_MONSTERS` when set.
    pub fn catalog(&self) -> Result<MonsterCatalog> {
        match &self.monsters_file {
            Some(path) => MonsterLoader::load_with_builtin(path)
                .with_context(|| format!("loading monsters from {}", path.display())),
            None => Ok(MonsterCatalog::builtin()),
        }
    }
}

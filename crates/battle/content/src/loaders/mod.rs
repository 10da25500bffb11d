//! Content loaders for reading battle data from files.
//!
//! - `monsters.ron`: monster catalog, `Vec<(String, MonsterTemplate)>`
//! - `battle.toml`: [`BattleConfig`](battle_core::BattleConfig) overrides

pub mod config;
pub mod monsters;

pub use config::ConfigLoader;
pub use monsters::MonsterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

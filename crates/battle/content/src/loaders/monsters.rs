//! Monster catalog loader.

use std::path::Path;

use battle_core::MonsterTemplate;

use crate::loaders::{LoadResult, read_file};
use crate::monsters::MonsterCatalog;

/// Loader for monster catalogs from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    /// Load a catalog from a RON file.
    ///
    /// RON format: `Vec<(String, MonsterTemplate)>`, keyed entries in
    /// selection order. Omitted `stats` default to 1 in every attribute.
    pub fn load(path: &Path) -> LoadResult<MonsterCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MonsterCatalog> {
        let entries: Vec<(String, MonsterTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster catalog RON: {}", e))?;

        for (key, template) in &entries {
            if template.base_health == 0 {
                anyhow::bail!("Monster '{}' has zero base_health", key);
            }
            if template.level == 0 {
                anyhow::bail!("Monster '{}' has level 0", key);
            }
        }

        Ok(entries.into_iter().collect())
    }

    /// Load a RON catalog on top of the built-in monsters. Entries with an
    /// existing key replace the built-in template.
    pub fn load_with_builtin(path: &Path) -> LoadResult<MonsterCatalog> {
        let mut catalog = MonsterCatalog::builtin();
        for (key, template) in Self::load(path)?.iter() {
            catalog.insert(key, template.clone());
        }
        Ok(catalog)
    }
}

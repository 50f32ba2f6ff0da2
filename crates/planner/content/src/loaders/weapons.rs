//! Weapon table loader.

use std::collections::BTreeMap;
use std::path::Path;

use planner_core::{WeaponRecord, WeaponTable};

use crate::loaders::{LoadResult, read_file};

/// Loader for `weapon-stats.json`.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load a weapon table from a JSON file.
    pub fn load(path: &Path) -> LoadResult<WeaponTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon table {}: {}", path.display(), e))
    }

    /// Parse a harvested weapon map (`{ "<lowercased name>": { ...record } }`).
    pub fn parse(json: &str) -> LoadResult<WeaponTable> {
        let records: BTreeMap<String, WeaponRecord> = serde_json::from_str(json)?;
        tracing::debug!(count = records.len(), "parsed weapon table");
        Ok(records.into_iter().collect())
    }
}

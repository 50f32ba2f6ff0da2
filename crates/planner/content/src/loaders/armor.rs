//! Armor table loader.

use std::collections::BTreeMap;
use std::path::Path;

use planner_core::{ArmorRecord, ArmorTable};

use crate::loaders::{LoadResult, read_file};

/// Loader for `armor-data.json`.
pub struct ArmorLoader;

impl ArmorLoader {
    /// Load an armor table from a JSON file.
    pub fn load(path: &Path) -> LoadResult<ArmorTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse armor table {}: {}", path.display(), e))
    }

    /// Parse a harvested armor map (`{ "<lowercased name>": { ...record } }`).
    pub fn parse(json: &str) -> LoadResult<ArmorTable> {
        let records: BTreeMap<String, ArmorRecord> = serde_json::from_str(json)?;
        tracing::debug!(count = records.len(), "parsed armor table");
        Ok(records.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{ArmorCategory, ArmorClass};

    #[test]
    fn parses_harvested_shape() {
        let json = r#"{
            "paladin helmet": {
                "name": "Paladin Helmet",
                "category": "helmet",
                "manufacturer": null,
                "armorClass": "heavy",
                "dmgReduction": 0.2,
                "tempMin": -75,
                "tempMax": null,
                "resistance": { "physical": 0.6 },
                "cargo": 0
            }
        }"#;

        let table = ArmorLoader::parse(json).unwrap();
        let helmet = table.lookup("Paladin Helmet").unwrap();
        assert_eq!(helmet.category, ArmorCategory::Helmet);
        assert_eq!(helmet.armor_class, Some(ArmorClass::Heavy));
        assert_eq!(helmet.temp_min, Some(-75.0));
        assert_eq!(helmet.temp_max, None);
        assert_eq!(helmet.resistance.physical, 0.6);
        assert_eq!(helmet.resistance.energy, 1.0);
        assert_eq!(helmet.rad_resistance, 0.0);
    }

    #[test]
    fn rejects_unknown_category() {
        let json = r#"{ "x": { "name": "X", "category": "boots" } }"#;
        assert!(ArmorLoader::parse(json).is_err());
    }
}

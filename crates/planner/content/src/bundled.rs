//! Reference tables compiled into the binary.

use planner_core::ReferenceTables;

use crate::loaders::{ArmorLoader, LoadResult, WeaponLoader};

const ARMOR_JSON: &str = include_str!("../data/armor-data.json");
const WEAPON_JSON: &str = include_str!("../data/weapon-stats.json");

/// Parses the bundled armor and weapon tables.
pub fn bundled_tables() -> LoadResult<ReferenceTables> {
    let armor = ArmorLoader::parse(ARMOR_JSON)
        .map_err(|e| anyhow::anyhow!("Failed to parse bundled armor table: {}", e))?;
    let weapons = WeaponLoader::parse(WEAPON_JSON)
        .map_err(|e| anyhow::anyhow!("Failed to parse bundled weapon table: {}", e))?;
    Ok(ReferenceTables::new(armor, weapons))
}

//! Content factory for building reference tables from a data directory.

use std::path::{Path, PathBuf};

use planner_core::{ArmorTable, ReferenceTables, WeaponTable};

use crate::loaders::{ArmorLoader, LoadResult, WeaponLoader};

/// Loads harvested tables from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── armor-data.json
/// └── weapon-stats.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const ARMOR_FILE: &'static str = "armor-data.json";
    pub const WEAPON_FILE: &'static str = "weapon-stats.json";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the armor table from `armor-data.json`.
    pub fn load_armor(&self) -> LoadResult<ArmorTable> {
        ArmorLoader::load(&self.data_dir.join(Self::ARMOR_FILE))
    }

    /// Load the weapon table from `weapon-stats.json`.
    pub fn load_weapons(&self) -> LoadResult<WeaponTable> {
        WeaponLoader::load(&self.data_dir.join(Self::WEAPON_FILE))
    }

    /// Load both tables.
    pub fn load_tables(&self) -> LoadResult<ReferenceTables> {
        let armor = self.load_armor()?;
        let weapons = self.load_weapons()?;
        tracing::info!(
            dir = %self.data_dir.display(),
            armor = armor.len(),
            weapons = weapons.len(),
            "loaded reference tables"
        );
        Ok(ReferenceTables::new(armor, weapons))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

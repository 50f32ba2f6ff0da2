//! Harvested reference data and its loaders.
//!
//! Armor and weapon statistics are scraped offline into two JSON files keyed
//! by lowercased item name:
//! - `armor-data.json` → [`ArmorTable`](planner_core::ArmorTable)
//! - `weapon-stats.json` → [`WeaponTable`](planner_core::WeaponTable)
//!
//! A copy of both files is compiled into the crate ([`bundled`]) so the planner
//! works without a data directory; [`ContentFactory`] loads replacements from disk.

pub mod bundled;
pub mod loaders;

pub use bundled::bundled_tables;
pub use loaders::{ArmorLoader, ContentFactory, LoadResult, WeaponLoader};

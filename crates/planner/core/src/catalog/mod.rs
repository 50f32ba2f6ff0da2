//! Reference-table records and the lookup seam used by aggregation.
//!
//! Tables are immutable once built; the content crate fills them from the
//! harvested JSON files.

mod armor;
mod lookup;
mod weapon;

pub use armor::{ArmorCategory, ArmorRecord, ArmorTable};
pub use lookup::{normalize, strip_parenthetical_suffix, strip_quoted};
pub use weapon::{REFERENCE_HEALTH, WeaponCategory, WeaponRecord, WeaponTable};

use crate::schema::ArmorClass;

/// Read-only item lookup.
///
/// Lookups never fail: an unknown name is simply `None`.
pub trait ItemCatalog {
    fn armor(&self, name: &str) -> Option<&ArmorRecord>;

    fn weapon(&self, name: &str) -> Option<&WeaponRecord>;

    /// Armor class of the named piece, when the table knows one.
    fn armor_class_of(&self, name: &str) -> Option<ArmorClass> {
        self.armor(name).and_then(|record| record.armor_class)
    }
}

/// Armor plus weapon tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceTables {
    pub armor: ArmorTable,
    pub weapons: WeaponTable,
}

impl ReferenceTables {
    pub fn new(armor: ArmorTable, weapons: WeaponTable) -> Self {
        Self { armor, weapons }
    }
}

impl ItemCatalog for ReferenceTables {
    fn armor(&self, name: &str) -> Option<&ArmorRecord> {
        self.armor.lookup(name)
    }

    fn weapon(&self, name: &str) -> Option<&WeaponRecord> {
        self.weapons.lookup(name)
    }
}

impl<T: ItemCatalog + ?Sized> ItemCatalog for &T {
    fn armor(&self, name: &str) -> Option<&ArmorRecord> {
        (**self).armor(name)
    }

    fn weapon(&self, name: &str) -> Option<&WeaponRecord> {
        (**self).weapon(name)
    }
}

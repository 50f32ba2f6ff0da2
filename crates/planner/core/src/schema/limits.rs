//! Slot-count ceilings per armor class and slot visibility.
//!
//! Heavier core armor exposes more ammo and throwable slots. Hidden slots keep
//! their contents; visibility is a pure function of the current class, so a
//! downgrade followed by an upgrade shows the same items again.

use super::slots::{SLOTS, SlotDefinition, SlotGroup, index_in_group, ids};
use crate::catalog::ItemCatalog;
use crate::loadout::{Loadout, SlotClasses};

/// Armor weight class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ArmorClass {
    Light,
    #[default]
    Medium,
    Heavy,
}

const AMMO_SLOTS: [usize; 3] = [4, 6, 8];
const THROWABLE_SLOTS: [usize; 3] = [2, 3, 4];
const CONSUMABLE_SLOTS: [usize; 3] = [4, 4, 4];

impl ArmorClass {
    const fn tier(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Medium => 1,
            Self::Heavy => 2,
        }
    }
}

/// Maximum number of visible slots for `group` under `class`.
///
/// Groups without a class-dependent ceiling, and every group when no class is
/// known, are unlimited.
pub fn max_slots(group: SlotGroup, class: Option<ArmorClass>) -> usize {
    let Some(class) = class else {
        return usize::MAX;
    };
    match group {
        SlotGroup::Ammo => AMMO_SLOTS[class.tier()],
        SlotGroup::Throwables => THROWABLE_SLOTS[class.tier()],
        SlotGroup::Consumables => CONSUMABLE_SLOTS[class.tier()],
        SlotGroup::Armor | SlotGroup::Weapons | SlotGroup::Multitools => usize::MAX,
    }
}

/// Class that governs slot limits: the core piece's class, medium if unset.
pub fn effective_armor_class(classes: &SlotClasses) -> ArmorClass {
    classes.get(ids::CORE).copied().unwrap_or_default()
}

/// Returns true if the slot is shown under the given class.
///
/// Unknown slot ids are never visible.
pub fn is_slot_visible(id: &str, class: ArmorClass) -> bool {
    match (super::slot(id), index_in_group(id)) {
        (Some(def), Some(idx)) => idx < max_slots(def.group, Some(class)),
        _ => false,
    }
}

/// Slots currently visible for a loadout, in schema order.
pub fn visible_slots(loadout: &Loadout) -> impl Iterator<Item = &'static SlotDefinition> {
    let class = effective_armor_class(&loadout.slot_classes);
    SLOTS.iter().filter(move |s| is_slot_visible(s.id, class))
}

/// Number of visible slots for a loadout.
pub fn visible_slot_count(loadout: &Loadout) -> usize {
    visible_slots(loadout).count()
}

/// Number of visible slots that hold an item.
pub fn filled_slot_count(loadout: &Loadout) -> usize {
    visible_slots(loadout)
        .filter(|s| loadout.equipped(s.id).is_some())
        .count()
}

/// The equipped backpack's class, if the catalog rates it heavier than the
/// effective core class. A heavy pack needs heavy core armor to be worn.
///
/// Backpacks the catalog cannot classify never trip the check.
pub fn backpack_exceeds_core<C: ItemCatalog + ?Sized>(
    loadout: &Loadout,
    catalog: &C,
) -> Option<ArmorClass> {
    let backpack = loadout
        .equipped(ids::BACKPACK)
        .and_then(|item| catalog.armor_class_of(item))?;
    (backpack > effective_armor_class(&loadout.slot_classes)).then_some(backpack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArmorCategory, ArmorRecord, ReferenceTables};
    use crate::loadout::SlotValue;
    use crate::schema::slots_in_group;
    use chrono::{TimeZone, Utc};

    fn visible_in(group: SlotGroup, class: ArmorClass) -> usize {
        slots_in_group(group)
            .filter(|s| is_slot_visible(s.id, class))
            .count()
    }

    #[test]
    fn ceilings_per_class() {
        assert_eq!(max_slots(SlotGroup::Ammo, Some(ArmorClass::Light)), 4);
        assert_eq!(max_slots(SlotGroup::Ammo, Some(ArmorClass::Medium)), 6);
        assert_eq!(max_slots(SlotGroup::Ammo, Some(ArmorClass::Heavy)), 8);
        assert_eq!(max_slots(SlotGroup::Throwables, Some(ArmorClass::Light)), 2);
        assert_eq!(max_slots(SlotGroup::Throwables, Some(ArmorClass::Heavy)), 4);
        assert_eq!(max_slots(SlotGroup::Consumables, Some(ArmorClass::Light)), 4);
        assert_eq!(max_slots(SlotGroup::Weapons, Some(ArmorClass::Light)), usize::MAX);
    }

    #[test]
    fn no_class_means_unlimited() {
        for group in SlotGroup::all() {
            assert_eq!(max_slots(group, None), usize::MAX);
        }
    }

    #[test]
    fn visibility_counts_match_ceilings() {
        assert_eq!(visible_in(SlotGroup::Ammo, ArmorClass::Light), 4);
        assert_eq!(visible_in(SlotGroup::Throwables, ArmorClass::Light), 2);
        assert_eq!(visible_in(SlotGroup::Consumables, ArmorClass::Light), 4);
        assert_eq!(visible_in(SlotGroup::Ammo, ArmorClass::Heavy), 8);
        assert_eq!(visible_in(SlotGroup::Throwables, ArmorClass::Heavy), 4);
        assert_eq!(visible_in(SlotGroup::Consumables, ArmorClass::Heavy), 4);
        assert_eq!(visible_in(SlotGroup::Weapons, ArmorClass::Light), 3);
    }

    #[test]
    fn effective_class_defaults_to_medium() {
        let mut classes = SlotClasses::new();
        assert_eq!(effective_armor_class(&classes), ArmorClass::Medium);

        classes.insert(ids::HELMET.to_string(), ArmorClass::Heavy);
        assert_eq!(effective_armor_class(&classes), ArmorClass::Medium);

        classes.insert(ids::CORE.to_string(), ArmorClass::Light);
        assert_eq!(effective_armor_class(&classes), ArmorClass::Light);
    }

    #[test]
    fn armor_class_parses_case_insensitively() {
        assert_eq!("HEAVY".parse::<ArmorClass>().unwrap(), ArmorClass::Heavy);
        assert_eq!(ArmorClass::Light.to_string(), "light");
    }

    fn backpack_catalog() -> ReferenceTables {
        let mut tables = ReferenceTables::default();
        for (name, class) in [
            ("Hauler Pack", ArmorClass::Heavy),
            ("Day Pack", ArmorClass::Light),
        ] {
            tables.armor.insert(
                name,
                ArmorRecord::new(name, ArmorCategory::Backpack).with_class(class),
            );
        }
        tables
    }

    fn exceeds(item: &str, core: Option<ArmorClass>) -> Option<ArmorClass> {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let mut loadout = Loadout::empty("l".into(), "Pack test", now);
        loadout
            .slots
            .insert(ids::BACKPACK.to_string(), SlotValue::item(item));
        if let Some(core) = core {
            loadout.slot_classes.insert(ids::CORE.to_string(), core);
        }
        backpack_exceeds_core(&loadout, &backpack_catalog())
    }

    #[test]
    fn heavy_backpack_needs_heavy_core() {
        assert_eq!(exceeds("Hauler Pack", None), Some(ArmorClass::Heavy));
        assert_eq!(
            exceeds("hauler pack", Some(ArmorClass::Light)),
            Some(ArmorClass::Heavy)
        );
        assert_eq!(exceeds("Hauler Pack", Some(ArmorClass::Heavy)), None);
    }

    #[test]
    fn light_or_unknown_backpacks_never_exceed() {
        assert_eq!(exceeds("Day Pack", Some(ArmorClass::Light)), None);
        assert_eq!(exceeds("Mystery Pack", Some(ArmorClass::Light)), None);
        assert_eq!(exceeds("", None), None);
    }
}

//! The static, ordered slot schema.
//!
//! Slot ids double as storage keys in persisted loadouts, so they must never be
//! renamed without a migration step in the store.

use strum::IntoEnumIterator;

/// Slot identifiers used as keys in [`SlotMap`](crate::SlotMap).
pub mod ids {
    pub const UNDERSUIT: &str = "undersuit";
    pub const HELMET: &str = "helmet";
    pub const CORE: &str = "core";
    pub const ARMS: &str = "arms";
    pub const LEGS: &str = "legs";
    pub const BACKPACK: &str = "backpack";

    pub const PRIMARY1: &str = "primary1";
    pub const PRIMARY2: &str = "primary2";
    pub const SIDEARM: &str = "sidearm";

    pub const MULTITOOL1: &str = "multitool1";
    pub const MULTITOOL2: &str = "multitool2";

    pub const THROWABLE1: &str = "throwable1";

    pub const CONSUMABLE1: &str = "consumable1";
    pub const CONSUMABLE2: &str = "consumable2";
    pub const CONSUMABLE3: &str = "consumable3";
}

/// Display/grouping category of a slot.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum SlotGroup {
    Armor,
    Weapons,
    Multitools,
    Ammo,
    Throwables,
    Consumables,
}

impl SlotGroup {
    /// Heading used when rendering the group.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Armor => "Armor",
            Self::Weapons => "Weapons",
            Self::Multitools => "Multitools",
            Self::Ammo => "Ammo / Magazines",
            Self::Throwables => "Throwables",
            Self::Consumables => "Consumables",
        }
    }

    /// All groups in display order.
    pub fn all() -> impl Iterator<Item = SlotGroup> {
        Self::iter()
    }
}

/// One entry of the slot schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub group: SlotGroup,
    pub placeholder: &'static str,
}

impl SlotDefinition {
    const fn new(
        id: &'static str,
        label: &'static str,
        group: SlotGroup,
        placeholder: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            group,
            placeholder,
        }
    }
}

use SlotGroup::*;

/// Every slot, in storage and display order.
pub const SLOTS: &[SlotDefinition] = &[
    SlotDefinition::new(ids::UNDERSUIT, "Undersuit", Armor, "e.g. Odyssey II"),
    SlotDefinition::new(ids::HELMET, "Helmet", Armor, "e.g. Morozov"),
    SlotDefinition::new(ids::CORE, "Core / Chest", Armor, "e.g. Paladin Heavy"),
    SlotDefinition::new(ids::ARMS, "Arms", Armor, "e.g. Paladin Arms"),
    SlotDefinition::new(ids::LEGS, "Legs", Armor, "e.g. Paladin Legs"),
    SlotDefinition::new(ids::BACKPACK, "Backpack", Armor, "e.g. Pembroke Backpack"),
    SlotDefinition::new(ids::PRIMARY1, "Primary 1", Weapons, "e.g. Gallant Rifle"),
    SlotDefinition::new(ids::PRIMARY2, "Primary 2", Weapons, "e.g. Devastator Shotgun"),
    SlotDefinition::new(ids::SIDEARM, "Sidearm", Weapons, "e.g. Arclight Pistol"),
    SlotDefinition::new(ids::MULTITOOL1, "Multitool 1 (Left)", Multitools, "e.g. Mining"),
    SlotDefinition::new(ids::MULTITOOL2, "Multitool 2 (Right)", Multitools, "e.g. Tractor Beam"),
    SlotDefinition::new("ammo1", "Ammo 1", Ammo, "e.g. Rifle magazine"),
    SlotDefinition::new("ammo2", "Ammo 2", Ammo, "e.g. Rifle magazine"),
    SlotDefinition::new("ammo3", "Ammo 3", Ammo, "e.g. Shotgun magazine"),
    SlotDefinition::new("ammo4", "Ammo 4", Ammo, "e.g. Pistol magazine"),
    SlotDefinition::new("ammo5", "Ammo 5", Ammo, "e.g. Rifle magazine"),
    SlotDefinition::new("ammo6", "Ammo 6", Ammo, "e.g. Rifle magazine"),
    SlotDefinition::new("ammo7", "Ammo 7", Ammo, "e.g. Rifle magazine"),
    SlotDefinition::new("ammo8", "Ammo 8", Ammo, "e.g. Rifle magazine"),
    SlotDefinition::new(ids::THROWABLE1, "Throwable 1", Throwables, "e.g. Frag Grenade"),
    SlotDefinition::new("throwable2", "Throwable 2", Throwables, "e.g. Frag Grenade"),
    SlotDefinition::new("throwable3", "Throwable 3", Throwables, "e.g. Flare"),
    SlotDefinition::new("throwable4", "Throwable 4", Throwables, "e.g. EMP Grenade"),
    SlotDefinition::new(ids::CONSUMABLE1, "Consumable 1", Consumables, "e.g. MedPen"),
    SlotDefinition::new(ids::CONSUMABLE2, "Consumable 2", Consumables, "e.g. MedPen"),
    SlotDefinition::new(ids::CONSUMABLE3, "Consumable 3", Consumables, "e.g. OxyPen"),
    SlotDefinition::new("consumable4", "Consumable 4", Consumables, "e.g. Food / Water"),
];

/// Armor slots whose armor class the user can pin (the undersuit has no class).
pub const CLASSED_ARMOR_SLOTS: [&str; 5] =
    [ids::HELMET, ids::CORE, ids::ARMS, ids::LEGS, ids::BACKPACK];

/// Looks up a slot definition by id.
pub fn slot(id: &str) -> Option<&'static SlotDefinition> {
    SLOTS.iter().find(|s| s.id == id)
}

/// Slots belonging to `group`, in schema order.
pub fn slots_in_group(group: SlotGroup) -> impl Iterator<Item = &'static SlotDefinition> {
    SLOTS.iter().filter(move |s| s.group == group)
}

/// Position of a slot within its own group, or `None` for unknown ids.
pub fn index_in_group(id: &str) -> Option<usize> {
    let def = slot(id)?;
    slots_in_group(def.group).position(|s| s.id == id)
}

/// Returns true if `id` is an armor slot that carries an armor class.
pub fn is_classed_armor_slot(id: &str) -> bool {
    CLASSED_ARMOR_SLOTS.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slot_ids_are_unique() {
        let ids: HashSet<_> = SLOTS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SLOTS.len());
    }

    #[test]
    fn group_sizes_cover_heavy_ceiling() {
        assert_eq!(slots_in_group(SlotGroup::Ammo).count(), 8);
        assert_eq!(slots_in_group(SlotGroup::Throwables).count(), 4);
        assert_eq!(slots_in_group(SlotGroup::Consumables).count(), 4);
        assert_eq!(slots_in_group(SlotGroup::Armor).count(), 6);
    }

    #[test]
    fn index_in_group_is_relative() {
        assert_eq!(index_in_group("ammo1"), Some(0));
        assert_eq!(index_in_group("ammo5"), Some(4));
        assert_eq!(index_in_group("throwable2"), Some(1));
        assert_eq!(index_in_group("utility1"), None);
    }

    #[test]
    fn groups_are_contiguous_in_schema() {
        let mut seen = Vec::new();
        for def in SLOTS {
            if seen.last() != Some(&def.group) {
                assert!(!seen.contains(&def.group), "{} split", def.group);
                seen.push(def.group);
            }
        }
        assert_eq!(seen, SlotGroup::all().collect::<Vec<_>>());
    }
}

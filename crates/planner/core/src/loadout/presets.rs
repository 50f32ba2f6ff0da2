//! Mission-type presets for freshly created loadouts.

use chrono::{DateTime, Utc};

use super::types::{Loadout, LoadoutId, MissionType, SlotValue};
use crate::schema::{ArmorClass, CLASSED_ARMOR_SLOTS, ids};

/// Recommended gear and notes for one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetSlot {
    pub slot: &'static str,
    pub item: &'static str,
    pub notes: &'static str,
}

const fn p(slot: &'static str, item: &'static str, notes: &'static str) -> PresetSlot {
    PresetSlot { slot, item, notes }
}

/// Default armor class plus per-slot recommendations for a mission type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissionPreset {
    pub armor_class: ArmorClass,
    pub slots: &'static [PresetSlot],
}

const UNIFORM: &[PresetSlot] = &[
    p(ids::UNDERSUIT, "", "Org-required undersuit"),
    p(ids::HELMET, "", "Org-required helmet"),
    p(ids::CORE, "", "Org-required chest"),
    p(ids::ARMS, "", "Org-required arms"),
    p(ids::LEGS, "", "Org-required legs"),
    p(ids::BACKPACK, "", "Org-required backpack"),
];

const COMBAT: &[PresetSlot] = &[
    p(ids::CORE, "", "Heavy armor recommended"),
    p(ids::PRIMARY1, "", "Assault rifle / LMG"),
    p(ids::PRIMARY2, "", "Shotgun for CQB"),
    p(ids::SIDEARM, "", "Backup pistol"),
    p(ids::CONSUMABLE1, "MedPen", ""),
    p(ids::CONSUMABLE2, "MedPen", ""),
    p(ids::THROWABLE1, "Frag Grenade", ""),
];

const STEALTH: &[PresetSlot] = &[
    p(ids::CORE, "", "Light armor - low signature"),
    p(ids::PRIMARY1, "", "Suppressed weapon"),
    p(ids::SIDEARM, "", "Suppressed pistol"),
    p(ids::CONSUMABLE1, "MedPen", ""),
];

const MINING: &[PresetSlot] = &[
    p(ids::CORE, "", "Light/medium with good temp range"),
    p(ids::BACKPACK, "", "Large backpack for ore"),
    p(ids::MULTITOOL1, "Mining", "Mining attachment"),
    p(ids::MULTITOOL2, "Tractor Beam", "Tractor beam"),
    p(ids::CONSUMABLE1, "MedPen", ""),
];

const MEDICAL: &[PresetSlot] = &[
    p(ids::CORE, "", "Support-category armor"),
    p(ids::MULTITOOL1, "Medical", ""),
    p(ids::CONSUMABLE1, "MedPen (Hemozal)", ""),
    p(ids::CONSUMABLE2, "AdrenaPen", ""),
    p(ids::CONSUMABLE3, "CorticoPen", ""),
];

const SALVAGE: &[PresetSlot] = &[
    p(ids::CORE, "", "Utility armor"),
    p(ids::BACKPACK, "", "Large backpack"),
    p(ids::MULTITOOL1, "Salvage", ""),
    p(ids::CONSUMABLE1, "MedPen", ""),
];

const EVA: &[PresetSlot] = &[
    p(ids::UNDERSUIT, "", "Good temp range essential"),
    p(ids::HELMET, "", "Required - no atmo"),
    p(ids::CORE, "", "Light for mobility"),
    p(ids::CONSUMABLE1, "OxyPen", ""),
    p(ids::CONSUMABLE2, "MedPen", ""),
];

const EXPLORATION: &[PresetSlot] = &[
    p(ids::CORE, "", "Medium armor - balanced"),
    p(ids::PRIMARY1, "", "Versatile weapon"),
    p(ids::SIDEARM, "", "Backup"),
    p(ids::MULTITOOL1, "Cutter", ""),
    p(ids::CONSUMABLE1, "MedPen", ""),
    p(ids::CONSUMABLE2, "OxyPen", ""),
    p(ids::CONSUMABLE3, "Food / Water", ""),
];

const CUSTOM: &[PresetSlot] = &[];

impl MissionType {
    /// Preset applied when a loadout of this type is created.
    pub fn preset(&self) -> MissionPreset {
        use ArmorClass::*;
        let (armor_class, slots) = match self {
            Self::Combat => (Heavy, COMBAT),
            Self::Stealth => (Light, STEALTH),
            Self::Mining => (Medium, MINING),
            Self::Medical => (Medium, MEDICAL),
            Self::Salvage => (Medium, SALVAGE),
            Self::Eva => (Light, EVA),
            Self::Exploration => (Medium, EXPLORATION),
            Self::Uniform1 | Self::Uniform2 => (Medium, UNIFORM),
            Self::Custom => (Medium, CUSTOM),
        };
        MissionPreset { armor_class, slots }
    }
}

impl Loadout {
    /// Creates a loadout pre-filled with the mission type's preset.
    ///
    /// Every classed armor slot starts at the preset's armor class.
    pub fn from_preset(
        id: LoadoutId,
        name: impl Into<String>,
        mission_type: MissionType,
        now: DateTime<Utc>,
    ) -> Self {
        let mut loadout = Loadout::empty(id, name, now);
        loadout.mission_type = mission_type;

        let preset = mission_type.preset();
        for slot in preset.slots {
            loadout.slots.insert(
                slot.slot.to_string(),
                SlotValue::item(slot.item).with_notes(slot.notes),
            );
        }
        for slot in CLASSED_ARMOR_SLOTS {
            loadout
                .slot_classes
                .insert(slot.to_string(), preset.armor_class);
        }
        loadout
    }
}

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::schema::{ArmorClass, SLOTS, effective_armor_class};

/// Current shape of persisted loadout records.
///
/// Bumped whenever the store gains a migration step.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Opaque loadout identifier, stable across edits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LoadoutId(String);

impl LoadoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoadoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LoadoutId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Mission a loadout is planned for.
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
#[strum(ascii_case_insensitive)]
pub enum MissionType {
    Combat,
    Stealth,
    Mining,
    Medical,
    Salvage,
    #[cfg_attr(feature = "serde", serde(rename = "EVA"))]
    #[strum(to_string = "EVA")]
    Eva,
    Exploration,
    #[cfg_attr(feature = "serde", serde(rename = "Uniform 1"))]
    #[strum(to_string = "Uniform 1", serialize = "uniform1", serialize = "uniform-1")]
    Uniform1,
    #[cfg_attr(feature = "serde", serde(rename = "Uniform 2"))]
    #[strum(to_string = "Uniform 2", serialize = "uniform2", serialize = "uniform-2")]
    Uniform2,
    #[default]
    Custom,
}

/// Contents of one slot: an item name plus an optional per-slot note.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotValue {
    #[cfg_attr(feature = "serde", serde(default))]
    pub item: String,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub notes: Option<String>,
}

impl SlotValue {
    /// An unequipped slot.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn item(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Trimmed item name, or `None` when the slot is unequipped.
    pub fn equipped(&self) -> Option<&str> {
        let item = self.item.trim();
        (!item.is_empty()).then_some(item)
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped().is_some()
    }
}

/// Slot id → contents.
pub type SlotMap = BTreeMap<String, SlotValue>;

/// Armor slot id → pinned armor class.
pub type SlotClasses = BTreeMap<String, ArmorClass>;

/// A user's named gear configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Loadout {
    pub id: LoadoutId,
    pub name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub mission_type: MissionType,

    #[cfg_attr(feature = "serde", serde(default))]
    pub slot_classes: SlotClasses,

    #[cfg_attr(feature = "serde", serde(default))]
    pub slots: SlotMap,

    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub schema_version: u32,
}

impl Loadout {
    /// Creates a loadout with every schema slot present and empty.
    pub fn empty(id: LoadoutId, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        let slots = SLOTS
            .iter()
            .map(|s| (s.id.to_string(), SlotValue::empty()))
            .collect();
        Self {
            id,
            name: name.into(),
            mission_type: MissionType::Custom,
            slot_classes: SlotClasses::new(),
            slots,
            notes: String::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Slot contents by id.
    pub fn slot(&self, id: &str) -> Option<&SlotValue> {
        self.slots.get(id)
    }

    /// Trimmed item equipped in `id`, if any.
    pub fn equipped(&self, id: &str) -> Option<&str> {
        self.slots.get(id).and_then(SlotValue::equipped)
    }

    /// Class governing slot limits for this loadout.
    pub fn effective_armor_class(&self) -> ArmorClass {
        effective_armor_class(&self.slot_classes)
    }

    /// Inserts an empty entry for every schema slot that is missing.
    ///
    /// Returns true if anything was added. Keys outside the schema are kept.
    pub fn ensure_schema_slots(&mut self) -> bool {
        let mut changed = false;
        for def in SLOTS {
            if !self.slots.contains_key(def.id) {
                self.slots.insert(def.id.to_string(), SlotValue::empty());
                changed = true;
            }
        }
        changed
    }

    /// Stamps `updated_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    /// Deep copy under a new identity with " (Copy)" appended to the name.
    pub fn duplicate(&self, id: LoadoutId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: format!("{} (Copy)", self.name),
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }
}

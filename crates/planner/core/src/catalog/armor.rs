use std::collections::BTreeMap;

use super::lookup::{normalize, strip_parenthetical_suffix};
use crate::schema::ArmorClass;
use crate::stats::Resistance;

/// Body location an armor piece occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ArmorCategory {
    Helmet,
    Torso,
    Arm,
    Leg,
    Backpack,
    Undersuit,
}

/// Harvested stats for one armor item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ArmorRecord {
    pub name: String,
    pub category: ArmorCategory,

    #[cfg_attr(feature = "serde", serde(default))]
    pub manufacturer: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub armor_class: Option<ArmorClass>,

    /// Flat damage-reduction fraction (0.1 = 10 %).
    #[cfg_attr(feature = "serde", serde(default))]
    pub dmg_reduction: f64,

    /// Lowest operable temperature in °C.
    #[cfg_attr(feature = "serde", serde(default))]
    pub temp_min: Option<f64>,

    /// Highest operable temperature in °C.
    #[cfg_attr(feature = "serde", serde(default))]
    pub temp_max: Option<f64>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub rad_resistance: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub rad_scrub_rate: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub resistance: Resistance,

    #[cfg_attr(feature = "serde", serde(default))]
    pub volume: f64,

    /// Carrying capacity in µSCU.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cargo: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub grade: Option<String>,
}

impl ArmorRecord {
    /// Minimal record with no mitigation; used by tests and builders.
    pub fn new(name: impl Into<String>, category: ArmorCategory) -> Self {
        Self {
            name: name.into(),
            category,
            manufacturer: None,
            armor_class: None,
            dmg_reduction: 0.0,
            temp_min: None,
            temp_max: None,
            rad_resistance: 0.0,
            rad_scrub_rate: 0.0,
            resistance: Resistance::NONE,
            volume: 0.0,
            cargo: 0.0,
            grade: None,
        }
    }

    pub fn with_class(mut self, class: ArmorClass) -> Self {
        self.armor_class = Some(class);
        self
    }

    pub fn with_dmg_reduction(mut self, dmg_reduction: f64) -> Self {
        self.dmg_reduction = dmg_reduction;
        self
    }

    pub fn with_temperature(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.temp_min = min;
        self.temp_max = max;
        self
    }

    pub fn with_resistance(mut self, resistance: Resistance) -> Self {
        self.resistance = resistance;
        self
    }

    pub fn with_cargo(mut self, cargo: f64) -> Self {
        self.cargo = cargo;
        self
    }
}

/// Armor records keyed by lowercased name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArmorTable {
    records: BTreeMap<String, ArmorRecord>,
}

impl ArmorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record; the key is normalized. Existing keys are kept.
    pub fn insert(&mut self, key: &str, record: ArmorRecord) {
        self.records.entry(normalize(key)).or_insert(record);
    }

    /// Resolves a user-entered name.
    ///
    /// Lookup order: exact key, then the key without a trailing parenthetical.
    pub fn lookup(&self, name: &str) -> Option<&ArmorRecord> {
        let key = normalize(name);
        if key.is_empty() {
            return None;
        }
        self.records.get(&key).or_else(|| {
            strip_parenthetical_suffix(&key).and_then(|base| self.records.get(base))
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArmorRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: AsRef<str>> FromIterator<(K, ArmorRecord)> for ArmorTable {
    fn from_iter<I: IntoIterator<Item = (K, ArmorRecord)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, record) in iter {
            table.insert(key.as_ref(), record);
        }
        table
    }
}

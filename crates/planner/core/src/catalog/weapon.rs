use std::collections::BTreeMap;

use super::lookup::{normalize, strip_quoted};

/// Weapon family, as classified at harvest time.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponCategory {
    AssaultRifle,
    SniperRifle,
    Lmg,
    Pistol,
    Shotgun,
    Smg,
    Heavy,
    Mounted,
    Melee,
    Tool,
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl WeaponCategory {
    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AssaultRifle => "Assault Rifle",
            Self::SniperRifle => "Sniper Rifle",
            Self::Lmg => "LMG",
            Self::Pistol => "Pistol",
            Self::Shotgun => "Shotgun",
            Self::Smg => "SMG",
            Self::Heavy => "Heavy",
            Self::Mounted => "Mounted",
            Self::Melee => "Melee",
            Self::Tool => "Tool",
            Self::Other => "Other",
        }
    }
}

/// Health pool assumed when deriving shots-to-kill.
pub const REFERENCE_HEALTH: f64 = 100.0;

/// Harvested stats for one weapon or tool.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct WeaponRecord {
    pub name: String,
    pub category: WeaponCategory,

    /// Bare mass in kg.
    pub mass: f64,
    pub mass_with_mags: f64,
    pub ammo_count: u32,
    pub fire_mode: Option<String>,

    /// Muzzle velocity in m/s.
    pub ammo_speed: f64,
    /// Effective range in m.
    pub range: f64,
    pub pellets: u32,
    pub dmg_per_pellet: f64,
    pub dmg_per_shot: f64,
    /// Rounds per minute.
    pub rpm: f64,
    pub dps: f64,
    pub dps_sustained: Option<f64>,
    pub dps_burst: Option<f64>,

    /// Seconds-to-kill per armor-mitigation tier; entries may be unknown.
    pub ttk: Option<Vec<Option<f64>>>,
}

impl WeaponRecord {
    pub fn new(name: impl Into<String>, category: WeaponCategory, mass: f64) -> Self {
        Self {
            name: name.into(),
            category,
            mass,
            mass_with_mags: mass,
            pellets: 1,
            ..Self::default()
        }
    }

    pub fn with_damage(mut self, dmg_per_shot: f64, rpm: f64, dps: f64) -> Self {
        self.dmg_per_shot = dmg_per_shot;
        self.dmg_per_pellet = dmg_per_shot / f64::from(self.pellets.max(1));
        self.rpm = rpm;
        self.dps = dps;
        self
    }

    pub fn with_ttk(mut self, ttk: Vec<Option<f64>>) -> Self {
        self.ttk = Some(ttk);
        self
    }

    /// Shots needed against [`REFERENCE_HEALTH`], or `None` without per-shot damage.
    pub fn shots_to_kill(&self) -> Option<u32> {
        (self.dmg_per_shot > 0.0).then(|| (REFERENCE_HEALTH / self.dmg_per_shot).ceil() as u32)
    }

    /// Time-to-kill against the least-armored tier, if known.
    pub fn first_ttk(&self) -> Option<f64> {
        self.ttk.as_ref()?.first().copied().flatten()
    }

    /// True for multi-pellet weapons (shotguns).
    pub fn is_multi_pellet(&self) -> bool {
        self.pellets > 1
    }
}

/// Weapon records keyed by lowercased name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeaponTable {
    records: BTreeMap<String, WeaponRecord>,
}

impl WeaponTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record; the key is normalized. Existing keys are kept.
    pub fn insert(&mut self, key: &str, record: WeaponRecord) {
        self.records.entry(normalize(key)).or_insert(record);
    }

    /// Resolves a user-entered name.
    ///
    /// Lookup order: exact key, then the key with quoted livery names removed,
    /// then the longest table name contained in the key (ties go to the first
    /// key in sort order).
    pub fn lookup(&self, name: &str) -> Option<&WeaponRecord> {
        let key = normalize(name);
        if key.is_empty() {
            return None;
        }
        if let Some(record) = self.records.get(&key) {
            return Some(record);
        }
        let base = strip_quoted(&key);
        if let Some(record) = self.records.get(&base) {
            return Some(record);
        }
        self.records
            .iter()
            .filter(|(candidate, _)| !candidate.is_empty() && key.contains(candidate.as_str()))
            .fold(None::<(&String, &WeaponRecord)>, |best, (candidate, record)| {
                match best {
                    Some((b, _)) if b.len() >= candidate.len() => best,
                    _ => Some((candidate, record)),
                }
            })
            .map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WeaponRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: AsRef<str>> FromIterator<(K, WeaponRecord)> for WeaponTable {
    fn from_iter<I: IntoIterator<Item = (K, WeaponRecord)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, record) in iter {
            table.insert(key.as_ref(), record);
        }
        table
    }
}

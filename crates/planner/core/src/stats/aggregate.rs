//! Derived statistics for a whole loadout.

use super::resistance::Resistance;
use super::speed::{effective_speed, speed_pct};
use super::weight::{BASE_CLOTHING_WEIGHT, MultitoolAttachment, THROWABLE_WEIGHT, round2};
use crate::catalog::{ArmorRecord, ItemCatalog, WeaponRecord};
use crate::loadout::SlotMap;
use crate::schema::{SlotGroup, ids, slots_in_group};

/// Slots whose weapon mass counts toward carried weight.
pub const WEAPON_WEIGHT_SLOTS: [&str; 3] = [ids::PRIMARY1, ids::PRIMARY2, ids::SIDEARM];

/// Slots that may hold a weapon or tool with combat stats.
pub const WEAPON_STAT_SLOTS: [&str; 5] = [
    ids::PRIMARY1,
    ids::PRIMARY2,
    ids::SIDEARM,
    ids::MULTITOOL1,
    ids::MULTITOOL2,
];

const MULTITOOL_SLOTS: [&str; 2] = [ids::MULTITOOL1, ids::MULTITOOL2];

/// Short label used in weight breakdowns.
pub fn breakdown_label(slot: &str) -> &str {
    match slot {
        ids::UNDERSUIT => "Undersuit",
        ids::HELMET => "Helmet",
        ids::CORE => "Core",
        ids::ARMS => "Arms",
        ids::LEGS => "Legs",
        ids::BACKPACK => "Backpack",
        ids::PRIMARY1 => "Primary",
        ids::PRIMARY2 => "Primary 2",
        ids::SIDEARM => "Sidearm",
        ids::MULTITOOL1 => "Multitool",
        ids::MULTITOOL2 => "Multitool 2",
        s if s.starts_with("throwable") => "Throwable",
        other => other,
    }
}

/// One resolved armor piece.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArmorPiece {
    pub slot: &'static str,
    pub record: ArmorRecord,
    pub weight: f64,
}

/// One line of the weight breakdown.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeightEntry {
    pub slot: &'static str,
    pub label: &'static str,
    pub weight: f64,
}

/// A weapon or tool that deals damage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EquippedWeapon {
    pub slot: &'static str,
    pub record: WeaponRecord,
}

impl EquippedWeapon {
    pub fn shots_to_kill(&self) -> Option<u32> {
        self.record.shots_to_kill()
    }
}

/// Snapshot of derived statistics.
///
/// Temperatures are `None` when no equipped piece defines that bound.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LoadoutStats {
    /// Sum of flat reductions; not clamped.
    pub dmg_reduction: f64,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub rad_resistance: f64,
    pub rad_scrub_rate: f64,
    pub resistance: Resistance,
    pub total_cargo: f64,
    pub total_weight: f64,
    pub speed_pct: u32,
    pub effective_speed: f64,
    pub pieces: Vec<ArmorPiece>,
    pub weight_breakdown: Vec<WeightEntry>,
    pub equipped_weapons: Vec<EquippedWeapon>,
}

impl LoadoutStats {
    /// Pieces that add carrying capacity, in slot order.
    pub fn cargo_contributors(&self) -> impl Iterator<Item = &ArmorPiece> {
        self.pieces.iter().filter(|p| p.record.cargo > 0.0)
    }

    /// True when the temperature bounds no longer overlap.
    pub fn temperature_range_inverted(&self) -> bool {
        matches!((self.temp_min, self.temp_max), (Some(lo), Some(hi)) if lo > hi)
    }
}

fn equipped<'a>(slots: &'a SlotMap, id: &str) -> Option<&'a str> {
    slots.get(id).and_then(|v| v.equipped())
}

/// Combines a slot map with reference tables into a stats snapshot.
///
/// Returns `None` when no armor slot resolves, so "nothing to show" stays
/// distinct from an all-zero snapshot. Unresolved names contribute nothing.
pub fn aggregate<C: ItemCatalog + ?Sized>(slots: &SlotMap, catalog: &C) -> Option<LoadoutStats> {
    let pieces: Vec<ArmorPiece> = slots_in_group(SlotGroup::Armor)
        .filter_map(|def| {
            let record = catalog.armor(equipped(slots, def.id)?)?;
            Some(ArmorPiece {
                slot: def.id,
                weight: record.category.weight(record.armor_class),
                record: record.clone(),
            })
        })
        .collect();
    if pieces.is_empty() {
        return None;
    }

    let mut dmg_reduction = 0.0;
    let mut temp_min: Option<f64> = None;
    let mut temp_max: Option<f64> = None;
    let mut rad_resistance = 0.0;
    let mut rad_scrub_rate = 0.0;
    let mut total_cargo = 0.0;
    let mut total_weight = BASE_CLOTHING_WEIGHT;
    let mut resistance = Resistance::NONE;
    let mut weight_breakdown = Vec::new();

    for piece in &pieces {
        let r = &piece.record;
        dmg_reduction += r.dmg_reduction;
        if let Some(min) = r.temp_min {
            temp_min = Some(temp_min.map_or(min, |t| t.max(min)));
        }
        if let Some(max) = r.temp_max {
            temp_max = Some(temp_max.map_or(max, |t| t.min(max)));
        }
        rad_resistance += r.rad_resistance;
        rad_scrub_rate += r.rad_scrub_rate;
        total_cargo += r.cargo;
        total_weight += piece.weight;
        resistance = resistance.multiply(&r.resistance);

        if piece.weight > 0.0 {
            weight_breakdown.push(WeightEntry {
                slot: piece.slot,
                label: breakdown_label(piece.slot),
                weight: piece.weight,
            });
        }
    }

    for slot in WEAPON_WEIGHT_SLOTS {
        let Some(weapon) = equipped(slots, slot).and_then(|name| catalog.weapon(name)) else {
            continue;
        };
        total_weight += weapon.mass;
        if weapon.mass > 0.0 {
            weight_breakdown.push(WeightEntry {
                slot,
                label: breakdown_label(slot),
                weight: weapon.mass,
            });
        }
    }

    for slot in MULTITOOL_SLOTS {
        if let Some(attachment) = equipped(slots, slot).and_then(MultitoolAttachment::from_item) {
            total_weight += attachment.weight();
            weight_breakdown.push(WeightEntry {
                slot,
                label: breakdown_label(slot),
                weight: attachment.weight(),
            });
        }
    }

    // Hidden throwable slots still count; visibility does not clear contents.
    for def in slots_in_group(SlotGroup::Throwables) {
        if equipped(slots, def.id).is_some() {
            total_weight += THROWABLE_WEIGHT;
            weight_breakdown.push(WeightEntry {
                slot: def.id,
                label: breakdown_label(def.id),
                weight: THROWABLE_WEIGHT,
            });
        }
    }

    let equipped_weapons = WEAPON_STAT_SLOTS
        .into_iter()
        .filter_map(|slot| {
            let record = catalog.weapon(equipped(slots, slot)?)?;
            (record.dps > 0.0).then(|| EquippedWeapon {
                slot,
                record: record.clone(),
            })
        })
        .collect();

    let total_weight = round2(total_weight);
    let speed_pct = speed_pct(total_weight);

    Some(LoadoutStats {
        dmg_reduction,
        temp_min,
        temp_max,
        rad_resistance,
        rad_scrub_rate,
        resistance,
        total_cargo,
        total_weight,
        speed_pct,
        effective_speed: effective_speed(speed_pct),
        pieces,
        weight_breakdown,
        equipped_weapons,
    })
}

//! Versioned migration chain for persisted loadout records.
//!
//! Records are migrated as raw JSON before they are decoded, so retired shapes
//! never need a Rust type. Each step upgrades from exactly one version; a
//! record's `schemaVersion` (absent means 0) decides where it enters the chain.
//!
//! ```text
//! v0 ──utility slots split──► v1 ──armorClass → slotClasses──► v2 ──► normalize
//! ```

use planner_core::schema::{CLASSED_ARMOR_SLOTS, ids};
use planner_core::{ArmorClass, CURRENT_SCHEMA_VERSION, Loadout};
use serde_json::{Map, Value};

/// One upgrade step.
#[derive(Clone, Copy)]
pub struct MigrationStep {
    /// Version the step upgrades from; it produces `from + 1`.
    pub from: u32,
    pub description: &'static str,
    pub apply: fn(&mut Map<String, Value>),
}

/// Every step, in version order.
pub const MIGRATIONS: &[MigrationStep] = &[
    MigrationStep {
        from: 0,
        description: "split legacy utility slots into consumables and throwables",
        apply: split_utility_slots,
    },
    MigrationStep {
        from: 1,
        description: "expand loadout-wide armorClass into per-slot classes",
        apply: expand_armor_class,
    },
];

/// Legacy utility slot → replacement slot.
pub const UTILITY_SLOT_MOVES: [(&str, &str); 4] = [
    ("utility1", ids::CONSUMABLE1),
    ("utility2", ids::CONSUMABLE2),
    ("utility3", ids::THROWABLE1),
    ("utility4", ids::CONSUMABLE3),
];

/// Version a raw record claims; missing or malformed means 0.
pub fn record_version(record: &Map<String, Value>) -> u32 {
    record
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

/// Upgrades a raw record in place to [`CURRENT_SCHEMA_VERSION`].
///
/// Steps below the record's version are skipped, so running this twice is a
/// no-op. Slot values stored as bare strings are lifted to `{ "item": .. }`.
pub fn migrate_record(record: &mut Map<String, Value>) {
    let version = record_version(record);
    for step in MIGRATIONS.iter().filter(|s| s.from >= version) {
        (step.apply)(record);
        tracing::trace!(from = step.from, step = step.description, "applied migration");
    }
    lift_bare_slot_strings(record);
    record.insert("schemaVersion".into(), Value::from(CURRENT_SCHEMA_VERSION));
}

/// Migrates and decodes one record, then fills in missing schema slots.
pub fn decode_record(mut value: Value) -> Result<Loadout, serde_json::Error> {
    if let Some(record) = value.as_object_mut() {
        migrate_record(record);
    }
    let mut loadout: Loadout = serde_json::from_value(value)?;
    loadout.ensure_schema_slots();
    Ok(loadout)
}

fn slot_is_empty(slots: &Map<String, Value>, id: &str) -> bool {
    match slots.get(id) {
        None | Some(Value::Null) => true,
        Some(Value::String(item)) => item.trim().is_empty(),
        Some(Value::Object(value)) => value
            .get("item")
            .and_then(Value::as_str)
            .is_none_or(|item| item.trim().is_empty()),
        Some(_) => false,
    }
}

/// v0 → v1. A legacy value moves into an empty slot. When the destination is
/// taken an empty legacy value is dropped and a filled one stays so nothing
/// is lost.
fn split_utility_slots(record: &mut Map<String, Value>) {
    let Some(Value::Object(slots)) = record.get_mut("slots") else {
        return;
    };
    for (legacy, target) in UTILITY_SLOT_MOVES {
        if !slots.contains_key(legacy) {
            continue;
        }
        if slot_is_empty(slots, target) {
            if let Some(value) = slots.remove(legacy) {
                slots.insert(target.to_string(), value);
            }
        } else if slot_is_empty(slots, legacy) {
            slots.remove(legacy);
        }
    }
}

/// v1 → v2.
fn expand_armor_class(record: &mut Map<String, Value>) {
    let legacy = record.remove("armorClass");
    if record.get("slotClasses").is_some_and(Value::is_object) {
        return;
    }
    let class = legacy
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<ArmorClass>().ok())
        .unwrap_or_default();
    let classes: Map<String, Value> = CLASSED_ARMOR_SLOTS
        .iter()
        .map(|slot| (slot.to_string(), Value::from(class.as_ref())))
        .collect();
    record.insert("slotClasses".into(), Value::Object(classes));
}

fn lift_bare_slot_strings(record: &mut Map<String, Value>) {
    let Some(Value::Object(slots)) = record.get_mut("slots") else {
        return;
    };
    for value in slots.values_mut() {
        if let Value::String(item) = value {
            let mut lifted = Map::new();
            lifted.insert("item".into(), Value::String(std::mem::take(item)));
            *value = Value::Object(lifted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn utility_slots_move_into_empty_targets() {
        let mut record = object(json!({
            "slots": {
                "utility1": { "item": "MedPen" },
                "utility3": { "item": "Frag Grenade" },
                "utility4": { "item": "" },
                "consumable1": { "item": "" }
            }
        }));
        migrate_record(&mut record);

        let slots = &record["slots"];
        assert_eq!(slots["consumable1"]["item"], "MedPen");
        assert_eq!(slots["throwable1"]["item"], "Frag Grenade");
        assert!(slots.get("utility1").is_none());
        assert!(slots.get("utility3").is_none());
        assert!(slots.get("utility4").is_none());
        assert_eq!(slots["consumable3"]["item"], "");
    }

    #[test]
    fn empty_legacy_values_leave_no_orphan_keys() {
        let loadout = decode_record(json!({
            "id": "old",
            "name": "Blank utility",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "slots": {
                "utility2": { "item": "", "notes": "" },
                "consumable2": { "item": "MedPen" },
                "utility4": { "item": "", "notes": "" }
            }
        }))
        .unwrap();

        assert!(!loadout.slots.contains_key("utility2"));
        assert!(!loadout.slots.contains_key("utility4"));
        assert_eq!(loadout.equipped(ids::CONSUMABLE2), Some("MedPen"));
        assert!(loadout.slots.contains_key(ids::CONSUMABLE3));
    }

    #[test]
    fn occupied_target_keeps_legacy_value() {
        let mut record = object(json!({
            "slots": {
                "utility2": { "item": "OxyPen" },
                "consumable2": { "item": "MedPen" }
            }
        }));
        migrate_record(&mut record);

        assert_eq!(record["slots"]["consumable2"]["item"], "MedPen");
        assert_eq!(record["slots"]["utility2"]["item"], "OxyPen");
    }

    #[test]
    fn armor_class_expands_to_every_classed_slot() {
        let mut record = object(json!({ "armorClass": "heavy", "slots": {} }));
        migrate_record(&mut record);

        assert!(record.get("armorClass").is_none());
        for slot in CLASSED_ARMOR_SLOTS {
            assert_eq!(record["slotClasses"][slot], "heavy");
        }
        assert_eq!(record["schemaVersion"], CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn missing_armor_class_defaults_to_medium() {
        let mut record = object(json!({ "slots": {} }));
        migrate_record(&mut record);
        assert_eq!(record["slotClasses"]["core"], "medium");
    }

    #[test]
    fn existing_slot_classes_win_over_legacy_field() {
        let mut record = object(json!({
            "armorClass": "heavy",
            "slotClasses": { "core": "light" },
            "slots": {}
        }));
        migrate_record(&mut record);

        assert!(record.get("armorClass").is_none());
        assert_eq!(record["slotClasses"], json!({ "core": "light" }));
    }

    #[test]
    fn current_records_skip_the_chain() {
        let mut record = object(json!({
            "schemaVersion": 2,
            "slots": { "utility1": { "item": "MedPen" } }
        }));
        migrate_record(&mut record);

        assert!(record.get("slotClasses").is_none());
        assert_eq!(record["slots"]["utility1"]["item"], "MedPen");
    }

    #[test]
    fn migration_is_idempotent() {
        let mut once = object(json!({
            "armorClass": "light",
            "slots": {
                "utility1": "MedPen",
                "utility2": { "item": "OxyPen" },
                "consumable2": { "item": "Taken" }
            }
        }));
        migrate_record(&mut once);
        let mut twice = once.clone();
        migrate_record(&mut twice);
        assert_eq!(once, twice);
        assert_eq!(once["slots"]["consumable1"], json!({ "item": "MedPen" }));
    }

    #[test]
    fn decode_fills_schema_slots() {
        let loadout = decode_record(json!({
            "id": "abc",
            "name": "Old",
            "missionType": "EVA",
            "slots": { "utility3": { "item": "Frag" } },
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(loadout.equipped(ids::THROWABLE1), Some("Frag"));
        assert!(loadout.slot("ammo8").is_some());
        assert_eq!(loadout.effective_armor_class(), ArmorClass::Medium);
        assert_eq!(loadout.schema_version, CURRENT_SCHEMA_VERSION);
    }
}

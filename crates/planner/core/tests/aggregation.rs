use chrono::{TimeZone, Utc};
use planner_core::schema::{filled_slot_count, ids, visible_slot_count};
use planner_core::{
    ArmorCategory, ArmorClass, ArmorRecord, ArmorTable, Loadout, ReferenceTables, Resistance,
    ResistanceChannel, SlotGroup, SlotMap, SlotValue, WeaponCategory, WeaponRecord, WeaponTable,
    aggregate, visible_slots,
};

fn tables() -> ReferenceTables {
    let armor: ArmorTable = [
        ArmorRecord::new("Piece A", ArmorCategory::Helmet)
            .with_dmg_reduction(0.10)
            .with_resistance(Resistance::NONE.with(ResistanceChannel::Physical, 0.9)),
        ArmorRecord::new("Piece B", ArmorCategory::Torso)
            .with_class(ArmorClass::Heavy)
            .with_dmg_reduction(0.05)
            .with_resistance(Resistance::NONE.with(ResistanceChannel::Physical, 0.8)),
        ArmorRecord::new("Heavy Arms", ArmorCategory::Arm).with_class(ArmorClass::Heavy),
        ArmorRecord::new("Heavy Legs", ArmorCategory::Leg).with_class(ArmorClass::Heavy),
        ArmorRecord::new("Big Pack", ArmorCategory::Backpack).with_cargo(12_000.0),
    ]
    .into_iter()
    .map(|r| (r.name.clone(), r))
    .collect();

    let weapons: WeaponTable = [
        WeaponRecord::new("Heavy Cannon", WeaponCategory::Heavy, 16.4).with_damage(
            120.0, 60.0, 120.0,
        ),
        WeaponRecord::new("Shotgun", WeaponCategory::Shotgun, 5.2).with_damage(80.0, 80.0, 106.0),
        WeaponRecord::new("Pistol", WeaponCategory::Pistol, 1.1).with_damage(20.0, 300.0, 100.0),
    ]
    .into_iter()
    .map(|w| (w.name.clone(), w))
    .collect();

    ReferenceTables::new(armor, weapons)
}

fn slot_map(entries: &[(&str, &str)]) -> SlotMap {
    entries
        .iter()
        .map(|(slot, item)| (slot.to_string(), SlotValue::item(*item)))
        .collect()
}

// ============================================================================
// Mitigation
// ============================================================================

#[test]
fn two_pieces_stack_reduction_and_resistance() {
    let tables = tables();
    let slots = slot_map(&[(ids::HELMET, "Piece A"), (ids::CORE, "Piece B")]);

    let stats = aggregate(&slots, &tables).expect("armor resolves");

    assert!((stats.dmg_reduction - 0.15).abs() < 1e-9);
    assert!((stats.resistance.physical - 0.72).abs() < 1e-9);
    assert_eq!(stats.resistance.protection_pct(ResistanceChannel::Physical), 28);
    assert_eq!(stats.resistance.protection_pct(ResistanceChannel::Stun), 0);
}

#[test]
fn resistance_is_order_independent() {
    let tables = tables();
    let forward = slot_map(&[(ids::HELMET, "Piece A"), (ids::CORE, "Piece B")]);
    // Same items, swapped slots.
    let swapped = slot_map(&[(ids::HELMET, "Piece B"), (ids::CORE, "Piece A")]);

    let a = aggregate(&forward, &tables).expect("armor resolves");
    let b = aggregate(&swapped, &tables).expect("armor resolves");

    for channel in [ResistanceChannel::Physical, ResistanceChannel::Energy] {
        assert!((a.resistance.get(channel) - b.resistance.get(channel)).abs() < 1e-12);
    }
    assert!((a.dmg_reduction - b.dmg_reduction).abs() < 1e-12);
}

#[test]
fn no_resolvable_armor_means_no_stats() {
    let tables = tables();
    let slots = slot_map(&[
        (ids::PRIMARY1, "Shotgun"),
        (ids::HELMET, "Not In Table"),
        (ids::THROWABLE1, "Frag"),
    ]);
    assert!(aggregate(&slots, &tables).is_none());
    assert!(aggregate(&SlotMap::new(), &tables).is_none());
}

// ============================================================================
// Weight and speed
// ============================================================================

#[test]
fn heavy_kit_lands_in_sixty_kg_tier() {
    let tables = tables();
    // 1.55 base + 5.05 + 7 + 5 + 8 + 6 armor + 16.4 + 5.2 + 1.1 weapons
    // + 4 tractor + 1.5 mining + 4 × 0.4 throwables = 62.4 kg
    let slots = slot_map(&[
        (ids::HELMET, "Piece A"),
        (ids::CORE, "Piece B"),
        (ids::ARMS, "Heavy Arms"),
        (ids::LEGS, "Heavy Legs"),
        (ids::BACKPACK, "Big Pack"),
        (ids::PRIMARY1, "Heavy Cannon"),
        (ids::PRIMARY2, "Shotgun"),
        (ids::SIDEARM, "Pistol"),
        (ids::MULTITOOL1, "Tractor Beam"),
        (ids::MULTITOOL2, "Mining"),
        ("throwable1", "Frag"),
        ("throwable2", "Frag"),
        ("throwable3", "Smoke"),
        ("throwable4", "Flash"),
    ]);

    let stats = aggregate(&slots, &tables).expect("armor resolves");

    assert_eq!(stats.total_weight, 62.4);
    assert_eq!(stats.speed_pct, 70);
    assert_eq!(stats.effective_speed, 5.64);
    assert_eq!(stats.equipped_weapons.len(), 3);
    assert_eq!(stats.total_cargo, 12_000.0);

    let breakdown_total: f64 = stats.weight_breakdown.iter().map(|e| e.weight).sum();
    assert!((breakdown_total + 1.55 - stats.total_weight).abs() < 1e-9);
}

#[test]
fn adding_items_never_reduces_weight() {
    let tables = tables();
    let additions = [
        (ids::CORE, "Piece B"),
        (ids::ARMS, "Heavy Arms"),
        (ids::PRIMARY1, "Heavy Cannon"),
        (ids::MULTITOOL1, "Tractor Beam"),
        ("throwable3", "Frag"),
        (ids::LEGS, "Heavy Legs"),
        (ids::SIDEARM, "Pistol"),
    ];

    let mut slots = slot_map(&[(ids::HELMET, "Piece A")]);
    let mut last = aggregate(&slots, &tables).expect("armor resolves");
    for (slot, item) in additions {
        slots.insert(slot.to_string(), SlotValue::item(item));
        let next = aggregate(&slots, &tables).expect("armor resolves");
        assert!(next.total_weight >= last.total_weight, "{slot}");
        assert!(next.speed_pct <= last.speed_pct, "{slot}");
        last = next;
    }
}

// ============================================================================
// Slot limits
// ============================================================================

fn loadout_with_every_slot_filled(class: ArmorClass) -> Loadout {
    let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let mut loadout = Loadout::empty("id".into(), "Limits", now);
    for value in loadout.slots.values_mut() {
        value.item = "Something".into();
    }
    loadout.slot_classes.insert(ids::CORE.into(), class);
    loadout
}

fn visible_in(loadout: &Loadout, group: SlotGroup) -> usize {
    visible_slots(loadout).filter(|s| s.group == group).count()
}

#[test]
fn light_core_shows_fewer_slots() {
    let loadout = loadout_with_every_slot_filled(ArmorClass::Light);
    assert_eq!(visible_in(&loadout, SlotGroup::Ammo), 4);
    assert_eq!(visible_in(&loadout, SlotGroup::Throwables), 2);
    assert_eq!(visible_in(&loadout, SlotGroup::Consumables), 4);
    assert_eq!(visible_in(&loadout, SlotGroup::Armor), 6);
}

#[test]
fn heavy_core_shows_every_slot() {
    let loadout = loadout_with_every_slot_filled(ArmorClass::Heavy);
    assert_eq!(visible_in(&loadout, SlotGroup::Ammo), 8);
    assert_eq!(visible_in(&loadout, SlotGroup::Throwables), 4);
    assert_eq!(visible_in(&loadout, SlotGroup::Consumables), 4);
}

#[test]
fn hidden_contents_survive_a_class_round_trip() {
    let mut loadout = loadout_with_every_slot_filled(ArmorClass::Heavy);
    loadout.slots.insert("ammo8".into(), SlotValue::item("Rifle Mag"));

    loadout
        .slot_classes
        .insert(ids::CORE.into(), ArmorClass::Light);
    assert!(visible_slots(&loadout).all(|s| s.id != "ammo8"));
    assert_eq!(loadout.equipped("ammo8"), Some("Rifle Mag"));
    assert!(filled_slot_count(&loadout) <= visible_slot_count(&loadout));

    loadout
        .slot_classes
        .insert(ids::CORE.into(), ArmorClass::Heavy);
    assert!(visible_slots(&loadout).any(|s| s.id == "ammo8"));
    assert_eq!(loadout.equipped("ammo8"), Some("Rifle Mag"));
}

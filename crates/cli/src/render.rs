//! Plain-text rendering of loadouts and their stats.
//!
//! Every function returns a `String` so output can be checked in tests;
//! callers decide where it goes.
use std::fmt::Write as _;

use console::style;
use planner_core::schema::{
    filled_slot_count, is_slot_visible, slots_in_group, visible_slot_count,
};
use planner_core::stats::{SPEED_BREAKPOINTS, effective_speed};
use planner_core::{
    ItemCatalog, Loadout, LoadoutStats, ResistanceChannel, SlotGroup, backpack_exceeds_core,
    max_slots,
};
use strum::IntoEnumIterator;

/// First eight characters of an id; enough to address it from the CLI.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn fmt_temp(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |t| format!("{t}°"))
}

/// One line per loadout.
pub fn render_list<'a>(loadouts: impl IntoIterator<Item = &'a Loadout>) -> String {
    let mut out = String::new();
    for loadout in loadouts {
        let _ = writeln!(
            out,
            "{}  {:<24} {:<12} {:>2}/{:<2} slots  {}",
            style(short_id(loadout.id.as_str())).cyan(),
            loadout.name,
            loadout.mission_type.to_string(),
            filled_slot_count(loadout),
            visible_slot_count(loadout),
            loadout.updated_at.format("%Y-%m-%d %H:%M"),
        );
    }
    if out.is_empty() {
        out.push_str("No loadouts yet.\n");
    }
    out
}

/// Warning line for a backpack heavier than the core armor allows.
pub fn backpack_warning(loadout: &Loadout, catalog: &dyn ItemCatalog) -> Option<String> {
    let backpack = backpack_exceeds_core(loadout, catalog)?;
    Some(format!(
        "{} {backpack} backpack needs {backpack} core armor (core is {})",
        style("warning:").yellow().bold(),
        loadout.effective_armor_class()
    ))
}

/// Loadout header, visible slots and, when any armor resolves, the stats panel.
pub fn render_loadout(
    loadout: &Loadout,
    stats: Option<&LoadoutStats>,
    catalog: &dyn ItemCatalog,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}] {}",
        style(&loadout.name).bold(),
        loadout.mission_type,
        style(loadout.id.as_str()).dim()
    );
    let _ = writeln!(
        out,
        "Armor class: {}  ({} of {} slots filled)",
        loadout.effective_armor_class(),
        filled_slot_count(loadout),
        visible_slot_count(loadout)
    );
    if let Some(warning) = backpack_warning(loadout, catalog) {
        let _ = writeln!(out, "{warning}");
    }
    if !loadout.notes.is_empty() {
        let _ = writeln!(out, "Notes: {}", loadout.notes);
    }

    let class = loadout.effective_armor_class();
    for group in SlotGroup::all() {
        let _ = writeln!(out, "\n{}", style(group.label()).bold().underlined());
        for def in slots_in_group(group).filter(|s| is_slot_visible(s.id, class)) {
            let value = loadout.slot(def.id);
            let item = value.and_then(|v| v.equipped()).unwrap_or("-");
            let _ = write!(out, "  {:<22} {}", def.label, item);
            if let Some(notes) = value.and_then(|v| v.notes.as_deref()).filter(|n| !n.is_empty())
            {
                let _ = write!(out, "  ({notes})");
            }
            out.push('\n');
        }
    }

    match stats {
        Some(stats) => {
            out.push('\n');
            out.push_str(&render_stats(stats));
        }
        None => out.push_str("\nNo stats: equip a known armor piece to see totals.\n"),
    }
    out
}

/// The stats panel.
pub fn render_stats(stats: &LoadoutStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Stats").bold().underlined());
    let _ = writeln!(out, "  Damage reduction  {:.0}%", stats.dmg_reduction * 100.0);
    let _ = write!(
        out,
        "  Temperature       {} to {}",
        fmt_temp(stats.temp_min),
        fmt_temp(stats.temp_max)
    );
    if stats.temperature_range_inverted() {
        let _ = write!(out, "  {}", style("(no safe range)").red());
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "  Radiation         {} REM, scrub {:.1} REM/s",
        stats.rad_resistance, stats.rad_scrub_rate
    );

    let _ = writeln!(out, "  Resistances");
    for channel in ResistanceChannel::iter() {
        let _ = writeln!(
            out,
            "    {:<12} {:>4}%",
            channel.label(),
            stats.resistance.protection_pct(channel)
        );
    }

    let _ = writeln!(out, "  Carry capacity    {} µSCU", stats.total_cargo);
    for piece in stats.cargo_contributors() {
        let _ = writeln!(out, "    {:<12} {} µSCU", piece.slot, piece.record.cargo);
    }

    let _ = writeln!(
        out,
        "  Weight            {} kg  (speed {}%, {} m/s)",
        stats.total_weight, stats.speed_pct, stats.effective_speed
    );
    for entry in &stats.weight_breakdown {
        let _ = writeln!(out, "    {:<12} {} kg", entry.label, entry.weight);
    }

    if !stats.equipped_weapons.is_empty() {
        let _ = writeln!(out, "  Weapons");
        for weapon in &stats.equipped_weapons {
            let record = &weapon.record;
            let _ = write!(
                out,
                "    {:<28} {:<13} DPS {:>4.0}  RPM {}",
                record.name,
                record.category.label(),
                record.dps,
                record.rpm
            );
            let _ = write!(out, "  Dmg/Shot {}", record.dmg_per_shot);
            if record.is_multi_pellet() {
                let _ = write!(out, " ({}×{})", record.pellets, record.dmg_per_pellet);
            }
            if let Some(stk) = weapon.shots_to_kill() {
                let _ = write!(out, "  STK {stk}");
            }
            if let Some(ttk) = record.first_ttk() {
                let _ = write!(out, "  TTK {ttk:.2}s");
            }
            out.push('\n');
        }
    }
    out
}

/// Per-group slot usage against the class ceilings.
pub fn render_slots(loadout: &Loadout, catalog: &dyn ItemCatalog) -> String {
    let class = loadout.effective_armor_class();
    let mut out = String::new();
    let _ = writeln!(out, "Armor class: {class}");
    if let Some(warning) = backpack_warning(loadout, catalog) {
        let _ = writeln!(out, "{warning}");
    }
    for group in SlotGroup::all() {
        let defs: Vec<_> = slots_in_group(group).collect();
        let visible = defs.iter().filter(|s| is_slot_visible(s.id, class)).count();
        let filled = defs
            .iter()
            .filter(|s| is_slot_visible(s.id, class) && loadout.equipped(s.id).is_some())
            .count();
        let hidden_filled = defs
            .iter()
            .filter(|s| !is_slot_visible(s.id, class) && loadout.equipped(s.id).is_some())
            .count();

        let limit = match max_slots(group, Some(class)) {
            usize::MAX => "no limit".to_string(),
            n => format!("max {n}"),
        };
        let _ = write!(
            out,
            "  {:<18} {filled}/{visible} filled  ({limit})",
            group.label()
        );
        if hidden_filled > 0 {
            let _ = write!(out, "  {hidden_filled} hidden, kept");
        }
        out.push('\n');
    }
    out
}

/// Weight breakpoints and the resulting speed.
pub fn render_speed_table() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>8}  {:>6}  {:>7}", "kg", "speed", "m/s");
    for bp in SPEED_BREAKPOINTS {
        let _ = writeln!(
            out,
            "{:>8}  {:>5}%  {:>7}",
            format!(">= {}", bp.kg),
            bp.pct,
            effective_speed(bp.pct)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use planner_core::schema::ids;
    use planner_core::{ArmorClass, MissionType, ReferenceTables, SlotValue, aggregate};
    use planner_content::bundled_tables;

    fn loadout() -> Loadout {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        Loadout::from_preset("0123456789abcdef".into(), "Raid", MissionType::Combat, now)
    }

    #[test]
    fn short_ids() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn empty_list_has_a_hint() {
        assert_eq!(render_list(&[] as &[Loadout]), "No loadouts yet.\n");
    }

    #[test]
    fn loadout_without_armor_explains_missing_stats() {
        let text = render_loadout(&loadout(), None, &ReferenceTables::default());
        assert!(text.contains("Raid"));
        assert!(text.contains("Frag Grenade"));
        assert!(text.contains("No stats"));
    }

    #[test]
    fn stats_panel_lists_weapons_and_weight() {
        let tables = bundled_tables().unwrap();
        let mut loadout = loadout();
        loadout
            .slots
            .insert(ids::CORE.into(), SlotValue::item("Paladin Core"));
        loadout
            .slots
            .insert(ids::PRIMARY1.into(), SlotValue::item("P4-AR Rifle"));

        let stats = aggregate(&loadout.slots, &tables).unwrap();
        let text = render_loadout(&loadout, Some(&stats), &tables);
        assert!(text.contains("Damage reduction"));
        assert!(text.contains("P4-AR Rifle"));
        assert!(text.contains("Dmg/Shot 16"));
        assert!(!text.contains('×'));
        assert!(text.contains("STK"));
    }

    #[test]
    fn multi_pellet_weapons_show_the_pellet_split() {
        let tables = bundled_tables().unwrap();
        let mut loadout = loadout();
        loadout
            .slots
            .insert(ids::CORE.into(), SlotValue::item("Paladin Core"));
        loadout
            .slots
            .insert(ids::PRIMARY1.into(), SlotValue::item("Devastator Shotgun"));

        let stats = aggregate(&loadout.slots, &tables).unwrap();
        let text = render_stats(&stats);
        assert!(text.contains("Dmg/Shot 80 (8×10)"), "{text}");
    }

    #[test]
    fn heavy_backpack_on_light_core_is_flagged() {
        let tables = bundled_tables().unwrap();
        let mut loadout = loadout();
        loadout
            .slots
            .insert(ids::BACKPACK.into(), SlotValue::item("Pembroke Backpack"));
        loadout
            .slot_classes
            .insert(ids::CORE.into(), ArmorClass::Light);

        let warning = "heavy backpack needs heavy core armor (core is light)";
        assert!(render_slots(&loadout, &tables).contains(warning));
        assert!(render_loadout(&loadout, None, &tables).contains(warning));

        loadout
            .slot_classes
            .insert(ids::CORE.into(), ArmorClass::Heavy);
        assert!(backpack_warning(&loadout, &tables).is_none());
        assert!(!render_slots(&loadout, &tables).contains("warning"));
    }

    #[test]
    fn slot_usage_reports_hidden_contents() {
        let mut loadout = loadout();
        loadout
            .slots
            .insert("throwable4".into(), SlotValue::item("Smoke"));
        loadout
            .slot_classes
            .insert(ids::CORE.into(), ArmorClass::Light);

        let text = render_slots(&loadout, &ReferenceTables::default());
        assert!(text.contains("Armor class: light"));
        assert!(text.contains("1 hidden, kept"));
        assert!(text.contains("max 2"));
    }

    #[test]
    fn speed_table_has_every_breakpoint() {
        let text = render_speed_table();
        assert_eq!(text.lines().count(), SPEED_BREAKPOINTS.len() + 1);
        assert_eq!(text.matches("100%").count(), 1);
    }
}

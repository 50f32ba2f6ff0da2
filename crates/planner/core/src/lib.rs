//! Deterministic loadout-planning logic shared by the store and front ends.
//!
//! `planner-core` defines the slot schema and its per-class limits, the loadout
//! record with its patch path and mission presets, the reference-table record
//! types with their name lookup, and the stat aggregation engine. Nothing here
//! performs I/O; callers pass in ids, timestamps and an [`ItemCatalog`].
pub mod catalog;
pub mod error;
pub mod loadout;
pub mod schema;
pub mod stats;

pub use catalog::{
    ArmorCategory, ArmorRecord, ArmorTable, ItemCatalog, ReferenceTables, WeaponCategory,
    WeaponRecord, WeaponTable,
};
pub use error::{ErrorSeverity, PlannerError};
pub use loadout::{
    CURRENT_SCHEMA_VERSION, Loadout, LoadoutId, LoadoutPatch, MissionPreset, MissionType,
    PresetSlot, SlotClasses, SlotMap, SlotValue,
};
pub use schema::{
    ArmorClass, CLASSED_ARMOR_SLOTS, SLOTS, SchemaError, SlotDefinition, SlotGroup,
    backpack_exceeds_core, effective_armor_class, max_slots, visible_slots,
};
pub use stats::{LoadoutStats, Resistance, ResistanceChannel, aggregate};

//! Loadout records: the user-authored data the store persists.
//!
//! All mutation goes through [`LoadoutPatch::apply`] (or helpers built on it),
//! which stamps `updated_at`.

mod patch;
mod presets;
mod types;

pub use patch::LoadoutPatch;
pub use presets::{MissionPreset, PresetSlot};
pub use types::{
    CURRENT_SCHEMA_VERSION, Loadout, LoadoutId, MissionType, SlotClasses, SlotMap, SlotValue,
};

//! Partial updates applied through the single mutation path.

use chrono::{DateTime, Utc};

use super::types::{Loadout, MissionType, SlotClasses, SlotMap};

/// Fields to merge into an existing loadout. `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadoutPatch {
    pub name: Option<String>,
    pub mission_type: Option<MissionType>,
    pub slot_classes: Option<SlotClasses>,
    pub slots: Option<SlotMap>,
    pub notes: Option<String>,
}

impl LoadoutPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn mission_type(mut self, mission_type: MissionType) -> Self {
        self.mission_type = Some(mission_type);
        self
    }

    pub fn slot_classes(mut self, classes: SlotClasses) -> Self {
        self.slot_classes = Some(classes);
        self
    }

    pub fn slots(mut self, slots: SlotMap) -> Self {
        self.slots = Some(slots);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns true if the patch sets no field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.mission_type.is_none()
            && self.slot_classes.is_none()
            && self.slots.is_none()
            && self.notes.is_none()
    }

    /// Merges the patch into `loadout` and stamps `updated_at`.
    ///
    /// Replacing the slot map re-inserts any schema slot the new map lacks.
    pub fn apply(self, loadout: &mut Loadout, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            loadout.name = name;
        }
        if let Some(mission_type) = self.mission_type {
            loadout.mission_type = mission_type;
        }
        if let Some(classes) = self.slot_classes {
            loadout.slot_classes = classes;
        }
        if let Some(slots) = self.slots {
            loadout.slots = slots;
            loadout.ensure_schema_slots();
        }
        if let Some(notes) = self.notes {
            loadout.notes = notes;
        }
        loadout.touch(now);
    }
}

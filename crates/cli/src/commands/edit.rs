//! Commands that change one loadout in place.
use std::io::Write;
use std::str::FromStr;

use anyhow::{Result, bail};
use clap::Parser;
use loadout_store::LoadoutRepository;
use planner_core::schema::{is_slot_visible, require_slot};
use planner_core::{ArmorClass, LoadoutPatch, MissionType, SlotValue};

use super::Session;
use crate::render;

/// Put an item in a slot
#[derive(Parser, Debug)]
pub struct Set {
    /// Loadout id or unique prefix
    pub id: String,

    /// Slot id, e.g. `core` or `ammo3`
    pub slot: String,

    /// Item name, as in the reference tables
    pub item: String,

    /// Per-slot note (keeps the existing note when omitted)
    #[arg(long)]
    pub note: Option<String>,
}

impl Set {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let def = require_slot(&self.slot)?;
        let loadout = session.loadout(&self.id)?;
        let id = loadout.id.clone();

        let notes = self
            .note
            .or_else(|| loadout.slot(def.id).and_then(|v| v.notes.clone()));
        let value = SlotValue {
            item: self.item.trim().to_string(),
            notes,
        };
        session
            .store
            .set_slot(id.as_str(), def.id, value, &session.tables)?;

        let Some(loadout) = session.store.get(id.as_str()) else {
            bail!("Loadout {id} disappeared during update");
        };
        writeln!(out, "{}: {} = {}", loadout.name, def.label, self.item.trim())?;
        if let Some(class) = loadout.slot_classes.get(def.id) {
            writeln!(out, "  armor class: {class}")?;
        }
        if !is_slot_visible(def.id, loadout.effective_armor_class()) {
            writeln!(
                out,
                "  note: slot is hidden under {} core armor; the item is kept",
                loadout.effective_armor_class()
            )?;
        }
        if let Some(warning) = render::backpack_warning(loadout, &session.tables) {
            writeln!(out, "  {warning}")?;
        }
        session.report_persistence(out)
    }
}

/// Empty a slot
#[derive(Parser, Debug)]
pub struct Clear {
    pub id: String,
    pub slot: String,
}

impl Clear {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let id = session.resolve(&self.id)?;
        session
            .store
            .set_slot(id.as_str(), &self.slot, SlotValue::empty(), &session.tables)?;
        writeln!(out, "Cleared {}", self.slot)?;
        session.report_persistence(out)
    }
}

/// `light`, `medium`, `heavy` or `none`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassChoice(pub Option<ArmorClass>);

impl FromStr for ClassChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            return Ok(Self(None));
        }
        s.parse::<ArmorClass>()
            .map(|class| Self(Some(class)))
            .map_err(|_| format!("expected light, medium, heavy or none, got '{s}'"))
    }
}

/// Pin or clear the armor class of an armor slot
#[derive(Parser, Debug)]
pub struct Class {
    pub id: String,

    /// One of helmet, core, arms, legs, backpack
    pub slot: String,

    /// light, medium, heavy or none
    pub class: ClassChoice,
}

impl Class {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let id = session.resolve(&self.id)?;
        session
            .store
            .set_slot_class(id.as_str(), &self.slot, self.class.0)?;
        match self.class.0 {
            Some(class) => writeln!(out, "{} is now {class}", self.slot)?,
            None => writeln!(out, "{} class cleared", self.slot)?,
        }
        session.report_persistence(out)
    }
}

/// Rename a loadout
#[derive(Parser, Debug)]
pub struct Rename {
    pub id: String,
    pub name: String,
}

impl Rename {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            bail!("Loadout name must not be empty");
        }
        let id = session.resolve(&self.id)?;
        session
            .store
            .update(id.as_str(), LoadoutPatch::new().name(name));
        writeln!(out, "Renamed to {name}")?;
        session.report_persistence(out)
    }
}

/// Replace a loadout's notes
#[derive(Parser, Debug)]
pub struct Notes {
    pub id: String,

    /// New notes; an empty string clears them
    pub text: String,
}

impl Notes {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let id = session.resolve(&self.id)?;
        session
            .store
            .update(id.as_str(), LoadoutPatch::new().notes(self.text));
        writeln!(out, "Notes updated")?;
        session.report_persistence(out)
    }
}

/// Change a loadout's mission type
///
/// Only the label changes; slots and classes are left as they are.
#[derive(Parser, Debug)]
pub struct Mission {
    pub id: String,
    pub mission: MissionType,
}

impl Mission {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let id = session.resolve(&self.id)?;
        session
            .store
            .update(id.as_str(), LoadoutPatch::new().mission_type(self.mission));
        writeln!(out, "Mission set to {}", self.mission)?;
        session.report_persistence(out)
    }
}

//! Commands that list, create, inspect and remove loadouts.
use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Parser;
use loadout_store::LoadoutRepository;
use planner_core::{
    ArmorClass, Loadout, LoadoutStats, MissionType, aggregate, backpack_exceeds_core,
};
use serde::Serialize;

use super::Session;
use crate::render;

/// List saved loadouts
#[derive(Parser, Debug)]
pub struct List {
    /// Only this mission type
    #[arg(long)]
    pub mission: Option<MissionType>,

    /// Print per-mission counts instead of loadouts
    #[arg(long)]
    pub counts: bool,
}

impl List {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        if self.counts {
            for (mission, count) in session.store.mission_counts() {
                writeln!(out, "{:<12} {count}", mission.to_string())?;
            }
            return Ok(());
        }
        let loadouts = session.store.filter_by_mission(self.mission);
        write!(out, "{}", render::render_list(loadouts))?;
        Ok(())
    }
}

/// Create a loadout from a mission preset
#[derive(Parser, Debug)]
pub struct New {
    pub name: String,

    /// Preset to start from
    #[arg(long, default_value = "Custom")]
    pub mission: MissionType,
}

impl New {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            bail!("Loadout name must not be empty");
        }
        let id = session.store.create(name, self.mission);
        writeln!(out, "Created {name} ({id})")?;
        session.report_persistence(out)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowOutput<'a> {
    loadout: &'a Loadout,
    stats: Option<LoadoutStats>,
    /// Class of a backpack heavier than the core armor.
    backpack_exceeds_core: Option<ArmorClass>,
}

/// Show a loadout with its computed stats
#[derive(Parser, Debug)]
pub struct Show {
    pub id: String,

    /// Print the loadout and stats as JSON
    #[arg(long)]
    pub json: bool,
}

impl Show {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let loadout = session.loadout(&self.id)?;
        let stats = aggregate(&loadout.slots, &session.tables);

        if self.json {
            let output = ShowOutput {
                loadout,
                stats,
                backpack_exceeds_core: backpack_exceeds_core(loadout, &session.tables),
            };
            let text =
                serde_json::to_string_pretty(&output).context("Failed to serialize loadout")?;
            writeln!(out, "{text}")?;
        } else {
            let text = render::render_loadout(loadout, stats.as_ref(), &session.tables);
            write!(out, "{text}")?;
        }
        Ok(())
    }
}

/// Copy a loadout
#[derive(Parser, Debug)]
pub struct Duplicate {
    pub id: String,
}

impl Duplicate {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let id = session.resolve(&self.id)?;
        let copy = session
            .store
            .duplicate(id.as_str())
            .with_context(|| format!("No loadout matches '{}'", self.id))?;
        writeln!(out, "Created copy {copy}")?;
        session.report_persistence(out)
    }
}

/// Delete a loadout
#[derive(Parser, Debug)]
pub struct Delete {
    pub id: String,
}

impl Delete {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let loadout = session.loadout(&self.id)?;
        let (id, name) = (loadout.id.clone(), loadout.name.clone());
        session.store.delete(id.as_str());
        writeln!(out, "Deleted {name}")?;
        session.report_persistence(out)
    }
}

/// Delete every loadout
#[derive(Parser, Debug)]
pub struct Reset {
    /// Confirm deletion
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Reset {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let count = session.store.len();
        if !self.yes {
            bail!("Refusing to delete {count} loadout(s) without --yes");
        }
        session.store.reset_all();
        writeln!(out, "Deleted {count} loadout(s)")?;
        session.report_persistence(out)
    }
}

/// Show slot usage against the armor-class limits
#[derive(Parser, Debug)]
pub struct Slots {
    pub id: String,
}

impl Slots {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let loadout = session.loadout(&self.id)?;
        write!(out, "{}", render::render_slots(loadout, &session.tables))?;
        Ok(())
    }
}

/// Print carried-weight speed breakpoints
#[derive(Parser, Debug)]
pub struct SpeedTable;

impl SpeedTable {
    pub fn execute(self, out: &mut dyn Write) -> Result<()> {
        write!(out, "{}", render::render_speed_table())?;
        Ok(())
    }
}

//! Subcommands.
//!
//! Each command is its own clap struct with an `execute` method that takes the
//! open [`Session`] and a writer for user-facing output.

mod edit;
mod manage;
mod transfer;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use loadout_store::{LoadoutRepository, LoadoutStore};
use planner_core::{Loadout, LoadoutId, ReferenceTables};

pub use edit::{Class, Clear, Mission, Notes, Rename, Set};
pub use manage::{Delete, Duplicate, List, New, Reset, Show, Slots, SpeedTable};
pub use transfer::{Export, Import, Restore};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List saved loadouts
    List(List),

    /// Create a loadout from a mission preset
    New(New),

    /// Show a loadout with its computed stats
    Show(Show),

    /// Put an item in a slot
    Set(Set),

    /// Empty a slot
    Clear(Clear),

    /// Pin or clear the armor class of an armor slot
    Class(Class),

    /// Rename a loadout
    Rename(Rename),

    /// Replace a loadout's notes
    Notes(Notes),

    /// Change a loadout's mission type
    Mission(Mission),

    /// Copy a loadout
    Duplicate(Duplicate),

    /// Delete a loadout
    Delete(Delete),

    /// Delete every loadout
    Reset(Reset),

    /// Write one loadout, or a backup of all of them, to a JSON file
    Export(Export),

    /// Add the loadout from an export file
    Import(Import),

    /// Replace all loadouts with a backup file
    Restore(Restore),

    /// Show slot usage against the armor-class limits
    Slots(Slots),

    /// Print carried-weight speed breakpoints
    SpeedTable(SpeedTable),
}

impl Command {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        match self {
            Command::List(cmd) => cmd.execute(session, out),
            Command::New(cmd) => cmd.execute(session, out),
            Command::Show(cmd) => cmd.execute(session, out),
            Command::Set(cmd) => cmd.execute(session, out),
            Command::Clear(cmd) => cmd.execute(session, out),
            Command::Class(cmd) => cmd.execute(session, out),
            Command::Rename(cmd) => cmd.execute(session, out),
            Command::Notes(cmd) => cmd.execute(session, out),
            Command::Mission(cmd) => cmd.execute(session, out),
            Command::Duplicate(cmd) => cmd.execute(session, out),
            Command::Delete(cmd) => cmd.execute(session, out),
            Command::Reset(cmd) => cmd.execute(session, out),
            Command::Export(cmd) => cmd.execute(session, out),
            Command::Import(cmd) => cmd.execute(session, out),
            Command::Restore(cmd) => cmd.execute(session, out),
            Command::Slots(cmd) => cmd.execute(session, out),
            Command::SpeedTable(cmd) => cmd.execute(out),
        }
    }
}

/// Store plus reference tables for one CLI invocation.
pub struct Session<R: LoadoutRepository> {
    pub store: LoadoutStore<R>,
    pub tables: ReferenceTables,
}

impl<R: LoadoutRepository> Session<R> {
    pub fn new(store: LoadoutStore<R>, tables: ReferenceTables) -> Self {
        Self { store, tables }
    }

    /// Full id for an exact id or unambiguous prefix.
    pub fn resolve(&self, id: &str) -> Result<LoadoutId> {
        self.loadout(id).map(|l| l.id.clone())
    }

    pub fn loadout(&self, id: &str) -> Result<&Loadout> {
        self.store
            .find(id)
            .with_context(|| format!("No loadout matches '{id}'"))
    }

    /// Tells the user when the last write only reached memory.
    fn report_persistence(&self, out: &mut dyn Write) -> Result<()> {
        if !self.store.is_persisting() {
            writeln!(
                out,
                "warning: changes could not be saved to disk; see the log for details"
            )?;
        }
        Ok(())
    }
}

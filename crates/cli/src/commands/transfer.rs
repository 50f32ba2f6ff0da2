//! Export, import and backup restore.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use loadout_store::{LoadoutRepository, bulk_export_file_name, single_export_file_name};

use super::Session;

/// Write one loadout, or a backup of all of them, to a JSON file
#[derive(Parser, Debug)]
pub struct Export {
    /// Export only this loadout
    #[arg(long)]
    pub id: Option<String>,

    /// Output file or directory (default: current directory)
    pub path: Option<PathBuf>,
}

/// A directory target gets the default file name appended.
fn output_path(target: Option<PathBuf>, default_name: String) -> PathBuf {
    match target {
        Some(path) if path.is_dir() => path.join(default_name),
        Some(path) => path,
        None => PathBuf::from(default_name),
    }
}

impl Export {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let now = Utc::now();
        let (json, path) = match &self.id {
            Some(id) => {
                let loadout = session.loadout(id)?;
                let json = loadout_store::export_single(loadout, now)
                    .context("Failed to serialize loadout")?;
                (json, output_path(self.path, single_export_file_name(&loadout.name)))
            }
            None => {
                let json = session
                    .store
                    .export_all(now)
                    .context("Failed to serialize loadouts")?;
                (json, output_path(self.path, bulk_export_file_name(now)))
            }
        };

        fs::write(&path, json)
            .with_context(|| format!("Failed to write export: {}", path.display()))?;
        tracing::info!(path = %path.display(), "exported");
        writeln!(out, "Wrote {}", path.display())?;
        Ok(())
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Add the loadout from an export file
#[derive(Parser, Debug)]
pub struct Import {
    pub path: PathBuf,
}

impl Import {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let json = read_input(&self.path)?;
        let id = session.store.import_single(&json)?;
        let name = session
            .store
            .get(id.as_str())
            .map(|l| l.name.clone())
            .unwrap_or_default();
        writeln!(out, "Imported {name} ({id})")?;
        session.report_persistence(out)
    }
}

/// Replace all loadouts with a backup file
#[derive(Parser, Debug)]
pub struct Restore {
    pub path: PathBuf,
}

impl Restore {
    pub fn execute<R: LoadoutRepository>(
        self,
        session: &mut Session<R>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let json = read_input(&self.path)?;
        let skipped = session.store.restore(&json)?;
        writeln!(out, "Restored {} loadout(s)", session.store.len())?;
        for reason in &skipped {
            writeln!(out, "  skipped {reason}")?;
        }
        session.report_persistence(out)
    }
}

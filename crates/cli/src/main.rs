//! Loadout planner command-line front end.
mod commands;
mod config;
mod logging;
mod render;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Command, Session};
use config::{ConfigArgs, PlannerConfig};
use loadout_store::{FileLoadoutRepository, LoadoutStore};
use planner_content::{ContentFactory, bundled_tables};
use planner_core::ReferenceTables;

/// Plan and compare gear loadouts
#[derive(Parser)]
#[command(name = "loadout-planner")]
#[command(about = "Plan gear loadouts and see their combined stats", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Also log to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn load_tables(config: &PlannerConfig) -> Result<ReferenceTables> {
    match &config.tables_dir {
        Some(dir) => ContentFactory::new(dir)
            .load_tables()
            .with_context(|| format!("Failed to load reference tables from {}", dir.display())),
        None => bundled_tables(),
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = PlannerConfig::load(&cli.config)?;
    let _guard = logging::init(&config.log_dir, cli.verbose)?;
    tracing::debug!(?config, "configuration resolved");

    let tables = load_tables(&config)?;
    let repo = FileLoadoutRepository::new(&config.data_dir).with_context(|| {
        format!("Failed to open data directory: {}", config.data_dir.display())
    })?;

    let mut store = LoadoutStore::open(repo);
    store.reconcile_slot_classes(&tables);

    let mut session = Session::new(store, tables);
    cli.command.execute(&mut session, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use planner_core::MissionType;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mission_arguments_parse_case_insensitively() {
        let cli = Cli::try_parse_from(["loadout-planner", "list", "--mission", "eva"]).unwrap();
        let Command::List(list) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(list.mission, Some(MissionType::Eva));

        let cli = Cli::try_parse_from(["loadout-planner", "mission", "abc", "Combat"]).unwrap();
        let Command::Mission(mission) = cli.command else {
            panic!("expected mission");
        };
        assert_eq!(mission.mission, MissionType::Combat);

        let cli =
            Cli::try_parse_from(["loadout-planner", "new", "Raid", "--mission", "uniform 1"])
                .unwrap();
        let Command::New(new) = cli.command else {
            panic!("expected new");
        };
        assert_eq!(new.mission, MissionType::Uniform1);
    }

    #[test]
    fn unknown_mission_is_rejected() {
        assert!(Cli::try_parse_from(["loadout-planner", "list", "--mission", "picnic"]).is_err());
    }
}

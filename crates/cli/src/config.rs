//! CLI configuration and its sources.
//!
//! Later sources override earlier ones:
//! 1. platform defaults (`directories::ProjectDirs`)
//! 2. `planner.toml` in the config directory, or the file named by
//!    `PLANNER_CONFIG` / `--config`
//! 3. environment variables (a `.env` file is loaded first)
//! 4. command-line flags
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const APP_NAME: &str = "loadout-planner";
pub const CONFIG_FILE: &str = "planner.toml";

pub const ENV_DATA_DIR: &str = "PLANNER_DATA_DIR";
pub const ENV_TABLES_DIR: &str = "PLANNER_TABLES_DIR";
pub const ENV_CONFIG: &str = "PLANNER_CONFIG";
pub const ENV_LOG_DIR: &str = "PLANNER_LOG_DIR";

/// Resolved configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Where `loadouts.json` lives.
    pub data_dir: PathBuf,
    /// Directory with `armor-data.json` / `weapon-stats.json`. `None` uses the
    /// tables compiled into the binary.
    pub tables_dir: Option<PathBuf>,
    pub log_dir: PathBuf,
}

/// Flags that override every other source.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// Directory holding saved loadouts
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding armor-data.json and weapon-stats.json
    #[arg(long, global = true, value_name = "DIR")]
    pub tables_dir: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Configuration file (default: planner.toml in the config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Contents of `planner.toml`. Every key is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    tables_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let dirs = project_dirs();
        Self {
            data_dir: dirs
                .as_ref()
                .map(|d| d.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("./planner_data")),
            tables_dir: None,
            log_dir: dirs
                .as_ref()
                .map(|d| d.cache_dir().join("logs"))
                .unwrap_or_else(|| PathBuf::from("/tmp/loadout-planner/logs")),
        }
    }
}

impl PlannerConfig {
    /// Resolves configuration from every source against the process environment.
    pub fn load(args: &ConfigArgs) -> Result<Self> {
        Self::load_with(args, |key| env::var(key).ok())
    }

    /// Same as [`load`](Self::load) with an injectable environment.
    pub fn load_with(args: &ConfigArgs, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        // An explicitly named file must exist; the default one is optional.
        let explicit = args
            .config
            .clone()
            .or_else(|| var(ENV_CONFIG).map(PathBuf::from));
        match explicit {
            Some(path) => config.apply_file(read_config_file(&path)?),
            None => {
                if let Some(path) = default_config_path()
                    && path.is_file()
                {
                    config.apply_file(read_config_file(&path)?);
                }
            }
        }

        config.apply_env(&var);
        config.apply_args(args);
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(dir) = file.data_dir {
            self.data_dir = dir;
        }
        if let Some(dir) = file.tables_dir {
            self.tables_dir = Some(dir);
        }
        if let Some(dir) = file.log_dir {
            self.log_dir = dir;
        }
    }

    fn apply_env(&mut self, var: &impl Fn(&str) -> Option<String>) {
        let read_dir = |key: &str| var(key).filter(|v: &String| !v.is_empty()).map(PathBuf::from);

        if let Some(dir) = read_dir(ENV_DATA_DIR) {
            self.data_dir = dir;
        }
        if let Some(dir) = read_dir(ENV_TABLES_DIR) {
            self.tables_dir = Some(dir);
        }
        if let Some(dir) = read_dir(ENV_LOG_DIR) {
            self.log_dir = dir;
        }
    }

    fn apply_args(&mut self, args: &ConfigArgs) {
        if let Some(dir) = &args.data_dir {
            self.data_dir = dir.clone();
        }
        if let Some(dir) = &args.tables_dir {
            self.tables_dir = Some(dir.clone());
        }
        if let Some(dir) = &args.log_dir {
            self.log_dir = dir.clone();
        }
    }
}

/// `planner.toml` in the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join(CONFIG_FILE))
}

fn read_config_file(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Invalid config file: {}", path.display()))
}

use crate::services::DEFAULT_DATABASE_FILE;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite file holding the todos table
    pub database_path: PathBuf,
    /// Default tracing filter, overridden by RUST_LOG
    pub log_level: String,
    /// Log file; defaults to todo-tui.log in the config directory
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".todo-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Read the saved config. `Ok(None)` when no config file exists yet.
    pub fn load() -> anyhow::Result<Option<Config>> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        if !config_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Could not read {}", config_path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Could not parse {}", config_path.display()))?;
        Ok(Some(config))
    }

    /// Load the saved config, writing the defaults on first run.
    ///
    /// A config file that exists but cannot be read is left untouched and
    /// the defaults are used for this run only.
    pub fn load_or_init() -> Config {
        // Logging is not up yet, so problems go to stderr
        match Self::load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                let config = Config::default();
                if let Err(e) = config.save() {
                    eprintln!("Could not write default config: {:#}", e);
                }
                config
            }
            Err(e) => {
                eprintln!("Using default config: {:#}", e);
                Config::default()
            }
        }
    }

    /// Where log lines go
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("todo-tui.log")))
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

//! Configuration loading for the symptom advisor CLI.
//! Reads symptom-advisor.toml from the current directory or the path in
//! SYMPTOM_ADVISOR_CONFIG.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "SYMPTOM_ADVISOR_CONFIG";
pub const DB_ENV: &str = "SYMPTOM_ADVISOR_DB";
pub const DEFAULT_CONFIG_FILE: &str = "symptom-advisor.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from("symptom_advisor.db")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AdvisorConfig {
    /// Load configuration.
    ///
    /// An explicit path (flag, then env var) must exist. Without one, the
    /// default file is read if present, otherwise built-in defaults apply.
    /// `SYMPTOM_ADVISOR_DB` then overrides the database path.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);

        let mut config = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_path(&path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_path(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        if let Some(db) = std::env::var_os(DB_ENV) {
            config.storage.database_path = PathBuf::from(db);
        }
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Config file not found: {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

//! Store configuration
//!
//! Loaded from an optional TOML file, then overridden by environment
//! variables (`PICTO_DB_PATH`, `PICTO_LOG_PROFILE`). Missing sections fall
//! back to defaults.

use std::path::{Path, PathBuf};

use picto_core::logging_facility::Profile;
use serde::Deserialize;

use crate::errors::{config_error, io_error, Result};

pub const ENV_DB_PATH: &str = "PICTO_DB_PATH";
pub const ENV_LOG_PROFILE: &str = "PICTO_LOG_PROFILE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub journal_mode: JournalMode,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".picto/picto.db"),
            journal_mode: JournalMode::Wal,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    #[default]
    Wal,
    Delete,
    Memory,
}

impl JournalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            JournalMode::Wal => "WAL",
            JournalMode::Delete => "DELETE",
            JournalMode::Memory => "MEMORY",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub profile: Profile,
}

impl StoreConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config: {}", e)))
    }

    /// Read and parse a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| io_error("config_load", e))?;
        Self::from_toml_str(&content)
    }

    /// Resolve the effective configuration: file (if any), then process env
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DB_PATH).filter(|p| !p.is_empty()) {
            self.database.path = PathBuf::from(path);
        }
        if let Some(profile) = lookup(ENV_LOG_PROFILE).filter(|p| !p.is_empty()) {
            self.logging.profile = profile
                .parse()
                .map_err(|e: String| config_error(format!("{}: {}", ENV_LOG_PROFILE, e)))?;
        }
        Ok(self)
    }
}

//! Configuration loading.
//!
//! Values come from environment variables; unset or blank variables fall back to
//! the defaults below. Command-line flags override whatever is loaded here.

use std::path::PathBuf;

use thiserror::Error;

use missionstock_observability::{LogFormat, ParseLogFormatError};
use missionstock_store::FileSnapshotStore;

pub const DIR_VAR: &str = "MISSION_STOCK_DIR";
pub const FILE_VAR: &str = "MISSION_STOCK_FILE";
pub const LOG_FORMAT_VAR: &str = "MISSION_STOCK_LOG_FORMAT";

pub const DEFAULT_DIR: &str = ".";
pub const DEFAULT_FILE: &str = "products.dat";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MISSION_STOCK_LOG_FORMAT: {0}")]
    LogFormat(#[from] ParseLogFormatError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the snapshot file.
    pub data_dir: PathBuf,
    /// Snapshot file name inside `data_dir`.
    pub data_file: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DIR),
            data_file: DEFAULT_FILE.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            data_dir: get(DIR_VAR).map(PathBuf::from).unwrap_or(defaults.data_dir),
            data_file: get(FILE_VAR).unwrap_or(defaults.data_file),
            log_format,
        })
    }

    pub fn snapshot_store(&self) -> FileSnapshotStore {
        FileSnapshotStore::new(&self.data_dir, &self.data_file)
    }
}

//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`)
//! 2. Environment variables (`RESTO_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use directories::ProjectDirs;
use resto_db::DbConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Default `EnvFilter` directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,resto=debug,sqlx=warn";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// SQLite database file.
    pub database_path: PathBuf,

    /// Maximum pooled connections.
    pub max_connections: u32,
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine app data directory")]
    NoDataDir,

    #[error("Could not create data directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

impl ConfigState {
    /// Loads configuration from the `--db` flag, environment variables and
    /// defaults, in that order of precedence.
    ///
    /// ## Environment Variables
    /// - `RESTO_DB_PATH`: Override the database file
    /// - `RESTO_MAX_CONNECTIONS`: Override the pool size (default 5)
    ///
    /// ## Default Database Path
    /// - **macOS**: `~/Library/Application Support/com.resto.manager/resto.db`
    /// - **Windows**: `%APPDATA%\resto\manager\data\resto.db`
    /// - **Linux**: `~/.local/share/manager/resto.db`
    pub fn resolve(db_flag: Option<PathBuf>) -> Result<Self, ConfigError> {
        let database_path = match (db_flag, std::env::var("RESTO_DB_PATH")) {
            (Some(path), _) => path,
            (None, Ok(path)) => PathBuf::from(path),
            (None, Err(_)) => default_database_path()?,
        };

        let max_connections = match std::env::var("RESTO_MAX_CONNECTIONS") {
            Ok(raw) => parse_max_connections(&raw)?,
            Err(_) => 5,
        };

        Ok(ConfigState {
            database_path,
            max_connections,
        })
    }

    /// Builds the database configuration for this app configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path).max_connections(self.max_connections)
    }
}

fn parse_max_connections(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue("RESTO_MAX_CONNECTIONS".to_string())),
    }
}

fn default_database_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("com", "resto", "manager").ok_or(ConfigError::NoDataDir)?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("resto.db"))
}

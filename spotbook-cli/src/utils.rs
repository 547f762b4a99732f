//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including argument parsing, configuration loading, database management,
//! and output formatting.

use crate::error::CliError;
use chrono::NaiveDate;
use std::path::PathBuf;
use spotbook::{Config, ConfigBuilder, Database, DatabaseConfig, SpotId, UserId};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. User configuration file
/// 3. Built-in defaults
pub fn load_configuration(_global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options and configuration.
fn resolve_database_path(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    // Priority: global option > config file > default
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.join("spotbook.db"));
    }

    if let Some(ref data_dir) = config.data_dir {
        return Ok(data_dir.join("spotbook.db"));
    }

    // Default: ~/.spotbook/spotbook.db
    let home_dir = home::home_dir()
        .ok_or_else(|| CliError::Config("Could not determine home directory".to_string()))?;

    Ok(home_dir.join(".spotbook").join("spotbook.db"))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global, config)?;

    if !db_path.exists() && global.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Parse a booking date in `YYYY-MM-DD` form.
pub fn parse_date(input: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CliError::InvalidArguments(format!("expected a date in YYYY-MM-DD form, got '{input}'"))
    })
}

/// Parse a spot number into a validated identifier.
pub fn parse_spot(value: u32) -> Result<SpotId, CliError> {
    SpotId::try_from(value).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Parse a user identifier.
pub fn parse_user(input: &str) -> Result<UserId, CliError> {
    UserId::new(input).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: std::time::SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

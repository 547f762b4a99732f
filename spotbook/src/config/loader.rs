//! Configuration source loading.
//!
//! This module reads the two external configuration layers: the user
//! configuration file and `SPOTBOOK_*` environment variables.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::schema::Config;

/// Returns the path of the user configuration file, if a home directory
/// can be determined.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".spotbook").join("config.yaml"))
}

/// Loads a configuration file.
///
/// A missing file is not an error; it simply contributes nothing to the
/// merged configuration.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let config: Config = serde_yaml::from_str(&contents)?;
    Ok(config)
}

/// Builds a configuration layer from `SPOTBOOK_*` environment variables.
///
/// Recognized variables:
/// - `SPOTBOOK_DATA_DIR`: directory holding the reservation database
/// - `SPOTBOOK_MAX_LOCK_WAIT`: lock wait limit in seconds
///
/// # Errors
///
/// Returns an error if `SPOTBOOK_MAX_LOCK_WAIT` is set but not a valid
/// number of seconds.
pub fn load_env_config() -> Result<Config> {
    let mut config = Config::default();

    if let Ok(data_dir) = std::env::var("SPOTBOOK_DATA_DIR") {
        config.data_dir = Some(PathBuf::from(data_dir));
    }

    if let Ok(max_wait) = std::env::var("SPOTBOOK_MAX_LOCK_WAIT") {
        let seconds = max_wait.parse::<u64>().map_err(|_| Error::Validation {
            field: "SPOTBOOK_MAX_LOCK_WAIT".into(),
            message: format!("expected a number of seconds, got '{max_wait}'"),
        })?;
        config.maximum_lock_wait_seconds = Some(seconds);
    }

    Ok(config)
}

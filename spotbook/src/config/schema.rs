//! Configuration schema definitions.
//!
//! This module defines the configuration structure for spotbook and the
//! merge rule used to layer configuration sources.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall through to the next
/// configuration layer and ultimately to built-in defaults.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use spotbook::config::Config;
///
/// let config = Config {
///     data_dir: Some(PathBuf::from("/var/lib/spotbook")),
///     ..Default::default()
/// };
/// assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/spotbook")));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the reservation database.
    pub data_dir: Option<PathBuf>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,
}

impl Config {
    /// Overlays `other` on top of this configuration.
    ///
    /// Fields set in `other` win; unset fields keep their current value.
    #[must_use]
    pub fn merged_with(self, other: Self) -> Self {
        Self {
            data_dir: other.data_dir.or(self.data_dir),
            maximum_lock_wait_seconds: other
                .maximum_lock_wait_seconds
                .or(self.maximum_lock_wait_seconds),
        }
    }
}

//! Configuration system for spotbook.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file (`~/.spotbook/config.yaml`)
//! - Environment variable overrides (`SPOTBOOK_*`)
//! - Programmatic configuration via the builder
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_config`])
//! 2. Environment variables (`SPOTBOOK_*`)
//! 3. User config (`~/.spotbook/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use spotbook::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("Data directory: {:?}", config.data_dir);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use std::path::PathBuf;
//! use spotbook::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     data_dir: Some(PathBuf::from("/var/lib/spotbook")),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/spotbook")));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config_file, load_env_config, user_config_path};
pub use schema::Config;

use crate::error::{Error, Result};

/// Builder assembling a [`Config`] from its layered sources.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a new builder with all sources enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips the configuration file layer.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips the environment variable layer.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Sets programmatic overrides, the highest-precedence layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed, an
    /// environment variable holds an invalid value, or the merged result
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(path) = user_config_path() {
                config = config.merged_with(load_config_file(&path)?);
            }
        }

        if !self.skip_env {
            config = config.merged_with(load_env_config()?);
        }

        if let Some(overrides) = self.overrides {
            config = config.merged_with(overrides);
        }

        validate(&config)?;
        Ok(config)
    }
}

/// Validates a merged configuration.
fn validate(config: &Config) -> Result<()> {
    if config.maximum_lock_wait_seconds == Some(0) {
        return Err(Error::Validation {
            field: "maximum_lock_wait_seconds".into(),
            message: "lock wait must be at least one second".into(),
        });
    }
    Ok(())
}

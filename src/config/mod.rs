//! Configuration management for paidsweep
//!
//! Settings are layered from:
//! 1. Default values (embedded in structs)
//! 2. An INI (or TOML) file with a `[config]` section
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use paidsweep::config::Config;
//!
//! let config = Config::load(None).expect("Failed to load configuration");
//! println!("Scanning: {}", config.ready_dir().display());
//! ```
//!
//! # Environment Variables
//!
//! Any key can be overridden with `PAIDSWEEP__CONFIG__<KEY>`, e.g.
//! `PAIDSWEEP__CONFIG__IGNORE_DAYS=45`.
//!
//! # Configuration File
//!
//! By default `paidsweep.ini` is read from the working directory. This can be
//! overridden with `--config` or the `PAIDSWEEP_CONFIG` environment variable.
//!
//! ```ini
//! [config]
//! debug       = false
//! ignore_days = 30
//! ready_path  = /srv/invoices/ready
//! opus_list   = /srv/opus/open-items.csv
//! paid_path   = /srv/invoices/paid
//! ```

mod models;
mod sources;
mod validation;

pub use models::{Config, LedgerSource};
pub use sources::resolve_path;
pub use validation::ValidationError;

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file does not exist
    /// - The file is malformed
    /// - Validation fails (missing paths, no ledger source, ...)
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        sources::load_dotenv();
        Self::load_from_path(sources::resolve_path(explicit))
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

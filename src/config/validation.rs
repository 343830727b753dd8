use super::models::Config;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required setting '{field}'")]
    MissingPath { field: &'static str },

    #[error("No ledger source configured (set 'opus_list' or 'opus_path')")]
    NoLedgerSource,

    #[error("Both 'opus_list' and 'opus_path' are set, choose one ledger source")]
    AmbiguousLedgerSource,

    #[error("ready_path and paid_path point to the same directory: {path}")]
    SameSourceAndDestination { path: PathBuf },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_paths(config)?;
    validate_ledger_source(config)?;
    Ok(())
}

fn is_set(path: &Option<PathBuf>) -> bool {
    path.as_deref().is_some_and(|p| !p.as_os_str().is_empty())
}

/// Source and destination must both be present and distinct
fn validate_paths(config: &Config) -> Result<(), ValidationError> {
    if !is_set(&config.ready_path) {
        return Err(ValidationError::MissingPath { field: "ready_path" });
    }

    if !is_set(&config.paid_path) {
        return Err(ValidationError::MissingPath { field: "paid_path" });
    }

    if normalize(config.ready_dir()) == normalize(config.paid_dir()) {
        return Err(ValidationError::SameSourceAndDestination {
            path: config.ready_dir().to_path_buf(),
        });
    }

    Ok(())
}

/// Exactly one of `opus_list` / `opus_path`
fn validate_ledger_source(config: &Config) -> Result<(), ValidationError> {
    match (is_set(&config.opus_list), is_set(&config.opus_path)) {
        (false, false) => Err(ValidationError::NoLedgerSource),
        (true, true) => Err(ValidationError::AmbiguousLedgerSource),
        _ => Ok(()),
    }
}

/// Lexical comparison only; the directories may not exist yet
fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

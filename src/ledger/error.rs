use std::path::PathBuf;

use thiserror::Error;

use crate::scan::ScanError;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Cannot open ledger {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Ledger {path} has no header row")]
    MissingHeader { path: PathBuf },

    #[error("Cannot parse ledger {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

//! Open-items ledger: reading exports and matching invoice numbers
//!
//! The ledger lists invoices that are still open. A PDF whose invoice number
//! is missing from it is considered settled.
//!
//! ## Sources
//!
//! - A single export file (`opus_list`). Any read failure aborts the run.
//! - A directory tree of `*.csv` exports (`opus_path`). Files are read in
//!   path order; a file that cannot be read is logged and skipped, but a
//!   failing directory walk aborts the run.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paidsweep::ledger;
//!
//! let loaded = ledger::load(&LedgerSource::File("open-items.csv".into()))?;
//! assert!(loaded.index.contains("12345678"));
//! ```

pub mod collector;
pub mod error;
pub mod index;
pub mod reader;
pub mod record;

pub use collector::collect_ledger_files;
pub use error::{LedgerError, Result};
pub use index::LedgerIndex;
pub use reader::read_ledger;
pub use record::LedgerRecord;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::LedgerSource;

/// Ledger load statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadStats {
    pub files_read: usize,
    pub files_skipped: Vec<PathBuf>,
    pub records: usize,
}

/// Everything loaded for one run
#[derive(Debug, Default)]
pub struct LoadedLedger {
    pub index: LedgerIndex,
    pub stats: LoadStats,
}

/// Load every record from the configured source
pub fn load(source: &LedgerSource) -> Result<LoadedLedger> {
    let mut loaded = LoadedLedger::default();

    match source {
        LedgerSource::File(path) => {
            let records = read_ledger(path)?;
            loaded.stats.files_read = 1;
            loaded.index.extend(records);
        }
        LedgerSource::Directory(dir) => {
            for path in collect_ledger_files(dir)? {
                match read_ledger(&path) {
                    Ok(records) => {
                        loaded.stats.files_read += 1;
                        loaded.index.extend(records);
                    }
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "Skipping unreadable ledger file");
                        loaded.stats.files_skipped.push(path);
                    }
                }
            }
        }
    }

    loaded.stats.records = loaded.index.len();
    if loaded.index.is_empty() {
        warn!(source = %source.path().display(), "Ledger is empty, every old invoice counts as settled");
    }
    info!(
        source = %source.path().display(),
        files = loaded.stats.files_read,
        skipped = loaded.stats.files_skipped.len(),
        records = loaded.stats.records,
        invoices = loaded.index.invoice_count(),
        "Ledger loaded"
    );

    Ok(loaded)
}

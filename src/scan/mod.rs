//! Filesystem scanning for invoice PDFs and ledger exports
//!
//! Walks are recursive and sorted by path. The only recoverable failure is a
//! PDF whose modification time cannot be read: it is logged and skipped.

pub mod age;
pub mod walker;

pub use age::AgeGate;
pub use walker::{ScanError, walk_files};

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

pub const PDF_EXTENSION: &str = "pdf";
pub const LEDGER_EXTENSION: &str = "csv";

/// A PDF found below the ready path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceFile {
    pub path: PathBuf,
    pub name: String,
    pub modified: DateTime<Utc>,
}

impl InvoiceFile {
    /// Invoice number derived from the file name, if it is long enough
    pub fn invoice_number(&self) -> Option<&str> {
        crate::invoice::extract_invoice_number(&self.name)
    }
}

/// Walk `root` for `*.pdf` files and read their modification times
pub fn scan_invoices(root: &Path) -> walker::Result<Vec<InvoiceFile>> {
    let paths = walk_files(root, PDF_EXTENSION)?;
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let modified = match path.metadata().and_then(|meta| meta.modified()) {
            Ok(modified) => DateTime::<Utc>::from(modified),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Cannot read file info, skipping");
                continue;
            }
        };

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        files.push(InvoiceFile {
            path,
            name,
            modified,
        });
    }

    debug!(root = %root.display(), count = files.len(), "Invoice scan complete");
    Ok(files)
}

//! Discovery of ledger exports in a directory tree
use std::path::{Path, PathBuf};

use tracing::info;

use crate::scan::{self, LEDGER_EXTENSION};

use super::error::Result;

/// All `*.csv` files below `dir`, sorted by path
pub fn collect_ledger_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let files = scan::walk_files(dir, LEDGER_EXTENSION)?;
    info!(dir = %dir.display(), count = files.len(), "Ledger files discovered");
    Ok(files)
}

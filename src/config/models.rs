use crate::humanize::Days;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings from the `[config]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Enables debug-level tracing
    #[serde(default, alias = "debug_mode")]
    pub debug: bool,
    /// PDFs modified within this many days of now are left alone
    #[serde(default)]
    pub ignore_days: Days,
    /// Source directory of PDFs waiting for reconciliation
    pub ready_path: Option<PathBuf>,
    /// Single ledger export file
    pub opus_list: Option<PathBuf>,
    /// Directory scanned recursively for ledger exports (`*.csv`)
    pub opus_path: Option<PathBuf>,
    /// Destination for PDFs no longer listed in the ledger
    pub paid_path: Option<PathBuf>,
    /// Stop the whole run on the first failed move
    #[serde(default = "default_abort_on_move_error")]
    pub abort_on_move_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            ignore_days: Days::default(),
            ready_path: None,
            opus_list: None,
            opus_path: None,
            paid_path: None,
            abort_on_move_error: default_abort_on_move_error(),
        }
    }
}

fn default_abort_on_move_error() -> bool {
    true
}

/// Where ledger records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerSource {
    File(PathBuf),
    Directory(PathBuf),
}

impl LedgerSource {
    pub fn path(&self) -> &Path {
        match self {
            LedgerSource::File(path) | LedgerSource::Directory(path) => path,
        }
    }
}

impl Config {
    /// Ledger source, preferring `opus_path` when both are present.
    ///
    /// Validation rejects configs that set both, so this only matters for
    /// hand-built values.
    pub fn ledger_source(&self) -> Option<LedgerSource> {
        self.opus_path
            .clone()
            .map(LedgerSource::Directory)
            .or_else(|| self.opus_list.clone().map(LedgerSource::File))
    }

    /// Source directory; empty path when unset (validation rejects that)
    pub fn ready_dir(&self) -> &Path {
        self.ready_path.as_deref().unwrap_or_else(|| Path::new(""))
    }

    /// Destination directory; empty path when unset (validation rejects that)
    pub fn paid_dir(&self) -> &Path {
        self.paid_path.as_deref().unwrap_or_else(|| Path::new(""))
    }
}

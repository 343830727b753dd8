//! Per-file decisions and how they are reported
//!
//! The sweep never prints directly. It hands every decision to a
//! [`Reporter`]; the binary uses [`ConsoleReporter`], tests use
//! [`RecordingReporter`] or [`SilentReporter`].

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::config::LedgerSource;
use crate::humanize::Days;
use crate::ledger::LoadStats;
use crate::scan::InvoiceFile;
use crate::sweep::SweepSummary;

/// What happened to one PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Not in the ledger; moved to the paid directory
    Moved { destination: PathBuf },
    /// Not in the ledger; left in place because of a dry run
    WouldMove { destination: PathBuf },
    /// Invoice number is still listed as open
    FoundInLedger { invoice_number: String },
    /// Modified too recently to be reconciled
    TooYoung { ignore_days: Days },
    /// File name cannot carry an invoice number
    NameTooShort,
    /// Move attempted and failed; only reported when failures are recoverable
    MoveFailed { destination: PathBuf, error: String },
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Moved { destination } => write!(f, "moved to {}", destination.display()),
            Decision::WouldMove { destination } => {
                write!(f, "would move to {}", destination.display())
            }
            Decision::FoundInLedger { .. } => write!(f, "(ignored - found in ledger)"),
            Decision::TooYoung { ignore_days } => {
                write!(f, "(ignored - younger than {ignore_days})")
            }
            Decision::NameTooShort => write!(f, "(ignored - name too short)"),
            Decision::MoveFailed { error, .. } => write!(f, "(move failed: {error})"),
        }
    }
}

/// Sink for run progress
pub trait Reporter {
    fn banner(&mut self, _name: &str, _version: &str) {}

    fn ledger_loaded(&mut self, _source: &LedgerSource, _stats: &LoadStats) {}

    fn scan_started(&mut self, _ready_dir: &Path) {}

    /// Called exactly once per PDF considered
    fn decision(&mut self, file: &InvoiceFile, decision: &Decision);

    fn finished(&mut self, _summary: &SweepSummary) {}
}

/// Discards everything
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn decision(&mut self, _file: &InvoiceFile, _decision: &Decision) {}
}

/// Keeps every decision in order, keyed by file name
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub decisions: Vec<(String, Decision)>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decision_for(&self, file_name: &str) -> Option<&Decision> {
        self.decisions
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, decision)| decision)
    }
}

impl Reporter for RecordingReporter {
    fn decision(&mut self, file: &InvoiceFile, decision: &Decision) {
        self.decisions.push((file.name.clone(), decision.clone()));
    }
}

/// Human-readable, colorized lines on a writer (stdout by default)
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Console output is best effort; a closed stdout must not abort a sweep
    fn line(&mut self, text: fmt::Arguments<'_>) {
        let _ = self.out.write_fmt(text);
        let _ = self.out.write_all(b"\n");
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn banner(&mut self, name: &str, version: &str) {
        self.line(format_args!(""));
        self.line(format_args!("{} - Version {}", name.bold(), version));
        self.line(format_args!(""));
    }

    fn ledger_loaded(&mut self, source: &LedgerSource, stats: &LoadStats) {
        match source {
            LedgerSource::File(path) => {
                self.line(format_args!("Reading ledger: {}", path.display()));
            }
            LedgerSource::Directory(dir) => {
                self.line(format_args!(
                    "Reading {} ledger file(s) from: {}",
                    stats.files_read + stats.files_skipped.len(),
                    dir.display()
                ));
            }
        }

        for skipped in &stats.files_skipped {
            self.line(format_args!(
                " - {}",
                format!("skipped unreadable ledger {}", skipped.display()).yellow()
            ));
        }

        self.line(format_args!(
            "Records read from {} (without header): {}",
            source.path().display(),
            stats.records
        ));
    }

    fn scan_started(&mut self, ready_dir: &Path) {
        self.line(format_args!("Searching for invoices in {}", ready_dir.display()));
    }

    fn decision(&mut self, file: &InvoiceFile, decision: &Decision) {
        let status = decision.to_string();
        let status = match decision {
            Decision::Moved { .. } => status.green(),
            Decision::WouldMove { .. } => status.cyan(),
            Decision::MoveFailed { .. } => status.red(),
            Decision::FoundInLedger { .. }
            | Decision::TooYoung { .. }
            | Decision::NameTooShort => status.bright_black(),
        };
        self.line(format_args!(" - {:<31} {}", file.name, status));
    }

    fn finished(&mut self, summary: &SweepSummary) {
        self.line(format_args!(""));
        self.line(format_args!(
            "Moved: {}, found in ledger: {}, too young: {}, name too short: {}",
            summary.moved, summary.found_in_ledger, summary.too_young, summary.name_too_short
        ));
        if summary.would_move > 0 {
            self.line(format_args!("Would move (dry run): {}", summary.would_move));
        }
        if summary.move_failed > 0 {
            self.line(format_args!(
                "{}",
                format!("Failed moves: {}", summary.move_failed).red()
            ));
        }
        self.line(format_args!("Done"));
    }
}

//! One reconciliation pass over the ready directory
//!
//! For every PDF, in path order:
//! 1. age gate (too young files stay)
//! 2. name length check (names that cannot carry a number stay)
//! 3. ledger lookup (open invoices stay)
//! 4. move to the paid directory

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::{Config, LedgerSource};
use crate::ledger::{self, LedgerError, LedgerIndex, LoadStats};
use crate::mover::{self, MoveError};
use crate::report::{Decision, Reporter};
use crate::scan::{self, AgeGate, InvoiceFile, ScanError};

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("No ledger source configured")]
    NoLedgerSource,

    #[error("Ledger load failed: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Invoice scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("Run aborted: {0}")]
    MoveAborted(#[from] MoveError),
}

/// Per-decision counts for a finished run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepSummary {
    pub ledger: LoadStats,
    pub moved: usize,
    pub would_move: usize,
    pub found_in_ledger: usize,
    pub too_young: usize,
    pub name_too_short: usize,
    pub move_failed: usize,
}

impl SweepSummary {
    fn record(&mut self, decision: &Decision) {
        match decision {
            Decision::Moved { .. } => self.moved += 1,
            Decision::WouldMove { .. } => self.would_move += 1,
            Decision::FoundInLedger { .. } => self.found_in_ledger += 1,
            Decision::TooYoung { .. } => self.too_young += 1,
            Decision::NameTooShort => self.name_too_short += 1,
            Decision::MoveFailed { .. } => self.move_failed += 1,
        }
    }

    pub fn processed(&self) -> usize {
        self.moved
            + self.would_move
            + self.found_in_ledger
            + self.too_young
            + self.name_too_short
            + self.move_failed
    }

    pub fn has_failures(&self) -> bool {
        self.move_failed > 0
    }
}

/// Run-time switches that do not live in the config file
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Decide everything, move nothing
    pub dry_run: bool,
}

/// Decides and applies the fate of each PDF against a loaded ledger
pub struct Sweeper<'a> {
    config: &'a Config,
    ledger: &'a LedgerIndex,
    gate: AgeGate,
    options: RunOptions,
}

impl<'a> Sweeper<'a> {
    pub fn new(config: &'a Config, ledger: &'a LedgerIndex, now: DateTime<Utc>) -> Self {
        Self {
            config,
            ledger,
            gate: AgeGate::new(now, config.ignore_days),
            options: RunOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Decide what should happen to `file` without touching the filesystem.
    ///
    /// A file eligible for moving comes back as [`Decision::WouldMove`].
    pub fn evaluate(&self, file: &InvoiceFile) -> Decision {
        if !self.gate.is_old_enough(file.modified) {
            return Decision::TooYoung {
                ignore_days: self.gate.ignore_days(),
            };
        }

        let Some(invoice_number) = file.invoice_number() else {
            return Decision::NameTooShort;
        };

        if self.ledger.contains(invoice_number) {
            return Decision::FoundInLedger {
                invoice_number: invoice_number.to_string(),
            };
        }

        Decision::WouldMove {
            destination: mover::destination_for(self.config.paid_dir(), &file.name),
        }
    }

    /// Evaluate and, unless dry-running, move one file
    pub fn process(&self, file: &InvoiceFile) -> Result<Decision, MoveError> {
        let destination = match self.evaluate(file) {
            Decision::WouldMove { destination } => destination,
            kept => return Ok(kept),
        };

        if self.options.dry_run {
            return Ok(Decision::WouldMove { destination });
        }

        match mover::move_file(&file.path, &destination) {
            Ok(()) => Ok(Decision::Moved { destination }),
            Err(err) if !self.config.abort_on_move_error => {
                error!(file = %file.path.display(), error = %err, "Move failed, continuing");
                Ok(Decision::MoveFailed {
                    destination,
                    error: err.to_string(),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Walk the ready directory and process every PDF in order
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<SweepSummary, SweepError> {
        let ready_dir = self.config.ready_dir();
        reporter.scan_started(ready_dir);
        debug!(
            ready = %ready_dir.display(),
            threshold = %self.gate.threshold(),
            dry_run = self.options.dry_run,
            "Scanning for invoices"
        );

        let mut summary = SweepSummary::default();
        for file in scan::scan_invoices(ready_dir)? {
            let decision = self.process(&file)?;
            debug!(file = %file.name, ?decision, "Decision");
            reporter.decision(&file, &decision);
            summary.record(&decision);
        }

        Ok(summary)
    }
}

/// Full pass: load the ledger, sweep the ready directory, report
pub fn execute(
    config: &Config,
    options: RunOptions,
    now: DateTime<Utc>,
    reporter: &mut dyn Reporter,
) -> Result<SweepSummary, SweepError> {
    reporter.banner(APP_NAME, APP_VERSION);

    let source: LedgerSource = config.ledger_source().ok_or(SweepError::NoLedgerSource)?;
    let loaded = ledger::load(&source)?;
    reporter.ledger_loaded(&source, &loaded.stats);

    let mut summary = Sweeper::new(config, &loaded.index, now)
        .with_options(options)
        .run(reporter)?;
    summary.ledger = loaded.stats;

    info!(
        processed = summary.processed(),
        moved = summary.moved,
        would_move = summary.would_move,
        found = summary.found_in_ledger,
        too_young = summary.too_young,
        name_too_short = summary.name_too_short,
        failed = summary.move_failed,
        "Sweep complete"
    );
    reporter.finished(&summary);

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::humanize::Days;
    use crate::ledger::LedgerRecord;
    use chrono::{TimeDelta, TimeZone};
    use std::path::PathBuf;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 30, 8, 0, 0).unwrap()
    }

    fn test_config() -> Config {
        Config {
            ignore_days: Days(30),
            ready_path: Some(PathBuf::from("ready")),
            opus_list: Some(PathBuf::from("opus.csv")),
            paid_path: Some(PathBuf::from("paid")),
            ..Config::default()
        }
    }

    fn ledger_with(numbers: &[&str]) -> LedgerIndex {
        LedgerIndex::from_records(
            numbers
                .iter()
                .map(|n| LedgerRecord::from(["1000", "D1", "Kunde", *n]))
                .collect(),
        )
    }

    fn pdf(name: &str, age_days: i64) -> InvoiceFile {
        InvoiceFile {
            path: PathBuf::from("ready").join(name),
            name: name.to_string(),
            modified: now() - TimeDelta::days(age_days),
        }
    }

    #[test]
    fn test_found_in_ledger_stays() {
        let config = test_config();
        let ledger = ledger_with(&["12345678"]);
        let sweeper = Sweeper::new(&config, &ledger, now());

        assert_eq!(
            sweeper.evaluate(&pdf("INV-12345678.pdf", 40)),
            Decision::FoundInLedger {
                invoice_number: "12345678".to_string()
            }
        );
    }

    #[test]
    fn test_absent_from_ledger_moves() {
        let config = test_config();
        let ledger = ledger_with(&["87654321"]);
        let sweeper = Sweeper::new(&config, &ledger, now());

        assert_eq!(
            sweeper.evaluate(&pdf("INV-12345678.pdf", 40)),
            Decision::WouldMove {
                destination: PathBuf::from("paid/INV-12345678.pdf")
            }
        );
    }

    #[test]
    fn test_too_young_wins_over_everything() {
        let config = test_config();
        let ledger = ledger_with(&[]);
        let sweeper = Sweeper::new(&config, &ledger, now());

        for name in ["INV-12345678.pdf", "x.pdf"] {
            assert_eq!(
                sweeper.evaluate(&pdf(name, 10)),
                Decision::TooYoung {
                    ignore_days: Days(30)
                }
            );
        }
    }

    #[test]
    fn test_exactly_at_threshold_is_too_young() {
        let config = test_config();
        let ledger = ledger_with(&[]);
        let sweeper = Sweeper::new(&config, &ledger, now());

        assert!(matches!(
            sweeper.evaluate(&pdf("INV-12345678.pdf", 30)),
            Decision::TooYoung { .. }
        ));
    }

    #[test]
    fn test_short_name_is_never_looked_up() {
        let config = test_config();
        let ledger = ledger_with(&["x"]);
        let sweeper = Sweeper::new(&config, &ledger, now());

        assert_eq!(sweeper.evaluate(&pdf("x.pdf", 40)), Decision::NameTooShort);
        assert_eq!(sweeper.evaluate(&pdf("1234567.pdf", 40)), Decision::NameTooShort);
    }

    #[test]
    fn test_dry_run_process_does_not_move() {
        let config = test_config();
        let ledger = ledger_with(&[]);
        let sweeper =
            Sweeper::new(&config, &ledger, now()).with_options(RunOptions { dry_run: true });

        // The source does not exist; a real move would fail
        let decision = sweeper.process(&pdf("INV-12345678.pdf", 40)).unwrap();
        assert!(matches!(decision, Decision::WouldMove { .. }));
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = SweepSummary::default();
        summary.record(&Decision::NameTooShort);
        summary.record(&Decision::TooYoung {
            ignore_days: Days(1),
        });
        summary.record(&Decision::MoveFailed {
            destination: PathBuf::from("paid/a.pdf"),
            error: "denied".to_string(),
        });

        assert_eq!(summary.processed(), 3);
        assert_eq!(summary.name_too_short, 1);
        assert!(summary.has_failures());
    }
}

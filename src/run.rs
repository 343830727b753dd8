use std::path::Path;
use std::process::ExitCode;

use chrono::Utc;
use tracing::{error, info};

use paidsweep::config::{Config, resolve_path};
use paidsweep::observability;
use paidsweep::report::ConsoleReporter;
use paidsweep::sweep::{self, RunOptions};

/// Fatal error: config, ledger, walk, or an aborting move
const EXIT_FATAL: u8 = 1;
/// The run finished but some moves failed
const EXIT_MOVE_FAILURES: u8 = 2;

pub fn run(config_path: Option<&Path>, options: RunOptions) -> ExitCode {
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to read configuration: {err}");
            return ExitCode::from(EXIT_FATAL);
        }
    };

    observability::init_tracing(config.debug);
    info!(
        path = %resolve_path(config_path).display(),
        "Configuration loaded"
    );

    let mut reporter = ConsoleReporter::stdout();
    match sweep::execute(&config, options, Utc::now(), &mut reporter) {
        Ok(summary) if summary.has_failures() => ExitCode::from(EXIT_MOVE_FAILURES),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Sweep aborted");
            eprintln!("Error while processing invoices: {err}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

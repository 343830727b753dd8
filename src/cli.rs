use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paidsweep", version)]
#[command(about = "Move settled invoice PDFs out of the ready directory", long_about = None)]
pub struct Cli {
    /// Configuration file (default: $PAIDSWEEP_CONFIG or ./paidsweep.ini)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile the ready directory against the ledger
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Report what would be moved without moving anything
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_globals() {
        let cli = Cli::parse_from(["paidsweep", "run", "--dry-run", "--config", "site.ini"]);
        assert_eq!(cli.config, Some(PathBuf::from("site.ini")));
        assert!(!cli.no_color);
        let Commands::Run(args) = cli.command;
        assert!(args.dry_run);
    }
}

mod cli;
mod run;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Commands};
use paidsweep::sweep::RunOptions;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Run(args) => run::run(
            cli.config.as_deref(),
            RunOptions {
                dry_run: args.dry_run,
            },
        ),
    }
}

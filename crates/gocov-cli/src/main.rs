//! go-coverage-summary: per-package coverage digest for CI job summaries
//!
//! ## Usage
//!
//! ```bash
//! go-coverage-summary --file coverage.out
//! go-coverage-summary --file coverage.out --exclude pkg/a,pkg/b
//! go-coverage-summary --file coverage.out --json coverage.json
//! ```

use clap::Parser;
use go_coverage_summary::{execute_summary, Cli, CliConfig, CliResult, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    execute_summary(&config, &cli)
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    CliConfig::new().with_verbosity(verbosity)
}

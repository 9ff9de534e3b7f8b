//! CLI command definitions using clap

use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;

/// go-coverage-summary: append a per-package coverage table to the CI job summary
#[derive(Parser, Debug)]
#[command(name = "go-coverage-summary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the coverage profile to read
    #[arg(short, long, value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from))]
    pub file: PathBuf,

    /// Package identifiers to exclude (repeatable, comma-separated, case-insensitive)
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Append target for the rendered summary (normally set by the CI runner)
    #[arg(long, env = "GITHUB_STEP_SUMMARY", value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from))]
    pub summary_file: PathBuf,

    /// Also write the aggregation result as pretty-printed JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,
}

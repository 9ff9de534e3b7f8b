//! go-coverage-summary CLI library.
//!
//! Argument handling, configuration, and the summary handler for the
//! `go-coverage-summary` binary. Domain logic (parsing, aggregation,
//! formatting) lives in the `gocov` crate.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod commands;
mod config;
mod error;
mod summary;

pub use commands::Cli;
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use summary::execute_summary;

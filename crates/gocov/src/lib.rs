//! gocov: Go cover-profile parsing and per-package coverage aggregation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Profile Parser → Package Aggregator → Markdown Formatter    │
//! │   (profile)        (coverage)           (formatters)         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is the library half of `go-coverage-summary`: everything here is
//! side-effect free apart from reading the profile and appending the
//! rendered table, so the pipeline is testable in isolation. The CLI crate
//! owns argument handling and exit codes.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod coverage;
mod formatters;
mod profile;
mod result;

pub use coverage::{
    aggregate_profiles, package_of, ExcludeSet, PackageCoverage, PackageCoverageMap,
};
pub use formatters::{MarkdownFormatter, DEFAULT_TITLE};
pub use profile::{parse_profiles, parse_profiles_from_str, Mode, Profile, ProfileBlock};
pub use result::{GocovError, GocovResult};

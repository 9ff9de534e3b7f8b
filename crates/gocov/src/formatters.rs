//! Markdown summary formatter.
//!
//! ## Output format
//!
//! ```text
//! ---
//! ## go-coverage-summary
//! | Package | Coverage |
//! | ----- | ----- |
//! | `<package>` | **<percent, 1 decimal>%** |
//! ```
//!
//! The block is appended to the sink (created if absent), so repeated CI
//! steps accumulate their tables in one job summary.

use crate::coverage::PackageCoverageMap;
use crate::result::GocovResult;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Default heading rendered above the coverage table
pub const DEFAULT_TITLE: &str = "go-coverage-summary";

/// Markdown table formatter for an aggregated coverage map
#[derive(Debug)]
pub struct MarkdownFormatter<'a> {
    coverage: &'a PackageCoverageMap,
    title: String,
}

impl<'a> MarkdownFormatter<'a> {
    /// Create a formatter with the default title
    #[must_use]
    pub fn new(coverage: &'a PackageCoverageMap) -> Self {
        Self {
            coverage,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Override the heading above the table
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render the header block and one row per package
    ///
    /// Packages with no statements have no defined percentage and are
    /// omitted from the table.
    #[must_use]
    pub fn generate(&self) -> String {
        use std::fmt::Write;

        let mut output = String::new();
        output.push('\n');
        output.push_str("---\n");
        let _ = writeln!(output, "## {}", self.title);
        output.push_str("| Package | Coverage |\n");
        output.push_str("| ----- | ----- |\n");

        for (package, coverage) in self.coverage {
            if let Some(percent) = coverage.percent() {
                let _ = writeln!(output, "| `{package}` | **{percent:.1}%** |");
            }
        }

        output
    }

    /// Append the rendered block to `path`, creating the file if absent
    ///
    /// # Errors
    ///
    /// Returns error if the sink cannot be opened or written
    pub fn append_to(&self, path: &Path) -> GocovResult<()> {
        let mut sink = OpenOptions::new().append(true).create(true).open(path)?;
        sink.write_all(self.generate().as_bytes())?;
        Ok(())
    }
}

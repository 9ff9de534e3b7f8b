//! Per-package aggregation of coverage profiles.
//!
//! The aggregation key is the package identifier: the directory portion of
//! a profile's file path. Totals are pure sums, so the result is
//! independent of profile order.

use crate::profile::{Mode, Profile, ProfileBlock};
use crate::result::{GocovError, GocovResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Aggregated statement coverage for one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageCoverage {
    /// Package identifier (directory portion of the file paths)
    pub name: String,
    /// Total number of statements across all blocks in the package
    pub total_statements: u64,
    /// Statements inside blocks that were executed at least once
    pub covered_statements: u64,
}

impl PackageCoverage {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_statements: 0,
            covered_statements: 0,
        }
    }

    /// Coverage percentage, or `None` when the package has no statements
    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        if self.total_statements == 0 {
            None
        } else {
            Some(100.0 * self.covered_statements as f64 / self.total_statements as f64)
        }
    }

    fn add(&mut self, block: &ProfileBlock) {
        self.total_statements += block.num_stmt;
        if block.count > 0 {
            self.covered_statements += block.num_stmt;
        }
    }
}

/// Canonical aggregation result: package identifier → coverage totals
pub type PackageCoverageMap = BTreeMap<String, PackageCoverage>;

/// Case-insensitive set of package identifiers to omit from aggregation
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: BTreeSet<String>,
}

impl ExcludeSet {
    /// Build a set from raw package identifiers
    ///
    /// Entries are trimmed and lowercased; empty entries are dropped.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Check whether a package identifier is excluded
    #[must_use]
    pub fn contains(&self, package: &str) -> bool {
        self.patterns.contains(&package.to_lowercase())
    }

    /// Number of exclusion patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set has no patterns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Derive the package identifier from a profile's file path
///
/// Returns `.` for paths without a directory component, matching
/// `filepath.Dir` semantics.
#[must_use]
pub fn package_of(file_name: &str) -> String {
    match Path::new(file_name).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}

/// Fold profiles into per-package totals, skipping excluded packages
///
/// Every block's statement count is added to its package's total; blocks
/// with a hit count greater than zero also add to the covered count.
///
/// # Errors
///
/// Returns [`GocovError::UnsupportedMode`] for any profile whose mode is
/// not [`Mode::Atomic`] (other modes use different counting semantics).
pub fn aggregate_profiles(
    profiles: &[Profile],
    exclude: &ExcludeSet,
) -> GocovResult<PackageCoverageMap> {
    let mut coverage = PackageCoverageMap::new();

    for profile in profiles {
        if profile.mode != Mode::Atomic {
            return Err(GocovError::UnsupportedMode { mode: profile.mode });
        }

        let package = package_of(&profile.file_name);
        if exclude.contains(&package) {
            continue;
        }

        let entry = coverage
            .entry(package.clone())
            .or_insert_with(|| PackageCoverage::new(package));
        for block in &profile.blocks {
            entry.add(block);
        }
    }

    Ok(coverage)
}

//! Summary command handler

use crate::commands::Cli;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use gocov::{aggregate_profiles, parse_profiles, ExcludeSet, MarkdownFormatter};
use std::path::Path;

/// Execute the summary pipeline: parse, aggregate, report
///
/// Input paths are validated before any parsing is attempted. The rendered
/// markdown block is appended to the summary sink; the optional JSON
/// export carries the raw per-package counts.
pub fn execute_summary(config: &CliConfig, args: &Cli) -> CliResult<()> {
    if is_blank(&args.file) {
        return Err(CliError::usage("path to coverage profile must not be empty"));
    }
    if is_blank(&args.summary_file) {
        return Err(CliError::config("$GITHUB_STEP_SUMMARY must not be empty"));
    }

    let profiles = parse_profiles(&args.file)?;
    if config.verbosity.is_verbose() {
        println!(
            "Parsed {} profile(s) from {}",
            profiles.len(),
            args.file.display()
        );
    }

    let exclude = ExcludeSet::from_patterns(&args.exclude);
    let coverage = aggregate_profiles(&profiles, &exclude)?;
    if config.verbosity.is_verbose() {
        println!(
            "Aggregated {} package(s), {} exclusion pattern(s)",
            coverage.len(),
            exclude.len()
        );
    }

    if let Some(ref json_path) = args.json {
        let json = serde_json::to_string_pretty(&coverage)
            .map_err(|e| CliError::report_generation(e.to_string()))?;
        std::fs::write(json_path, json)?;
        if !config.verbosity.is_quiet() {
            println!("Coverage summary exported to: {}", json_path.display());
        }
    }

    MarkdownFormatter::new(&coverage).append_to(&args.summary_file)?;
    if !config.verbosity.is_quiet() {
        println!(
            "Coverage summary appended to: {}",
            args.summary_file.display()
        );
    }

    Ok(())
}

/// Check for an empty or whitespace-only path
fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const ATOMIC_PROFILE: &str = "mode: atomic
pkgA/x.go:3.2,7.3 10 5
pkgA/y.go:10.1,12.2 10 0
";

    fn cli(file: PathBuf, summary_file: PathBuf) -> Cli {
        Cli {
            file,
            exclude: vec![],
            summary_file,
            json: None,
            verbose: 0,
            quiet: true,
        }
    }

    fn quiet_config() -> CliConfig {
        CliConfig::new().with_verbosity(crate::config::Verbosity::Quiet)
    }

    #[test]
    fn test_end_to_end_half_covered() {
        let temp = TempDir::new().unwrap();
        let profile = temp.path().join("coverage.out");
        let summary = temp.path().join("summary.md");
        std::fs::write(&profile, ATOMIC_PROFILE).unwrap();

        execute_summary(&quiet_config(), &cli(profile, summary.clone())).unwrap();

        let content = std::fs::read_to_string(&summary).unwrap();
        assert!(content.contains("## go-coverage-summary"));
        assert!(content.contains("| `pkgA` | **50.0%** |"));
    }

    #[test]
    fn test_exclusion_leaves_header_only() {
        let temp = TempDir::new().unwrap();
        let profile = temp.path().join("coverage.out");
        let summary = temp.path().join("summary.md");
        std::fs::write(&profile, ATOMIC_PROFILE).unwrap();

        let mut args = cli(profile, summary.clone());
        args.exclude = vec!["pkgA".to_string()];
        execute_summary(&quiet_config(), &args).unwrap();

        let content = std::fs::read_to_string(&summary).unwrap();
        assert!(content.contains("| Package | Coverage |"));
        assert!(!content.contains("| `"));
    }

    #[test]
    fn test_empty_file_path_is_usage_error() {
        let temp = TempDir::new().unwrap();
        let summary = temp.path().join("summary.md");

        let err =
            execute_summary(&quiet_config(), &cli(PathBuf::from("  "), summary.clone()))
                .unwrap_err();

        assert!(matches!(err, CliError::Usage { .. }));
        assert!(!summary.exists());
    }

    #[test]
    fn test_empty_summary_path_is_config_error() {
        let temp = TempDir::new().unwrap();
        let profile = temp.path().join("coverage.out");
        std::fs::write(&profile, ATOMIC_PROFILE).unwrap();

        let err =
            execute_summary(&quiet_config(), &cli(profile, PathBuf::from(""))).unwrap_err();

        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn test_non_atomic_mode_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let profile = temp.path().join("coverage.out");
        let summary = temp.path().join("summary.md");
        std::fs::write(&profile, "mode: count\npkgA/x.go:3.2,7.3 10 5\n").unwrap();

        let err = execute_summary(&quiet_config(), &cli(profile, summary.clone())).unwrap_err();

        assert!(matches!(
            err,
            CliError::Coverage(gocov::GocovError::UnsupportedMode { .. })
        ));
        assert!(!summary.exists());
    }

    #[test]
    fn test_json_export_round_trips() {
        let temp = TempDir::new().unwrap();
        let profile = temp.path().join("coverage.out");
        let summary = temp.path().join("summary.md");
        let json_path = temp.path().join("coverage.json");
        std::fs::write(&profile, ATOMIC_PROFILE).unwrap();

        let mut args = cli(profile, summary);
        args.json = Some(json_path.clone());
        execute_summary(&quiet_config(), &args).unwrap();

        let content = std::fs::read_to_string(&json_path).unwrap();
        let coverage: gocov::PackageCoverageMap = serde_json::from_str(&content).unwrap();
        assert_eq!(coverage["pkgA"].total_statements, 20);
        assert_eq!(coverage["pkgA"].covered_statements, 10);
    }

    #[test]
    fn test_missing_profile_file_is_coverage_error() {
        let temp = TempDir::new().unwrap();
        let summary = temp.path().join("summary.md");

        let err = execute_summary(
            &quiet_config(),
            &cli(temp.path().join("nope.out"), summary),
        )
        .unwrap_err();

        assert!(matches!(err, CliError::Coverage(gocov::GocovError::Io(_))));
    }
}

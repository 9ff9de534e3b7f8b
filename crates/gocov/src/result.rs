//! Result and error types for gocov.

use crate::profile::Mode;
use thiserror::Error;

/// Result type for gocov operations
pub type GocovResult<T> = Result<T, GocovError>;

/// Errors that can occur while reading or aggregating coverage profiles
#[derive(Debug, Error)]
pub enum GocovError {
    /// Profile file could not be read, or the summary sink could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile is missing its leading mode line
    #[error("coverage profile is missing a 'mode:' line")]
    MissingMode,

    /// Mode line names a counting mode this crate does not know about
    #[error("unknown coverage mode '{mode}'")]
    UnknownMode {
        /// The unrecognized mode string
        mode: String,
    },

    /// Block record that does not match the cover-profile format
    #[error("malformed profile record at line {line}: {message}")]
    MalformedProfile {
        /// 1-based line number in the profile file
        line: u64,
        /// What was wrong with the record
        message: String,
    },

    /// Profile parsed cleanly but uses a counting mode the aggregator rejects
    #[error("only coverage profiles in 'atomic' mode are supported, got '{mode}'")]
    UnsupportedMode {
        /// The rejected mode
        mode: Mode,
    },
}

impl GocovError {
    /// Create a malformed-profile error for the given 1-based line
    #[must_use]
    pub fn malformed(line: u64, message: impl Into<String>) -> Self {
        Self::MalformedProfile {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mode_display() {
        let err = GocovError::MissingMode;
        assert!(err.to_string().contains("mode:"));
    }

    #[test]
    fn test_unknown_mode_display() {
        let err = GocovError::UnknownMode {
            mode: "bogus".to_string(),
        };
        assert!(err.to_string().contains("unknown coverage mode"));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_malformed_carries_line_number() {
        let err = GocovError::malformed(42, "missing hit count");
        assert!(err.to_string().contains("line 42"));
        assert!(err.to_string().contains("missing hit count"));
    }

    #[test]
    fn test_unsupported_mode_names_atomic() {
        let err = GocovError::UnsupportedMode { mode: Mode::Count };
        assert!(err.to_string().contains("atomic"));
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GocovError = io_err.into();
        assert!(err.to_string().contains("I/O"));
    }
}

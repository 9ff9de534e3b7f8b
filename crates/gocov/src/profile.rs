//! Go cover-profile parsing.
//!
//! ## Profile format
//!
//! ```text
//! mode: atomic
//! <file>:<startLine>.<startCol>,<endLine>.<endCol> <numStmt> <hitCount>
//! ```
//!
//! One mode line for the whole file, then one record per statement block.
//! Records for the same source file are grouped into a single [`Profile`].

use crate::result::{GocovError, GocovResult};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Coverage counting mode declared by a profile's mode line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Boolean coverage: a block is hit or not
    Set,
    /// Per-block execution counts, no synchronization
    Count,
    /// Per-block execution counts with synchronization-safe increments
    Atomic,
}

impl Mode {
    /// The mode string as it appears in a profile
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Count => "count",
            Self::Atomic => "atomic",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = GocovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Mode values compare case-insensitively, like the Go tooling's
        // strings.EqualFold check.
        if s.eq_ignore_ascii_case("set") {
            Ok(Self::Set)
        } else if s.eq_ignore_ascii_case("count") {
            Ok(Self::Count)
        } else if s.eq_ignore_ascii_case("atomic") {
            Ok(Self::Atomic)
        } else {
            Err(GocovError::UnknownMode {
                mode: s.to_string(),
            })
        }
    }
}

/// A contiguous statement range within a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileBlock {
    /// Line where the block starts
    pub start_line: u32,
    /// Column where the block starts
    pub start_col: u32,
    /// Line where the block ends
    pub end_line: u32,
    /// Column where the block ends
    pub end_col: u32,
    /// Number of statements in the range
    pub num_stmt: u64,
    /// Number of times execution reached the range (0 = never)
    pub count: u64,
}

/// Coverage record for one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Source file path as recorded in the profile
    pub file_name: String,
    /// Counting mode declared by the profile's mode line
    pub mode: Mode,
    /// Statement blocks in input order
    pub blocks: Vec<ProfileBlock>,
}

/// Parse a cover-profile file into one [`Profile`] per source file
///
/// # Errors
///
/// Returns an error if the file cannot be read, the mode line is missing or
/// unknown, or any block record is malformed.
pub fn parse_profiles(path: impl AsRef<Path>) -> GocovResult<Vec<Profile>> {
    let input = std::fs::read_to_string(path)?;
    parse_profiles_from_str(&input)
}

/// Parse cover-profile text into one [`Profile`] per source file
///
/// Profiles are returned ordered by file name; each file's blocks keep
/// their input order. Blank lines are tolerated.
///
/// # Errors
///
/// Returns an error if the mode line is missing or unknown, or any block
/// record is malformed (the error carries the 1-based line number).
pub fn parse_profiles_from_str(input: &str) -> GocovResult<Vec<Profile>> {
    let mut mode: Option<Mode> = None;
    let mut files: BTreeMap<String, Vec<ProfileBlock>> = BTreeMap::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx as u64 + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if mode.is_none() {
            let value = line.strip_prefix("mode:").ok_or(GocovError::MissingMode)?;
            mode = Some(value.trim().parse()?);
            continue;
        }

        let (file, block) =
            parse_block(line).map_err(|message| GocovError::malformed(line_no, message))?;
        files.entry(file).or_default().push(block);
    }

    let mode = mode.ok_or(GocovError::MissingMode)?;
    Ok(files
        .into_iter()
        .map(|(file_name, blocks)| Profile {
            file_name,
            mode,
            blocks,
        })
        .collect())
}

/// Parse one block record into its file name and block data
fn parse_block(line: &str) -> Result<(String, ProfileBlock), String> {
    let (file, rest) = line
        .rsplit_once(':')
        .ok_or("expected '<file>:<range> <stmts> <count>'")?;
    if file.is_empty() {
        return Err("empty file name".to_string());
    }

    let mut fields = rest.split_whitespace();
    let range = fields.next().ok_or("missing block range")?;
    let num_stmt = fields.next().ok_or("missing statement count")?;
    let count = fields.next().ok_or("missing hit count")?;
    if fields.next().is_some() {
        return Err("trailing data after hit count".to_string());
    }

    let (start, end) = range
        .split_once(',')
        .ok_or("block range must be '<start>,<end>'")?;
    let (start_line, start_col) = parse_position(start)?;
    let (end_line, end_col) = parse_position(end)?;
    let num_stmt = num_stmt
        .parse()
        .map_err(|_| format!("invalid statement count '{num_stmt}'"))?;
    let count = count
        .parse()
        .map_err(|_| format!("invalid hit count '{count}'"))?;

    Ok((
        file.to_string(),
        ProfileBlock {
            start_line,
            start_col,
            end_line,
            end_col,
            num_stmt,
            count,
        },
    ))
}

/// Parse a `<line>.<col>` position
fn parse_position(text: &str) -> Result<(u32, u32), String> {
    let (line, col) = text
        .split_once('.')
        .ok_or_else(|| format!("position '{text}' must be '<line>.<col>'"))?;
    let line = line
        .parse()
        .map_err(|_| format!("invalid line number '{line}'"))?;
    let col = col
        .parse()
        .map_err(|_| format!("invalid column '{col}'"))?;
    Ok((line, col))
}

//! Error types for stylesheet loading and parsing.

use draft_common::file::FileError;

/// A diagnosable stylesheet parse failure.
///
/// The tokenizer and parser never guess past malformed structure; they stop
/// at the first unrecoverable defect and report where it is. (Bad *values*
/// inside a well-formed rule are soft failures instead; they warn and are
/// skipped, so one typo can't take down a whole sheet.)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}, column {col}: {message}")]
pub struct ParseError {
    /// 1-based line of the defect.
    pub line: u32,
    /// 1-based column of the defect.
    pub col: u32,
    /// What went wrong.
    pub message: String,
}

impl ParseError {
    /// Build a parse error at a position.
    pub fn new(line: u32, col: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            col,
            message: message.into(),
        }
    }
}

/// Failure to load a stylesheet from a file handle: either the read or the
/// parse went wrong.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be read.
    #[error(transparent)]
    File(#[from] FileError),
    /// The source was read but did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

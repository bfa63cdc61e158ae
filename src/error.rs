//! Error types for CSV parsing.
//!
//! Every failure of a parse call is surfaced through [`Error`]: structural
//! problems (uneven rows), header validation failures, and syntax errors that
//! carry the exact position of the first character the grammar could not
//! consume.
use thiserror::Error;

use crate::cursor::TextPosition;

/// Main error type for parsing and view construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A data row's field count differs from the header's
    #[error("Uneven row width: row {row} has {found} fields, expected {expected}")]
    UnevenRowWidth {
        /// 0-based index of the first offending row
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Expected columns absent from the header
    #[error("Missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Header columns beyond the expected set
    #[error("Additional columns: {}", .0.join(", "))]
    AdditionalColumns(Vec<String>),

    /// Input remains after the document body was consumed
    #[error("Syntax error at {0}")]
    Syntax(TextPosition),

    /// Dialect rules that cannot work together
    #[error("Invalid grammar: {0}")]
    InvalidGrammar(String),
}

impl Error {
    /// Position of a syntax error, if this is one.
    pub fn position(&self) -> Option<TextPosition> {
        match self {
            Error::Syntax(position) => Some(*position),
            _ => None,
        }
    }
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

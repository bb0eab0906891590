use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong between opening the data file and holding a
/// complete [`Dataset`](super::model::Dataset). Both variants are fatal.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read data file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is 1-based.
    #[error("line {line}: {kind} (content: {content:?})")]
    Parse {
        line: usize,
        content: String,
        #[source]
        kind: ParseErrorKind,
    },
}

/// Why a single line failed to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected at least 2 columns, found {found}")]
    MissingColumn { found: usize },

    #[error("column {column} is not an integer: {token:?}")]
    InvalidInteger {
        column: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl LoadError {
    /// 1-based number of the offending line, if this is a parse failure.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Parse { line, .. } => Some(*line),
            LoadError::Io { .. } => None,
        }
    }
}

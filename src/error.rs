//! Error types
//!
//! Only fatal conditions live here. Absent words and malformed lexicon lines
//! are ordinary outcomes and are reported through `Option` and `LoadReport`.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a usable lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot read lexicon {name} from {}: {source}", path.display())]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon {name} contains no valid words")]
    Empty { name: String },

    #[error("invalid lexicon name: {0:?}")]
    InvalidName(String),
}

/// A query rejected before it reaches the explorer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("You must enter a word of {min} or more letters.")]
    TooShort { word: String, min: usize },

    #[error("'{0}' contains characters other than letters")]
    InvalidCharacters(String),
}

/// Failure of a single command against a loaded lexicon
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("cannot serialise steal tree: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LexiconResult<T> = Result<T, LexiconError>;

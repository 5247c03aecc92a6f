//! Exploration settings shared by the library and the CLI

use tracing::warn;

use crate::core::LetterBag;
use crate::error::QueryError;

/// Shortest query word accepted
pub const MIN_QUERY_LEN: usize = 4;

/// Lexicons shipped alongside the tool
pub const KNOWN_LEXICONS: &[&str] = &["CSW19", "NWL18", "LONG"];

/// Lexicon used when none is named
pub const DEFAULT_LEXICON: &str = "CSW19";

/// Which trie nodes count as steals of a base word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Only descendants of the base word's own alphagram node, i.e. steals
    /// whose added letters all sort after the base's last letter
    #[default]
    Descendants,
    /// Every alphagram that contains the base multiset
    Supersets,
}

impl SearchMode {
    /// Parse a CLI name; `None` if it names no mode
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "descendants" | "descendant" => Some(Self::Descendants),
            "supersets" | "superset" | "all" => Some(Self::Supersets),
            _ => None,
        }
    }

    /// Parse a CLI name, warning and falling back to the default
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!(name, "unknown search mode, using descendants");
            Self::default()
        })
    }
}

/// How blank tiles take part in draw probabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankMode {
    /// Blanks sit in the pool but never stand in for a letter
    #[default]
    Inert,
    /// Blanks may substitute for any letter the pool is short of
    Wildcard,
}

impl BlankMode {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "inert" => Some(Self::Inert),
            "wildcard" | "wild" => Some(Self::Wildcard),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!(name, "unknown blank mode, blanks stay inert");
            Self::default()
        })
    }
}

/// Settings for building one steal tree
#[derive(Debug, Clone, Default)]
pub struct ExploreConfig {
    pub search: SearchMode,
    pub blanks: BlankMode,
    /// Deepest level to expand; `None` expands until no steals remain
    pub max_depth: Option<usize>,
    /// Tiles known to be out of the bag
    pub seen: LetterBag,
}

impl ExploreConfig {
    #[must_use]
    pub fn with_search(mut self, search: SearchMode) -> Self {
        self.search = search;
        self
    }

    #[must_use]
    pub fn with_blanks(mut self, blanks: BlankMode) -> Self {
        self.blanks = blanks;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_seen(mut self, seen: LetterBag) -> Self {
        self.seen = seen;
        self
    }
}

/// Normalise and validate a query word
///
/// # Errors
/// Returns `QueryError::InvalidCharacters` for anything but ASCII letters and
/// `QueryError::TooShort` below [`MIN_QUERY_LEN`].
pub fn validate_query(word: &str) -> Result<String, QueryError> {
    let word = word.trim().to_uppercase();
    if !word.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(QueryError::InvalidCharacters(word));
    }
    if word.len() < MIN_QUERY_LEN {
        return Err(QueryError::TooShort {
            word,
            min: MIN_QUERY_LEN,
        });
    }
    Ok(word)
}

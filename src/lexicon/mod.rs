//! Lexicons indexed by alphagram
//!
//! Provides the alphagram trie, file loading, and a per-name cache so each
//! word list is parsed once per session.

mod cache;
pub mod loader;
mod trie;

pub use cache::LexiconCache;
pub use loader::{DirectorySource, LexiconSource, LoadReport};
pub use trie::{InsertOutcome, LexiconIndex, Steal};

/// Shown wherever a definition is missing
pub const DEFINITION_NOT_AVAILABLE: &str = "Definition not available";

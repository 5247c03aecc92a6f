//! Steal Explorer
//!
//! Finds every word reachable from a starting word by adding letters
//! ("steals"), using an alphagram trie over a lexicon, and weights each steal
//! by how likely its extra letters are to be drawn from the unseen tiles.
//!
//! # Quick Start
//!
//! ```rust
//! use steal_explorer::config::ExploreConfig;
//! use steal_explorer::lexicon::LexiconIndex;
//! use steal_explorer::tree::{StealTree, generate_word_list};
//!
//! let mut index = LexiconIndex::new("DEMO");
//! for word in ["CARE", "RACE", "CARTE"] {
//!     index.insert(word, "");
//! }
//!
//! let tree = StealTree::build("CARE", &index, &ExploreConfig::default()).unwrap();
//! assert_eq!(tree.root().children()[0].word(), "CARTE");
//! assert_eq!(generate_word_list("", tree.root()), vec!["  CARTE"]);
//! ```

// Letter multisets
pub mod core;

// Exploration settings
pub mod config;

// Error types
pub mod error;

// Alphagram trie and lexicon loading
pub mod lexicon;

// Tile-draw probabilities
pub mod probability;

// Steal tree construction and reports
pub mod tree;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

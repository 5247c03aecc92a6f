//! Explore command
//!
//! Builds the full steal tree for one query word.

use std::collections::BTreeMap;

use crate::config::{ExploreConfig, validate_query};
use crate::error::QueryError;
use crate::lexicon::LexiconIndex;
use crate::tree::{StealTree, TreeStats, length_histogram, tree_stats};

/// A built tree plus the summaries printed alongside it
#[derive(Debug)]
pub struct ExploreResult<'a> {
    pub tree: StealTree<'a>,
    pub definition: &'a str,
    pub histogram: BTreeMap<usize, usize>,
    pub stats: TreeStats,
}

/// Explore every steal reachable from `word`
///
/// # Errors
///
/// Returns an error if the word is shorter than four letters or contains
/// anything but letters.
pub fn explore_word<'a>(
    word: &str,
    index: &'a LexiconIndex,
    config: &ExploreConfig,
) -> Result<ExploreResult<'a>, QueryError> {
    let word = validate_query(word)?;
    let tree = StealTree::build(&word, index, config)
        .map_err(|_| QueryError::InvalidCharacters(word.clone()))?;

    let definition = tree.definition(tree.root_word());
    let histogram = length_histogram(tree.root());
    let stats = tree_stats(tree.root());

    Ok(ExploreResult {
        tree,
        definition,
        histogram,
        stats,
    })
}

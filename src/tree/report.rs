//! Flattened views of a steal tree for export and summaries

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::builder::StealTree;
use super::node::TreeNode;

const INDENT: &str = "  ";

/// Every descendant of `node`, pre-order, one per line
///
/// Each line is `prefix` plus two spaces per level below `node`, then the
/// word. `node` itself is not listed.
#[must_use]
pub fn generate_word_list(prefix: &str, node: &TreeNode) -> Vec<String> {
    let mut lines = Vec::new();
    push_words(prefix, node, &mut lines);
    lines
}

fn push_words(prefix: &str, node: &TreeNode, lines: &mut Vec<String>) {
    let indent = format!("{prefix}{INDENT}");
    for child in node.children() {
        lines.push(format!("{indent}{}", child.word()));
        push_words(&indent, child, lines);
    }
}

/// Word length to number of descendants of `node` with that length
#[must_use]
pub fn length_histogram(node: &TreeNode) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    node.walk(|depth, visited| {
        if depth > 0 {
            *counts.entry(visited.word().len()).or_insert(0) += 1;
        }
    });
    counts
}

/// Summary figures for a tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Descendants of the root, duplicates included
    pub nodes: usize,
    /// Different words among those descendants
    pub distinct_words: usize,
    pub max_depth: usize,
    pub longest_word: Option<String>,
}

#[must_use]
pub fn tree_stats(node: &TreeNode) -> TreeStats {
    let mut stats = TreeStats::default();
    let mut words = FxHashSet::default();
    node.walk(|depth, visited| {
        if depth == 0 {
            return;
        }
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);
        words.insert(visited.word());
        let longer = stats
            .longest_word
            .as_ref()
            .is_none_or(|longest| visited.word().len() > longest.len());
        if longer {
            stats.longest_word = Some(visited.word().to_string());
        }
    });
    stats.distinct_words = words.len();
    stats
}

/// `{name, children}` tree consumed by the radial visualisation
#[derive(Debug, Serialize)]
pub struct FlareNode<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FlareNode<'a>>,
}

impl<'a> FlareNode<'a> {
    #[must_use]
    pub fn from_node(node: &'a TreeNode) -> Self {
        Self {
            name: node.word(),
            children: node.children().iter().map(Self::from_node).collect(),
        }
    }
}

/// The whole tree as visualisation JSON
///
/// # Errors
/// Returns the `serde_json` error if serialisation fails.
pub fn to_json_tree(tree: &StealTree<'_>) -> serde_json::Result<String> {
    serde_json::to_string(&FlareNode::from_node(tree.root()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExploreConfig;
    use crate::lexicon::LexiconIndex;

    fn index_of(words: &[&str]) -> LexiconIndex {
        let mut index = LexiconIndex::new("TEST");
        for word in words {
            index.insert(word, "");
        }
        index
    }

    #[test]
    fn care_word_list_is_indented_carte() {
        let index = index_of(&["CARE", "RACE", "ACRE", "CARTE"]);
        let tree = StealTree::build("CARE", &index, &ExploreConfig::default()).unwrap();
        assert_eq!(generate_word_list("", tree.root()), vec!["  CARTE"]);
    }

    #[test]
    fn word_list_indents_by_depth_in_pre_order() {
        let index = index_of(&["ACE", "CARE", "CARTE", "ACES"]);
        let tree = StealTree::build("ACE", &index, &ExploreConfig::default()).unwrap();
        assert_eq!(
            generate_word_list("", tree.root()),
            vec!["  CARE", "    CARTE", "  CARTE", "  ACES"]
        );
    }

    #[test]
    fn word_list_of_leaf_is_empty() {
        let index = index_of(&["CARE"]);
        let tree = StealTree::build("CARE", &index, &ExploreConfig::default()).unwrap();
        assert!(generate_word_list("", tree.root()).is_empty());
    }

    #[test]
    fn word_list_is_restartable() {
        let index = index_of(&["ACE", "CARE", "CARTE"]);
        let tree = StealTree::build("ACE", &index, &ExploreConfig::default()).unwrap();
        assert_eq!(
            generate_word_list("", tree.root()),
            generate_word_list("", tree.root())
        );
    }

    #[test]
    fn histogram_counts_descendants_by_length() {
        let index = index_of(&["ACE", "CARE", "CARTE", "ACES"]);
        let tree = StealTree::build("ACE", &index, &ExploreConfig::default()).unwrap();
        let histogram = length_histogram(tree.root());
        assert_eq!(histogram, BTreeMap::from([(4, 2), (5, 2)]));
    }

    #[test]
    fn stats_dedupe_words_but_count_nodes() {
        let index = index_of(&["ACE", "CARE", "CARTE", "ACES"]);
        let tree = StealTree::build("ACE", &index, &ExploreConfig::default()).unwrap();
        let stats = tree_stats(tree.root());
        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.distinct_words, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.longest_word.as_deref(), Some("CARTE"));
    }

    #[test]
    fn json_tree_nests_children_and_omits_empty_lists() {
        let index = index_of(&["ACE", "CARE", "CARTE"]);
        let tree = StealTree::build("ACE", &index, &ExploreConfig::default()).unwrap();
        let json = to_json_tree(&tree).unwrap();
        assert_eq!(
            json,
            r#"{"name":"ACE","children":[{"name":"CARE","children":[{"name":"CARTE"}]},{"name":"CARTE"}]}"#
        );
    }
}

//! Alphagram trie
//!
//! Every word is filed under its alphagram: the path from the root spells the
//! word's letters in ascending order, so the node reached by letters `L` holds
//! exactly the words whose multiset is `L`. Children are kept in a `BTreeMap`
//! so traversal order, and therefore discovery order, is always ascending.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap;

use crate::config::SearchMode;
use crate::core::LetterBag;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<u8, NodeId>,
    anagrams: BTreeSet<String>,
    definitions: FxHashMap<String, String>,
}

/// What happened to a single `insert`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The word was already indexed; its first definition is kept
    Duplicate,
    /// Empty or containing a non-letter; nothing was stored
    Malformed,
}

/// A word reachable from a base multiset, with the letters that were added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Steal<'a> {
    pub word: &'a str,
    pub added: LetterBag,
}

/// Lexicon indexed by alphagram
///
/// # Examples
/// ```
/// use steal_explorer::config::SearchMode;
/// use steal_explorer::core::LetterBag;
/// use steal_explorer::lexicon::LexiconIndex;
///
/// let mut index = LexiconIndex::new("DEMO");
/// index.insert("CARE", "to be concerned");
/// index.insert("CARTE", "a menu");
///
/// assert!(index.contains("CARE"));
/// assert_eq!(index.definition("CARTE"), Some("a menu"));
///
/// let base = LetterBag::from_word("CARE").unwrap();
/// let steals = index.find_steals(&base, SearchMode::Descendants);
/// assert_eq!(steals[0].word, "CARTE");
/// assert_eq!(steals[0].added.to_string(), "T");
/// ```
#[derive(Debug)]
pub struct LexiconIndex {
    name: String,
    nodes: Vec<TrieNode>,
    word_count: usize,
    max_word_len: usize,
}

impl LexiconIndex {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: vec![TrieNode::default()],
            word_count: 0,
            max_word_len: 0,
        }
    }

    /// Name of the word list this index was built from
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct words indexed
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of trie nodes, prefixes included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub const fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// File `word` under its alphagram, creating missing nodes on the way
    pub fn insert(&mut self, word: &str, definition: &str) -> InsertOutcome {
        let word = word.to_uppercase();
        let Ok(letters) = LetterBag::from_word(&word) else {
            return InsertOutcome::Malformed;
        };
        if letters.is_empty() {
            return InsertOutcome::Malformed;
        }

        let mut node_id = ROOT;
        for letter in letters.letters() {
            let next_id = if let Some(&id) = self.nodes[node_id].children.get(&letter) {
                id
            } else {
                let id = self.nodes.len();
                self.nodes.push(TrieNode::default());
                self.nodes[node_id].children.insert(letter, id);
                id
            };
            node_id = next_id;
        }

        let node = &mut self.nodes[node_id];
        if !node.anagrams.insert(word.clone()) {
            return InsertOutcome::Duplicate;
        }
        node.definitions.insert(word, definition.to_string());
        self.word_count += 1;
        self.max_word_len = self.max_word_len.max(letters.len());
        InsertOutcome::Inserted
    }

    /// Whether `word` is in the lexicon (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_uppercase();
        self.node_for_word(&word)
            .is_some_and(|node| node.anagrams.contains(&word))
    }

    /// Definition text for `word`, or `None` if it is not indexed
    #[must_use]
    pub fn definition(&self, word: &str) -> Option<&str> {
        let word = word.to_uppercase();
        self.node_for_word(&word)
            .and_then(|node| node.definitions.get(&word))
            .map(String::as_str)
    }

    /// All words with exactly these letters, ascending
    #[must_use]
    pub fn anagrams(&self, letters: &LetterBag) -> Vec<&str> {
        self.locate(letters)
            .map(|id| self.nodes[id].anagrams.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Words reachable from `base` by adding one or more letters
    ///
    /// Nodes are visited depth-first in ascending letter order and every
    /// non-empty node below the starting point is reported, whether or not a
    /// shorter word lies on the same path. Each alphagram is visited at most
    /// once, so a word appears at most once in the result.
    #[must_use]
    pub fn find_steals(&self, base: &LetterBag, mode: SearchMode) -> Vec<Steal<'_>> {
        let required: Vec<u8> = base.letters().collect();
        let mut steals = Vec::new();
        match mode {
            SearchMode::Descendants => {
                if let Some(start) = self.locate(base) {
                    self.collect_steals(
                        start,
                        &required,
                        required.len(),
                        LetterBag::new(),
                        &mut steals,
                    );
                }
            }
            SearchMode::Supersets => {
                self.collect_steals(ROOT, &required, 0, LetterBag::new(), &mut steals);
            }
        }
        steals
    }

    /// Every indexed word, in alphagram order
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            words.extend(node.anagrams.iter().map(String::as_str));
            // Reverse so the smallest letter is popped first
            stack.extend(node.children.values().rev());
        }
        words
    }

    fn node_for_word(&self, word: &str) -> Option<&TrieNode> {
        let letters = LetterBag::from_word(word).ok()?;
        self.locate(&letters).map(|id| &self.nodes[id])
    }

    fn locate(&self, letters: &LetterBag) -> Option<NodeId> {
        letters.letters().try_fold(ROOT, |id, letter| {
            self.nodes[id].children.get(&letter).copied()
        })
    }

    /// `required[matched..]` are base letters still to be placed; a path letter
    /// equal to the next required letter consumes it, a smaller one is added,
    /// and a larger one can never lead to a superset.
    fn collect_steals<'a>(
        &'a self,
        id: NodeId,
        required: &[u8],
        matched: usize,
        added: LetterBag,
        out: &mut Vec<Steal<'a>>,
    ) {
        let node = &self.nodes[id];
        if matched == required.len() && !added.is_empty() {
            out.extend(node.anagrams.iter().map(|word| Steal {
                word: word.as_str(),
                added,
            }));
        }

        for (&letter, &child) in &node.children {
            match required.get(matched) {
                Some(&next) if letter > next => break,
                Some(&next) if letter == next => {
                    self.collect_steals(child, required, matched + 1, added, out);
                }
                _ => {
                    let mut grown = added;
                    grown.push(letter);
                    self.collect_steals(child, required, matched, grown, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(s: &str) -> LetterBag {
        LetterBag::from_word(s).unwrap()
    }

    fn index_of(words: &[&str]) -> LexiconIndex {
        let mut index = LexiconIndex::new("TEST");
        for word in words {
            index.insert(word, &format!("def of {word}"));
        }
        index
    }

    #[test]
    fn inserted_words_round_trip() {
        let index = index_of(&["CARE", "RACE", "STEAL", "TEASEL"]);
        for word in ["CARE", "RACE", "STEAL", "TEASEL"] {
            assert!(index.contains(word), "{word} missing");
            assert_eq!(index.definition(word), Some(format!("def of {word}").as_str()));
        }
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn true_anagrams_share_one_node() {
        let index = index_of(&["CARE", "RACE", "ACRE"]);
        assert_eq!(index.anagrams(&bag("ACER")), vec!["ACRE", "CARE", "RACE"]);
        // root + A + AC + ACE + ACER
        assert_eq!(index.node_count(), 5);
    }

    #[test]
    fn contains_is_false_for_prefix_nodes_and_unknown_words() {
        let index = index_of(&["CARTE"]);
        assert!(!index.contains("CARE")); // ACER exists only as a prefix
        assert!(!index.contains("TRACE")); // same node, different word
        assert!(!index.contains("ZZZZ"));
        assert!(!index.contains("CA1E"));
    }

    #[test]
    fn definition_is_none_when_absent() {
        let index = index_of(&["CARE"]);
        assert_eq!(index.definition("RACE"), None);
        assert_eq!(index.definition("QUIZ"), None);
    }

    #[test]
    fn lookups_fold_case() {
        let index = index_of(&["care"]);
        assert!(index.contains("CARE"));
        assert!(index.contains("care"));
        assert!(index.definition("Care").is_some());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let mut index = LexiconIndex::new("TEST");
        assert_eq!(index.insert("CAR-E", "x"), InsertOutcome::Malformed);
        assert_eq!(index.insert("", "x"), InsertOutcome::Malformed);
        assert_eq!(index.insert("CARE", "x"), InsertOutcome::Inserted);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn duplicates_keep_first_definition() {
        let mut index = LexiconIndex::new("TEST");
        index.insert("CARE", "first");
        assert_eq!(index.insert("CARE", "second"), InsertOutcome::Duplicate);
        assert_eq!(index.definition("CARE"), Some("first"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn find_steals_emits_descendants_in_letter_order() {
        let index = index_of(&["CARE", "RACE", "CARTE", "CATERS", "CARETS", "SCARE"]);
        let steals = index.find_steals(&bag("CARE"), SearchMode::Descendants);
        let found: Vec<(&str, String)> = steals
            .iter()
            .map(|s| (s.word, s.added.to_string()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("SCARE", "S".to_string()),
                ("CARETS", "ST".to_string()),
                ("CATERS", "ST".to_string()),
                ("CARTE", "T".to_string()),
            ]
        );
    }

    #[test]
    fn find_steals_excludes_the_base_node_itself() {
        let index = index_of(&["CARE", "RACE", "ACRE"]);
        assert!(index.find_steals(&bag("CARE"), SearchMode::Descendants).is_empty());
    }

    #[test]
    fn find_steals_reports_words_past_shorter_hits() {
        // CARE sits on the path from ACE to CARTE
        let index = index_of(&["ACE", "CARE", "CARTE"]);
        let words: Vec<&str> = index
            .find_steals(&bag("ACE"), SearchMode::Descendants)
            .into_iter()
            .map(|s| s.word)
            .collect();
        assert_eq!(words, vec!["CARE", "CARTE"]);
    }

    #[test]
    fn find_steals_without_base_node_is_empty() {
        let index = index_of(&["CARE"]);
        assert!(index.find_steals(&bag("QUIZ"), SearchMode::Descendants).is_empty());
    }

    #[test]
    fn descendants_miss_letters_sorting_before_the_base() {
        // CARED = ACDER, which does not start with ACER
        let index = index_of(&["CARE", "CARED"]);
        assert!(index.find_steals(&bag("CARE"), SearchMode::Descendants).is_empty());

        let steals = index.find_steals(&bag("CARE"), SearchMode::Supersets);
        assert_eq!(steals.len(), 1);
        assert_eq!(steals[0].word, "CARED");
        assert_eq!(steals[0].added, bag("D"));
    }

    #[test]
    fn supersets_handle_repeated_letters() {
        let index = index_of(&["TEE", "TEETH", "THEE", "ETH", "TETH"]);
        let mut steals = index.find_steals(&bag("TEE"), SearchMode::Supersets);
        steals.sort_by_key(|s| s.word);
        let found: Vec<(&str, LetterBag)> = steals.iter().map(|s| (s.word, s.added)).collect();
        assert_eq!(found, vec![("TEETH", bag("TH")), ("THEE", bag("H"))]);
    }

    #[test]
    fn supersets_include_every_descendant() {
        let index = index_of(&["CARE", "CARTE", "SCARE", "CARED", "ACRED", "SCARED"]);
        let descendants = index.find_steals(&bag("CARE"), SearchMode::Descendants);
        let supersets = index.find_steals(&bag("CARE"), SearchMode::Supersets);
        for steal in &descendants {
            assert!(supersets.contains(steal));
        }
        assert_eq!(supersets.len(), 5);
    }

    #[test]
    fn added_letters_rebuild_the_word() {
        let index = index_of(&["STEAL", "STEALS", "TEASEL", "STAPLE", "PALEST", "PASTEL"]);
        let base = bag("STEAL");
        for steal in index.find_steals(&base, SearchMode::Supersets) {
            assert_eq!(base.union(&steal.added), bag(steal.word));
        }
    }

    #[test]
    fn words_lists_every_entry_once() {
        let index = index_of(&["CARE", "RACE", "CARTE", "ZOO"]);
        let mut words = index.words();
        assert_eq!(words.len(), 4);
        words.sort_unstable();
        assert_eq!(words, vec!["CARE", "CARTE", "RACE", "ZOO"]);
    }

    #[test]
    fn max_word_len_tracks_longest_insert() {
        let index = index_of(&["CARE", "CARTES"]);
        assert_eq!(index.max_word_len(), 6);
    }
}

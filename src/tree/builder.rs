//! Steal tree construction
//!
//! Starting from a root word, every steal found in the lexicon becomes a
//! child, and each child is expanded the same way until no steals remain.
//! At each expansion the parent's probability is split among its children in
//! proportion to how likely each child's added letters are to be drawn.

use tracing::debug;

use super::node::TreeNode;
use crate::config::{ExploreConfig, SearchMode};
use crate::core::{LetterBag, LetterError};
use crate::lexicon::{DEFINITION_NOT_AVAILABLE, LexiconIndex};
use crate::probability::{ProbabilityModel, TilePool};

/// Probability assigned to the root of every tree
pub const ROOT_PROBABILITY: f64 = 100.0;

/// All words reachable from a root word, with draw probabilities
#[derive(Debug)]
pub struct StealTree<'a> {
    root_word: String,
    root: TreeNode,
    index: &'a LexiconIndex,
}

impl<'a> StealTree<'a> {
    /// Build the complete tree for `root_word`
    ///
    /// The root need not be a dictionary word; its letters alone drive
    /// discovery.
    ///
    /// # Errors
    /// Returns `LetterError` if `root_word` contains anything but letters.
    pub fn build(
        root_word: &str,
        index: &'a LexiconIndex,
        config: &ExploreConfig,
    ) -> Result<Self, LetterError> {
        let root_word = root_word.trim().to_uppercase();
        let root_letters = LetterBag::from_word(&root_word)?;
        let model = ProbabilityModel::new(
            TilePool::standard().without_seen(&config.seen),
            config.blanks,
        );

        let expander = Expander {
            index,
            model: &model,
            search: config.search,
            max_depth: config.max_depth,
            root_letters,
        };

        let mut root = TreeNode::new(
            root_word.clone(),
            root_letters,
            LetterBag::new(),
            LetterBag::new(),
            ROOT_PROBABILITY,
        );
        expander.expand(&mut root, 0);

        debug!(
            root = %root_word,
            lexicon = index.name(),
            children = root.children().len(),
            "built steal tree"
        );

        Ok(Self {
            root_word,
            root,
            index,
        })
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    #[must_use]
    pub const fn root(&self) -> &TreeNode {
        &self.root
    }

    /// The lexicon this tree was built against
    #[must_use]
    pub const fn index(&self) -> &'a LexiconIndex {
        self.index
    }

    /// Whether the root itself is a dictionary word
    #[must_use]
    pub fn root_is_word(&self) -> bool {
        self.index.contains(&self.root_word)
    }

    /// Root word as shown to the user: lowercase when it is not a word
    #[must_use]
    pub fn display_root(&self) -> String {
        if self.root_is_word() {
            self.root_word.clone()
        } else {
            self.root_word.to_lowercase()
        }
    }

    /// Definition of any word, or the "not available" text
    #[must_use]
    pub fn definition(&self, word: &str) -> &'a str {
        self.index.definition(word).unwrap_or(DEFINITION_NOT_AVAILABLE)
    }
}

/// Read-only state shared by every expansion step of one build
struct Expander<'a, 'm> {
    index: &'a LexiconIndex,
    model: &'m ProbabilityModel,
    search: SearchMode,
    max_depth: Option<usize>,
    root_letters: LetterBag,
}

impl Expander<'_, '_> {
    fn expand(&self, node: &mut TreeNode, depth: usize) {
        if self.max_depth.is_some_and(|max| depth >= max) {
            return;
        }

        let parent_letters = *node.letters();
        let parent_long = *node.long_steal();
        let parent_probability = node.probability();

        let candidates: Vec<Candidate<'_>> = self
            .index
            .find_steals(&parent_letters, self.search)
            .into_iter()
            .map(|steal| {
                let letters = parent_letters.union(&steal.added);
                let long_steal = letters.difference(&self.root_letters);
                let short_steal = long_steal.difference(&parent_long);
                Candidate {
                    word: steal.word,
                    letters,
                    long_steal,
                    short_steal,
                    weight: self.model.probability(&short_steal),
                }
            })
            .collect();

        if candidates.is_empty() {
            return;
        }

        let norm: f64 = candidates.iter().map(|c| c.weight).sum();
        let children = candidates
            .into_iter()
            .map(|candidate| {
                // Every steal impossible to draw: nothing to share out
                let probability = if norm > 0.0 {
                    parent_probability * candidate.weight / norm
                } else {
                    0.0
                };
                let mut child = TreeNode::new(
                    candidate.word,
                    candidate.letters,
                    candidate.long_steal,
                    candidate.short_steal,
                    probability,
                );
                self.expand(&mut child, depth + 1);
                child
            })
            .collect();
        node.set_children(children);
    }
}

struct Candidate<'w> {
    word: &'w str,
    letters: LetterBag,
    long_steal: LetterBag,
    short_steal: LetterBag,
    weight: f64,
}

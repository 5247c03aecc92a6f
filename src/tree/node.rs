//! Steal tree nodes

use crate::core::LetterBag;
use crate::probability::round;

/// One discovered word in a steal tree
///
/// Parents own their children; the structure is a plain tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    word: String,
    letters: LetterBag,
    children: Vec<TreeNode>,
    long_steal: LetterBag,
    short_steal: LetterBag,
    probability: f64,
}

impl TreeNode {
    pub(crate) fn new(
        word: impl Into<String>,
        letters: LetterBag,
        long_steal: LetterBag,
        short_steal: LetterBag,
        probability: f64,
    ) -> Self {
        Self {
            word: word.into(),
            letters,
            children: Vec::new(),
            long_steal,
            short_steal,
            probability,
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Letter multiset of `word`
    #[must_use]
    pub const fn letters(&self) -> &LetterBag {
        &self.letters
    }

    /// Children in discovery order
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub(crate) fn set_children(&mut self, children: Vec<TreeNode>) {
        self.children = children;
    }

    /// Letters added since the root of the exploration
    #[must_use]
    pub const fn long_steal(&self) -> &LetterBag {
        &self.long_steal
    }

    /// Letters added since the parent
    #[must_use]
    pub const fn short_steal(&self) -> &LetterBag {
        &self.short_steal
    }

    /// Share of the root's 100% that flows to this node
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// `"<longSteal>   <p>%"` with one decimal
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!("{}   {:.1}%", self.long_steal, round(self.probability, 1))
    }

    /// Visit this node and every descendant in pre-order with its depth
    /// relative to `self`
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(usize, &'a TreeNode),
    {
        self.walk_from(0, &mut visit);
    }

    fn walk_from<'a, F>(&'a self, depth: usize, visit: &mut F)
    where
        F: FnMut(usize, &'a TreeNode),
    {
        visit(depth, self);
        for child in &self.children {
            child.walk_from(depth + 1, visit);
        }
    }
}

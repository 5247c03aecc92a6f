//! Steal trees
//!
//! Recursive discovery of every word reachable from a root word by adding
//! letters, with the root's 100% split down the tree by draw probability.

mod builder;
mod node;
mod report;

pub use builder::{ROOT_PROBABILITY, StealTree};
pub use node::TreeNode;
pub use report::{
    FlareNode, TreeStats, generate_word_list, length_histogram, to_json_tree, tree_stats,
};

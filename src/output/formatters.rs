//! Formatting utilities for terminal output

use crate::tree::TreeNode;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a 0-100 percentage
#[must_use]
pub fn probability_bar(probability: f64, width: usize) -> String {
    create_progress_bar(probability, 100.0, width)
}

/// Likelihood band used to colour a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Likelihood {
    High,
    Medium,
    Low,
    Impossible,
}

impl Likelihood {
    #[must_use]
    pub fn of(probability: f64) -> Self {
        if probability >= 10.0 {
            Self::High
        } else if probability >= 1.0 {
            Self::Medium
        } else if probability > 0.0 {
            Self::Low
        } else {
            Self::Impossible
        }
    }
}

/// `"    CARTES  ST  12.3%"` style line for one node at `depth`
#[must_use]
pub fn steal_line(depth: usize, node: &TreeNode) -> String {
    format!(
        "{}{:<width$}  +{:<6} {:>5.1}%",
        "  ".repeat(depth),
        node.word(),
        node.long_steal().to_string(),
        node.probability(),
        width = 15_usize.saturating_sub(depth * 2).max(node.word().len()),
    )
}

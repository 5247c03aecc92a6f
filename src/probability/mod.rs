//! Tile-draw probabilities
//!
//! Hypergeometric scoring of steal letters against the unseen tile pool.

mod calculator;
pub mod simulate;
mod tiles;

pub use calculator::{ProbabilityModel, binomial, round};
pub use tiles::{STANDARD_BLANKS, STANDARD_DISTRIBUTION, TilePool};

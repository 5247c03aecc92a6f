//! Command implementations

pub mod batch;
pub mod define;
pub mod explore;
pub mod export;
pub mod random;
pub mod simulate;

pub use batch::{BatchCounts, BatchEntry, BatchSummary, parse_word_list, run_batch};
pub use define::{DefineResult, define_word};
pub use explore::{ExploreResult, explore_word};
pub use export::{ExportFormat, export_word, render_tree};
pub use random::pick_random_word;
pub use simulate::{SimulationResult, simulate_draw};

//! Monte-Carlo check of a draw probability

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ExploreConfig;
use crate::core::LetterBag;
use crate::error::QueryError;
use crate::probability::{ProbabilityModel, TilePool, simulate};

/// Analytic and simulated chance of drawing one letter multiset
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub letters: LetterBag,
    pub trials: usize,
    pub analytic: f64,
    pub estimate: f64,
}

impl SimulationResult {
    /// Absolute gap between the two percentages
    #[must_use]
    pub fn difference(&self) -> f64 {
        (self.analytic - self.estimate).abs()
    }
}

/// Draw `trials` random hands of `letters.len()` tiles from the unseen pool
///
/// A fixed `seed` makes the run reproducible.
///
/// # Errors
///
/// Returns an error if `letters` contains anything but letters.
pub fn simulate_draw(
    letters: &str,
    config: &ExploreConfig,
    trials: usize,
    seed: Option<u64>,
) -> Result<SimulationResult, QueryError> {
    let bag = LetterBag::from_word(letters.trim())
        .map_err(|_| QueryError::InvalidCharacters(letters.trim().to_uppercase()))?;
    let model = ProbabilityModel::new(TilePool::standard().without_seen(&config.seen), config.blanks);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Ok(SimulationResult {
        analytic: model.probability(&bag),
        estimate: simulate::estimate(&model, &bag, trials, &mut rng),
        letters: bag,
        trials,
    })
}

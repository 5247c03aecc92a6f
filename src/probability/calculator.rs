//! Draw probability calculation
//!
//! Scores a letter multiset by the chance of drawing exactly that hand from
//! the unseen pool (multivariate hypergeometric mass).

use crate::config::BlankMode;
use crate::core::LetterBag;

use super::tiles::TilePool;

/// Probability of drawing a given hand from a tile pool
///
/// # Examples
/// ```
/// use steal_explorer::core::LetterBag;
/// use steal_explorer::probability::ProbabilityModel;
///
/// let model = ProbabilityModel::standard();
/// let t = LetterBag::from_word("T").unwrap();
/// assert!((model.probability(&t) - 6.0).abs() < 1e-9); // 6 Ts in 100 tiles
/// assert_eq!(model.probability(&LetterBag::new()), 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProbabilityModel {
    pool: TilePool,
    blanks: BlankMode,
}

impl ProbabilityModel {
    #[must_use]
    pub const fn new(pool: TilePool, blanks: BlankMode) -> Self {
        Self { pool, blanks }
    }

    /// Standard bag, blanks inert
    #[must_use]
    pub fn standard() -> Self {
        Self::new(TilePool::standard(), BlankMode::Inert)
    }

    #[must_use]
    pub const fn pool(&self) -> &TilePool {
        &self.pool
    }

    #[must_use]
    pub const fn blank_mode(&self) -> BlankMode {
        self.blanks
    }

    /// Percentage chance (0-100) that a draw of `letters.len()` tiles is
    /// exactly `letters`
    ///
    /// The empty hand is certain. With inert blanks, asking for more of a
    /// letter than the pool holds gives 0.
    #[must_use]
    pub fn probability(&self, letters: &LetterBag) -> f64 {
        let k = letters.len();
        if k == 0 {
            return 100.0;
        }
        let n = self.pool.size();
        if k > n {
            return 0.0;
        }

        let favourable = match self.blanks {
            BlankMode::Inert => letters
                .distinct()
                .map(|(letter, count)| binomial(self.pool.available(letter), count))
                .product::<f64>(),
            BlankMode::Wildcard => self.wildcard_hands(letters),
        };

        (100.0 * favourable / binomial(n, k)).clamp(0.0, 100.0)
    }

    /// Hands whose real tiles plus blanks spell `letters`
    ///
    /// `by_blanks[b]` counts the ways to pick the real tiles when `b` blanks
    /// fill the gaps; each is then paired with `C(blanks, b)` blank choices.
    fn wildcard_hands(&self, letters: &LetterBag) -> f64 {
        let max_blanks = self.pool.blanks().min(letters.len());
        let mut by_blanks = vec![0.0_f64; max_blanks + 1];
        by_blanks[0] = 1.0;

        for (letter, count) in letters.distinct() {
            let available = self.pool.available(letter);
            let mut next = vec![0.0_f64; max_blanks + 1];
            for (used, &ways) in by_blanks.iter().enumerate() {
                for stand_ins in 0..=count.min(max_blanks - used) {
                    next[used + stand_ins] += ways * binomial(available, count - stand_ins);
                }
            }
            by_blanks = next;
        }

        by_blanks
            .iter()
            .enumerate()
            .map(|(used, &ways)| ways * binomial(self.pool.blanks(), used))
            .sum()
    }
}

/// Binomial coefficient C(n, k) as `f64`
///
/// Exact integer arithmetic while it fits in `u128`, which covers any hand
/// drawn from a bag of a few hundred tiles.
#[must_use]
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut exact: u128 = 1;
    for i in 0..k {
        match exact.checked_mul((n - i) as u128) {
            Some(product) => exact = product / (i as u128 + 1),
            None => return binomial_approx(n, k),
        }
    }
    exact as f64
}

fn binomial_approx(n: usize, k: usize) -> f64 {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Round `value` to `digits` decimal places for display
#[must_use]
pub fn round(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}

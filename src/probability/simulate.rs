//! Monte-Carlo draws from a tile pool
//!
//! Used to sanity-check the analytic probabilities against real shuffles.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::BlankMode;
use crate::core::LetterBag;

use super::calculator::ProbabilityModel;

/// Whether a drawn hand spells `letters` under the model's blank rules
#[must_use]
pub fn hand_matches(hand: &[Option<u8>], letters: &LetterBag, blanks: BlankMode) -> bool {
    if hand.len() != letters.len() {
        return false;
    }
    let real: LetterBag = hand.iter().flatten().copied().collect();
    let blank_count = hand.len() - real.len();
    match blanks {
        BlankMode::Inert => blank_count == 0 && real == *letters,
        BlankMode::Wildcard => letters.contains_all(&real),
    }
}

/// Estimated percentage of `trials` random draws that spell `letters`
pub fn estimate<R: Rng + ?Sized>(
    model: &ProbabilityModel,
    letters: &LetterBag,
    trials: usize,
    rng: &mut R,
) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    let tiles = model.pool().tiles();
    let k = letters.len();
    if k > tiles.len() {
        return 0.0;
    }

    let mut hand = Vec::with_capacity(k);
    let hits = (0..trials)
        .filter(|_| {
            hand.clear();
            hand.extend(tiles.choose_multiple(&mut *rng, k).copied());
            hand_matches(&hand, letters, model.blank_mode())
        })
        .count();

    100.0 * hits as f64 / trials as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probability::TilePool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bag(s: &str) -> LetterBag {
        LetterBag::from_word(s).unwrap()
    }

    #[test]
    fn inert_hands_must_match_exactly() {
        let letters = bag("ST");
        assert!(hand_matches(&[Some(b'T'), Some(b'S')], &letters, BlankMode::Inert));
        assert!(!hand_matches(&[Some(b'T'), None], &letters, BlankMode::Inert));
        assert!(!hand_matches(&[Some(b'T'), Some(b'T')], &letters, BlankMode::Inert));
    }

    #[test]
    fn wildcard_hands_accept_blanks() {
        let letters = bag("ST");
        assert!(hand_matches(&[Some(b'T'), None], &letters, BlankMode::Wildcard));
        assert!(hand_matches(&[None, None], &letters, BlankMode::Wildcard));
        assert!(!hand_matches(&[Some(b'T'), Some(b'T')], &letters, BlankMode::Wildcard));
    }

    #[test]
    fn estimate_tracks_the_analytic_value() {
        let model = ProbabilityModel::standard();
        let letters = bag("E");
        let mut rng = StdRng::seed_from_u64(7);
        let value = estimate(&model, &letters, 20_000, &mut rng);
        // Analytic value is 12%; 20k trials put 3 sigma near 0.7
        assert!((value - 12.0).abs() < 1.5, "estimate {value}");
    }

    #[test]
    fn estimate_of_impossible_hand_is_zero() {
        let model = ProbabilityModel::new(TilePool::standard(), BlankMode::Inert);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(estimate(&model, &bag("ZZ"), 2_000, &mut rng).abs() < f64::EPSILON);
    }
}

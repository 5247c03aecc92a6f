//! Random word exploration

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::MIN_QUERY_LEN;
use crate::lexicon::LexiconIndex;

/// Pick a dictionary word long enough to explore
///
/// With `length` set only words of exactly that length are considered.
/// Returns `None` when nothing qualifies.
pub fn pick_random_word<'a, R: Rng + ?Sized>(
    index: &'a LexiconIndex,
    length: Option<usize>,
    rng: &mut R,
) -> Option<&'a str> {
    let candidates: Vec<&str> = index
        .words()
        .into_iter()
        .filter(|word| word.len() >= MIN_QUERY_LEN)
        .filter(|word| length.is_none_or(|len| word.len() == len))
        .collect();

    candidates.choose(rng).copied()
}

//! Letter multisets
//!
//! A `LetterBag` stores per-letter counts for `A`-`Z`. Equality is multiset
//! equality, so `CARE`, `RACE` and `ACRE` all produce the same bag.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const ALPHABET_SIZE: usize = 26;

/// Error type for strings that cannot be turned into a letter multiset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("'{0}' is not an ASCII letter")]
    InvalidCharacter(char),
}

/// An unordered bag of uppercase letters
///
/// # Examples
/// ```
/// use steal_explorer::core::LetterBag;
///
/// let care = LetterBag::from_word("care").unwrap();
/// let race = LetterBag::from_word("RACE").unwrap();
/// assert_eq!(care, race);
/// assert_eq!(care.alphagram(), "ACER");
///
/// assert!(LetterBag::from_word("c4re").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterBag {
    counts: [u16; ALPHABET_SIZE],
}

impl LetterBag {
    /// The empty multiset
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Build the multiset of a word's letters
    ///
    /// Lowercase letters are folded to uppercase.
    ///
    /// # Errors
    /// Returns `LetterError::InvalidCharacter` on the first character that is
    /// not an ASCII letter.
    pub fn from_word(word: &str) -> Result<Self, LetterError> {
        let mut bag = Self::new();
        for ch in word.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(LetterError::InvalidCharacter(ch));
            }
            bag.push(ch.to_ascii_uppercase() as u8);
        }
        Ok(bag)
    }

    /// Add one occurrence of `letter` (an uppercase ASCII byte)
    ///
    /// Bytes outside `A`-`Z` are ignored.
    #[inline]
    pub fn push(&mut self, letter: u8) {
        if let Some(slot) = index_of(letter) {
            self.counts[slot] = self.counts[slot].saturating_add(1);
        }
    }

    /// Remove one occurrence of `letter`, returning whether one was present
    #[inline]
    pub fn remove(&mut self, letter: u8) -> bool {
        match index_of(letter) {
            Some(slot) if self.counts[slot] > 0 => {
                self.counts[slot] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        index_of(letter).map_or(0, |slot| usize::from(self.counts[slot]))
    }

    /// Total number of letters, counting repeats
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Letters in ascending order, repeats included
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.distinct()
            .flat_map(|(letter, count)| std::iter::repeat_n(letter, count))
    }

    /// Each distinct letter with its count, ascending
    pub fn distinct(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(slot, &count)| (letter_at(slot), usize::from(count)))
    }

    /// The sorted-letter canonical form
    #[must_use]
    pub fn alphagram(&self) -> String {
        self.letters().map(char::from).collect()
    }

    /// Multiset sum
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut counts = self.counts;
        for (slot, &count) in other.counts.iter().enumerate() {
            counts[slot] = counts[slot].saturating_add(count);
        }
        Self { counts }
    }

    /// Multiset difference
    ///
    /// Each occurrence in `other` cancels exactly one occurrence in `self`;
    /// letters `self` lacks are ignored.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut counts = self.counts;
        for (slot, &count) in other.counts.iter().enumerate() {
            counts[slot] = counts[slot].saturating_sub(count);
        }
        Self { counts }
    }

    /// Whether every letter of `other` is available in `self`
    #[must_use]
    pub fn contains_all(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(have, need)| have >= need)
    }
}

#[inline]
fn index_of(letter: u8) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| usize::from(letter - b'A'))
}

#[inline]
fn letter_at(slot: usize) -> u8 {
    b'A' + slot as u8
}

impl FromStr for LetterBag {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_word(s)
    }
}

impl FromIterator<u8> for LetterBag {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut bag = Self::new();
        for letter in iter {
            bag.push(letter);
        }
        bag
    }
}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alphagram())
    }
}

//! Tile pools
//!
//! The reference bag is the 100-tile English set. A pool is that bag minus
//! whatever tiles are already known to be out of it.

use crate::core::LetterBag;

/// Letter counts of the standard English tile set
pub const STANDARD_DISTRIBUTION: [(u8, usize); 26] = [
    (b'A', 9),
    (b'B', 2),
    (b'C', 2),
    (b'D', 4),
    (b'E', 12),
    (b'F', 2),
    (b'G', 3),
    (b'H', 2),
    (b'I', 9),
    (b'J', 1),
    (b'K', 1),
    (b'L', 4),
    (b'M', 2),
    (b'N', 6),
    (b'O', 8),
    (b'P', 2),
    (b'Q', 1),
    (b'R', 6),
    (b'S', 4),
    (b'T', 6),
    (b'U', 4),
    (b'V', 2),
    (b'W', 2),
    (b'X', 1),
    (b'Y', 2),
    (b'Z', 1),
];

/// Blank tiles in the standard set
pub const STANDARD_BLANKS: usize = 2;

/// The multiset of tiles that have not been seen yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePool {
    letters: LetterBag,
    blanks: usize,
}

impl TilePool {
    #[must_use]
    pub const fn new(letters: LetterBag, blanks: usize) -> Self {
        Self { letters, blanks }
    }

    /// The full standard bag
    #[must_use]
    pub fn standard() -> Self {
        let letters = STANDARD_DISTRIBUTION
            .iter()
            .flat_map(|&(letter, count)| std::iter::repeat_n(letter, count))
            .collect();
        Self::new(letters, STANDARD_BLANKS)
    }

    /// This pool with `seen` tiles taken out
    ///
    /// Tiles the pool has run out of are ignored.
    #[must_use]
    pub fn without_seen(&self, seen: &LetterBag) -> Self {
        Self::new(self.letters.difference(seen), self.blanks)
    }

    /// Unseen copies of `letter`, blanks excluded
    #[must_use]
    pub fn available(&self, letter: u8) -> usize {
        self.letters.count(letter)
    }

    #[must_use]
    pub const fn blanks(&self) -> usize {
        self.blanks
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterBag {
        &self.letters
    }

    /// Total unseen tiles, blanks included
    #[must_use]
    pub fn size(&self) -> usize {
        self.letters.len() + self.blanks
    }

    /// One entry per tile; `None` is a blank
    #[must_use]
    pub fn tiles(&self) -> Vec<Option<u8>> {
        self.letters
            .letters()
            .map(Some)
            .chain(std::iter::repeat_n(None, self.blanks))
            .collect()
    }
}

impl Default for TilePool {
    fn default() -> Self {
        Self::standard()
    }
}

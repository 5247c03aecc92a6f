//! Core domain types
//!
//! Letter multisets and alphagrams. Everything else in the crate is keyed on
//! these.

mod letters;

pub use letters::{LetterBag, LetterError};

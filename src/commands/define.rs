//! Definition lookup

use crate::config::validate_query;
use crate::error::QueryError;
use crate::lexicon::{DEFINITION_NOT_AVAILABLE, LexiconIndex};

pub struct DefineResult<'a> {
    pub word: String,
    pub is_word: bool,
    pub definition: &'a str,
}

/// Look up `word` in the lexicon
///
/// # Errors
///
/// Returns an error if the word is shorter than four letters or contains
/// anything but letters.
pub fn define_word<'a>(word: &str, index: &'a LexiconIndex) -> Result<DefineResult<'a>, QueryError> {
    let word = validate_query(word)?;
    let definition = index.definition(&word);

    Ok(DefineResult {
        is_word: definition.is_some(),
        definition: definition.unwrap_or(DEFINITION_NOT_AVAILABLE),
        word,
    })
}

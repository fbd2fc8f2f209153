//! Word lists: the built-in preset and validation of player-entered words.

use crate::{Error, Result};

/// The words used when the player doesn't supply their own.
pub const PRESET_WORDS: [&str; 5] = ["PYTHON", "JAVA", "CODE", "PUZZLE", "CROSSWORD"];

/// Returns the preset word list.
pub fn preset() -> Vec<String> {
    PRESET_WORDS.iter().map(|word| word.to_string()).collect()
}

/// Trims and uppercases a single word, rejecting empty and non-alphabetic input.
pub fn normalize_word(word: &str) -> Result<String> {
    let word = word.trim();

    if word.is_empty() {
        return Err(Error::EmptyWord);
    }

    if !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(Error::InvalidWord(word.to_string()));
    }

    Ok(word.to_ascii_uppercase())
}

/// Normalizes every word in `words`, stopping at the first invalid one.
pub fn normalize_words<I, S>(words: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| normalize_word(word.as_ref()))
        .collect()
}

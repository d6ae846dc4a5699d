//! The fixed 26-letter alphabet shared by every cipher and cracker.
//!
//! Letters map to indices `0..26` in order (`'a'` is 0, `'z'` is 25). Keys
//! and texts are plain `&str`s; the helpers here validate them and convert
//! between letters and indices.

use crate::error::{CipherError, Result};

/// The alphabet in index order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Index of `letter` in the alphabet, or `None` if it is not a lowercase latin letter.
pub fn index_of(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Letter at `index`, wrapping around the alphabet.
pub fn letter_at(index: usize) -> char {
    (b'a' + (index % ALPHABET_LEN) as u8) as char
}

/// Convert `text` to alphabet indices.
///
/// # Errors
/// Returns `CipherError::InvalidText` naming the first character that is not
/// in the alphabet.
pub fn to_indices(text: &str) -> Result<Vec<usize>> {
    text.chars()
        .enumerate()
        .map(|(position, found)| {
            index_of(found).ok_or_else(|| CipherError::InvalidText { position, found }.into())
        })
        .collect()
}

/// Convert key letters to alphabet indices.
///
/// Same as [`to_indices`] but reports `CipherError::InvalidKeyLetter`, so a
/// bad key is never confused with bad text.
pub fn key_indices(key: &str) -> Result<Vec<usize>> {
    key.chars()
        .map(|letter| index_of(letter).ok_or_else(|| CipherError::InvalidKeyLetter { letter }.into()))
        .collect()
}

/// Build a string from alphabet indices.
pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> String {
    indices.into_iter().map(letter_at).collect()
}

/// Reduce a raw corpus line to a word over the alphabet.
///
/// Lowercases ASCII letters and drops everything else, so `"O'Brien\n"`
/// becomes `"obrien"`.
pub fn normalize_word(line: &str) -> String {
    line.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_lowercase)
        .collect()
}

//! Vigenère cipher.
//!
//! Letter `i` of the text is combined with `key[i mod len(key)]`. A key
//! letter contributes its index plus one, so `'a'` shifts by 1 and `'z'`
//! shifts by 0. Decryption subtracts the same amount.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use rand::Rng;

fn key_shifts(key: &str) -> Result<Vec<usize>> {
    let indices = alphabet::key_indices(key)?;
    if indices.is_empty() {
        return Err(CipherError::EmptyVigenereKey.into());
    }
    Ok(indices.into_iter().map(|i| (i + 1) % ALPHABET_LEN).collect())
}

/// Encrypt `plaintext` with the Vigenère `key`.
///
/// # Errors
/// `EmptyVigenereKey` for an empty key, `InvalidKeyLetter` for a key with
/// a non-alphabet character, `InvalidText` for bad plaintext.
pub fn vigenere_encrypt(key: &str, plaintext: &str) -> Result<String> {
    let shifts = key_shifts(key)?;
    let text = alphabet::to_indices(plaintext)?;
    Ok(alphabet::from_indices(
        text.into_iter()
            .zip(shifts.iter().cycle())
            .map(|(x, &k)| x + k),
    ))
}

/// Decrypt `ciphertext` with the Vigenère `key`.
pub fn vigenere_decrypt(key: &str, ciphertext: &str) -> Result<String> {
    let shifts = key_shifts(key)?;
    let text = alphabet::to_indices(ciphertext)?;
    Ok(alphabet::from_indices(
        text.into_iter()
            .zip(shifts.iter().cycle())
            .map(|(x, &k)| x + ALPHABET_LEN - k),
    ))
}

/// Uniform random key of `key_length` letters.
pub fn generate_vigenere_key<R: Rng + ?Sized>(rng: &mut R, key_length: usize) -> String {
    (0..key_length)
        .map(|_| alphabet::letter_at(rng.gen_range(0..ALPHABET_LEN)))
        .collect()
}

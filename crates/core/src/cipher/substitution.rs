//! Mono-alphabetic substitution cipher.
//!
//! The key is a permutation of the alphabet: plain letter at position `i`
//! becomes `key[i]`. Decryption applies the inverse table.

use crate::alphabet::{self, ALPHABET, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// A validated substitution key with its forward and inverse tables.
///
/// # Invariants
/// - `forward` is a permutation of `0..26`
/// - `inverse[forward[i]] == i` for every `i`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionKey {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl SubstitutionKey {
    /// Parse a 26-letter permutation of the alphabet.
    ///
    /// # Errors
    /// - `SubstitutionKeyLength` if the key is not 26 characters long
    /// - `InvalidKeyLetter` if a character is outside the alphabet
    /// - `SubstitutionKeyRepeat` if a letter appears twice
    pub fn parse(key: &str) -> Result<Self> {
        let length = key.chars().count();
        if length != ALPHABET_LEN {
            return Err(CipherError::SubstitutionKeyLength { length }.into());
        }

        let indices = alphabet::key_indices(key)?;

        // 26 is the "unset" marker; every slot gets overwritten exactly once
        let mut forward = [0u8; ALPHABET_LEN];
        let mut inverse = [ALPHABET_LEN as u8; ALPHABET_LEN];
        for (plain, &cipher) in indices.iter().enumerate() {
            if inverse[cipher] as usize != ALPHABET_LEN {
                return Err(CipherError::SubstitutionKeyRepeat {
                    letter: alphabet::letter_at(cipher),
                }
                .into());
            }
            forward[plain] = cipher as u8;
            inverse[cipher] = plain as u8;
        }

        Ok(Self { forward, inverse })
    }

    /// The alphabet rotated left by `shift` positions, i.e. the shift cipher
    /// expressed as a substitution.
    pub fn rotation(shift: usize) -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        let mut inverse = [0u8; ALPHABET_LEN];
        for i in 0..ALPHABET_LEN {
            let cipher = (i + shift) % ALPHABET_LEN;
            forward[i] = cipher as u8;
            inverse[cipher] = i as u8;
        }
        Self { forward, inverse }
    }

    /// Encrypt `plaintext` through the forward table.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let indices = alphabet::to_indices(plaintext)?;
        Ok(alphabet::from_indices(
            indices.into_iter().map(|i| self.forward[i] as usize),
        ))
    }

    /// Decrypt `ciphertext` through the inverse table.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let indices = alphabet::to_indices(ciphertext)?;
        Ok(alphabet::from_indices(
            indices.into_iter().map(|i| self.inverse[i] as usize),
        ))
    }
}

impl std::fmt::Display for SubstitutionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = alphabet::from_indices(self.forward.iter().map(|&i| i as usize));
        f.write_str(&key)
    }
}

/// Encrypt `plaintext` with the substitution `key`.
///
/// # Errors
/// `InvalidKey` variants if `key` is not a permutation of the alphabet;
/// `InvalidText` if `plaintext` contains a non-alphabet character.
pub fn substitution_encrypt(key: &str, plaintext: &str) -> Result<String> {
    SubstitutionKey::parse(key)?.encrypt(plaintext)
}

/// Decrypt `ciphertext` with the substitution `key`.
pub fn substitution_decrypt(key: &str, ciphertext: &str) -> Result<String> {
    SubstitutionKey::parse(key)?.decrypt(ciphertext)
}

/// Uniform random permutation of the alphabet.
pub fn generate_substitution_key<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut letters: Vec<char> = ALPHABET.chars().collect();
    letters.shuffle(rng);
    letters.into_iter().collect()
}

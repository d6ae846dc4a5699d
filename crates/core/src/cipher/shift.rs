//! Shift (Caesar) cipher.
//!
//! The key is any integer; it is reduced modulo 26 before use, so keys that
//! are congruent modulo 26 behave identically.

use super::substitution::SubstitutionKey;
use crate::alphabet::ALPHABET_LEN;
use crate::error::Result;
use rand::Rng;

/// Canonical form of a shift key, in `0..26`.
pub fn canonical_shift(key: i64) -> usize {
    key.rem_euclid(ALPHABET_LEN as i64) as usize
}

/// Shift every letter of `plaintext` forward by `key mod 26`.
pub fn shift_encrypt(key: i64, plaintext: &str) -> Result<String> {
    SubstitutionKey::rotation(canonical_shift(key)).encrypt(plaintext)
}

/// Inverse of [`shift_encrypt`].
///
/// The key is reduced before it is inverted, so `i64::MIN` is as valid as
/// any other key.
pub fn shift_decrypt(key: i64, ciphertext: &str) -> Result<String> {
    SubstitutionKey::rotation(canonical_shift(key)).decrypt(ciphertext)
}

/// Uniform random shift key in `0..=25`.
pub fn generate_shift_key<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(0..=25)
}

//! Classical cipher primitives over the fixed lowercase alphabet.
//!
//! Each scheme is available two ways:
//! - free functions (`shift_encrypt`, `substitution_decrypt`, ...) taking the
//!   key and text directly
//! - a marker type implementing [`Cipher`], which additionally knows how to
//!   generate a random key and is what runners are parameterised over
//!
//! All primitives satisfy the round-trip law
//! `decrypt(key, encrypt(key, text)) == text` for every valid key and every
//! alphabet string, including the empty one.
//!
//! # Example
//! ```
//! use crack_sim_core::cipher::{shift_encrypt, vigenere_encrypt, Cipher, Vigenere};
//!
//! assert_eq!(shift_encrypt(2, "abcde").unwrap(), "cdefg");
//! assert_eq!(vigenere_encrypt("key", "secret").unwrap(), "djbcjs");
//!
//! let key = "cafe".to_string();
//! let ciphertext = Vigenere::encrypt(&key, "tellhimaboutme").unwrap();
//! assert_eq!(Vigenere::decrypt(&key, &ciphertext).unwrap(), "tellhimaboutme");
//! ```

pub mod shift;
pub mod substitution;
pub mod vigenere;

pub use shift::{canonical_shift, generate_shift_key, shift_decrypt, shift_encrypt};
pub use substitution::{
    generate_substitution_key, substitution_decrypt, substitution_encrypt, SubstitutionKey,
};
pub use vigenere::{generate_vigenere_key, vigenere_decrypt, vigenere_encrypt};

use crate::error::Result;
use rand::Rng;
use std::fmt::Debug;

/// A cipher scheme: its primitives plus a key-generation policy.
pub trait Cipher {
    /// Key type handed to `encrypt`/`decrypt`.
    type Key: Clone + PartialEq + Debug;

    /// Human-readable scheme name, used in logs.
    const NAME: &'static str;

    /// Encrypt `plaintext` under `key`.
    fn encrypt(key: &Self::Key, plaintext: &str) -> Result<String>;

    /// Decrypt `ciphertext` under `key`.
    fn decrypt(key: &Self::Key, ciphertext: &str) -> Result<String>;

    /// Draw a uniformly random valid key.
    ///
    /// `key_length` is used only by schemes whose keys have a variable length.
    fn generate_key<R: Rng + ?Sized>(rng: &mut R, key_length: usize) -> Self::Key;
}

/// Shift cipher with an integer key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shift;

/// Mono-alphabetic substitution with a 26-letter permutation key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Substitution;

/// Vigenère cipher with a non-empty letter key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vigenere;

impl Cipher for Shift {
    type Key = i64;
    const NAME: &'static str = "shift";

    fn encrypt(key: &i64, plaintext: &str) -> Result<String> {
        shift_encrypt(*key, plaintext)
    }

    fn decrypt(key: &i64, ciphertext: &str) -> Result<String> {
        shift_decrypt(*key, ciphertext)
    }

    fn generate_key<R: Rng + ?Sized>(rng: &mut R, _key_length: usize) -> i64 {
        generate_shift_key(rng)
    }
}

impl Cipher for Substitution {
    type Key = String;
    const NAME: &'static str = "substitution";

    fn encrypt(key: &String, plaintext: &str) -> Result<String> {
        substitution_encrypt(key, plaintext)
    }

    fn decrypt(key: &String, ciphertext: &str) -> Result<String> {
        substitution_decrypt(key, ciphertext)
    }

    fn generate_key<R: Rng + ?Sized>(rng: &mut R, _key_length: usize) -> String {
        generate_substitution_key(rng)
    }
}

impl Cipher for Vigenere {
    type Key = String;
    const NAME: &'static str = "vigenere";

    fn encrypt(key: &String, plaintext: &str) -> Result<String> {
        vigenere_encrypt(key, plaintext)
    }

    fn decrypt(key: &String, ciphertext: &str) -> Result<String> {
        vigenere_decrypt(key, ciphertext)
    }

    fn generate_key<R: Rng + ?Sized>(rng: &mut R, key_length: usize) -> String {
        generate_vigenere_key(rng, key_length)
    }
}

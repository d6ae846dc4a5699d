//! Cipher runners: self-checking test instances for crackers.
//!
//! A runner generates a random key, samples a plaintext from the word
//! corpus and encrypts it. The resulting [`RunResult`] carries the ground
//! truth a cracker's guess is compared against.

use crate::cipher::{Cipher, Shift, Substitution, Vigenere};
use crate::error::Result;
use crate::sampler::Corpus;
use rand::Rng;
use std::marker::PhantomData;

/// Default number of words per plaintext.
pub const DEFAULT_PLAINTEXT_LENGTH: usize = 64;

/// Default key length for schemes with variable-length keys.
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Sizes shared by every runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Number of corpus words concatenated into each plaintext
    pub plaintext_length: usize,

    /// Key length, for schemes where it makes sense (Vigenère)
    pub key_length: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            plaintext_length: DEFAULT_PLAINTEXT_LENGTH,
            key_length: DEFAULT_KEY_LENGTH,
        }
    }
}

/// One generated test instance.
///
/// # Invariants
/// - `plaintext.len() == ciphertext.len()`
/// - decrypting `ciphertext` under `key` yields `plaintext`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult<K> {
    pub key: K,
    pub plaintext: String,
    pub ciphertext: String,
}

/// Anything that produces test instances for a cracker.
pub trait Runner {
    /// Key type of the generated instances.
    type Key: Clone + PartialEq + std::fmt::Debug;

    /// Generate one instance, consuming randomness from `rng`.
    fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RunResult<Self::Key>>;
}

/// Runner for the cipher scheme `C`.
#[derive(Debug, Clone)]
pub struct CipherRunner<C> {
    config: RunnerConfig,
    corpus: Corpus,
    _cipher: PhantomData<C>,
}

/// Runner for the shift cipher.
pub type ShiftCipherRunner = CipherRunner<Shift>;

/// Runner for the substitution cipher.
pub type SubstitutionCipherRunner = CipherRunner<Substitution>;

/// Runner for the Vigenère cipher.
pub type VigenereCipherRunner = CipherRunner<Vigenere>;

impl<C: Cipher> CipherRunner<C> {
    /// Create a runner drawing plaintext from `corpus`.
    pub fn new(config: RunnerConfig, corpus: Corpus) -> Self {
        Self {
            config,
            corpus,
            _cipher: PhantomData,
        }
    }

    /// Generate a random key of the scheme.
    pub fn generate_key<R: Rng + ?Sized>(&self, rng: &mut R) -> C::Key {
        C::generate_key(rng, self.config.key_length)
    }

    /// Sample `plaintext_length` words from the corpus.
    pub fn generate_plaintext<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        self.corpus
            .generate_plaintext(self.config.plaintext_length, rng)
    }
}

impl<C: Cipher> Runner for CipherRunner<C> {
    type Key = C::Key;

    fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RunResult<C::Key>> {
        let key = self.generate_key(rng);
        let plaintext = self.generate_plaintext(rng)?;
        let ciphertext = C::encrypt(&key, &plaintext)?;

        log::trace!(
            "{} run: key={:?}, {} letters",
            C::NAME,
            key,
            plaintext.len()
        );

        Ok(RunResult {
            key,
            plaintext,
            ciphertext,
        })
    }
}

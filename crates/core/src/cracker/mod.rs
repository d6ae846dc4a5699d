//! Ciphertext-only attacks.
//!
//! Every cracker names the runner that generates instances for it, so the
//! accuracy harness can pair the two. Attacks that are declared but not
//! implemented return `CrackError::Unsupported` from `crack`, which keeps
//! "not implemented" distinct from a wrong guess.

pub mod kasiski;
pub mod shift;
pub mod substitution;

pub use kasiski::VigenereCracker;
pub use shift::ShiftCracker;
pub use substitution::SubstitutionCracker;

use crate::error::Result;
use crate::runner::{Runner, RunnerConfig};
use crate::sampler::Corpus;
use std::fmt::Debug;

/// A cracker's answer: the recovered key and plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess<K> {
    pub key: K,
    pub plaintext: String,
}

/// A ciphertext-only attack on one cipher scheme.
pub trait Cracker {
    /// Key type the attack recovers.
    type Key: Clone + PartialEq + Debug;

    /// Runner producing instances of the attacked scheme.
    type Runner: Runner<Key = Self::Key>;

    /// Name used in logs and error messages.
    const NAME: &'static str;

    /// Recover key and plaintext from `ciphertext` alone.
    fn crack(&self, ciphertext: &str) -> Result<Guess<Self::Key>>;

    /// Build the counterpart runner for this attack.
    fn runner(&self, config: RunnerConfig, corpus: Corpus) -> Self::Runner;
}

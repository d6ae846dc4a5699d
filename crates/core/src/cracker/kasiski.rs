//! Kasiski examination of the Vigenère cipher.
//!
//! Not implemented yet. The attack would find repeated sequences in the
//! ciphertext, take the gcd of their spacings as the key length, then break
//! each key position as an independent shift cipher. `crack` reports
//! `CrackError::Unsupported`.

use super::{Cracker, Guess};
use crate::error::{CrackError, Result};
use crate::runner::{RunnerConfig, VigenereCipherRunner};
use crate::sampler::Corpus;

/// Kasiski-based cracker for the Vigenère cipher.
#[derive(Debug, Clone, Copy, Default)]
pub struct VigenereCracker;

impl Cracker for VigenereCracker {
    type Key = String;
    type Runner = VigenereCipherRunner;
    const NAME: &'static str = "VigenereCracker";

    fn crack(&self, _ciphertext: &str) -> Result<Guess<String>> {
        Err(CrackError::Unsupported {
            cracker: Self::NAME,
        }
        .into())
    }

    fn runner(&self, config: RunnerConfig, corpus: Corpus) -> VigenereCipherRunner {
        VigenereCipherRunner::new(config, corpus)
    }
}

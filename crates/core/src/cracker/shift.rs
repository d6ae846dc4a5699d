//! Frequency-analysis attack on the shift cipher.
//!
//! English letter frequencies are distinctive: once the ciphertext's
//! frequency table is shifted back by the right key it sits much closer to
//! the English reference than under any other shift. The attack tries all
//! 26 keys and keeps the one with the smallest chi-square statistic.

use super::{Cracker, Guess};
use crate::alphabet::ALPHABET_LEN;
use crate::cipher::shift_decrypt;
use crate::error::{CrackError, Result};
use crate::frequency::FrequencyTable;
use crate::runner::{RunnerConfig, ShiftCipherRunner};
use crate::sampler::Corpus;

/// Chi-square cracker for the shift cipher.
#[derive(Debug, Clone)]
pub struct ShiftCracker {
    reference: FrequencyTable,
}

impl ShiftCracker {
    /// Cracker scoring against English letter frequencies.
    pub fn new() -> Self {
        Self {
            reference: FrequencyTable::english(),
        }
    }

    /// Chi-square statistic of every candidate key, indexed by key.
    ///
    /// # Errors
    /// `CrackError::EmptyInput` for an empty ciphertext, `InvalidText` for
    /// a ciphertext with non-alphabet characters.
    pub fn score(&self, ciphertext: &str) -> Result<[f64; ALPHABET_LEN]> {
        if ciphertext.is_empty() {
            return Err(CrackError::EmptyInput.into());
        }

        let observed = FrequencyTable::measure(ciphertext)?;
        let mut scores = [0.0; ALPHABET_LEN];
        for (key, score) in scores.iter_mut().enumerate() {
            *score = observed.aligned(key).chi_square(&self.reference);
        }
        log::trace!("chi-square scores: {:?}", scores);
        Ok(scores)
    }
}

impl Default for ShiftCracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Cracker for ShiftCracker {
    type Key = i64;
    type Runner = ShiftCipherRunner;
    const NAME: &'static str = "ShiftCracker";

    fn crack(&self, ciphertext: &str) -> Result<Guess<i64>> {
        let scores = self.score(ciphertext)?;

        // min_by keeps the first of equal minima, so ties go to the smallest key
        let key = scores
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(key, _)| key as i64)
            .unwrap_or(0);

        let plaintext = shift_decrypt(key, ciphertext)?;
        Ok(Guess { key, plaintext })
    }

    fn runner(&self, config: RunnerConfig, corpus: Corpus) -> ShiftCipherRunner {
        ShiftCipherRunner::new(config, corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::shift_encrypt;
    use crate::error::Error;

    const ENGLISH: &str = "itwasthebestoftimesitwastheworstoftimesitwastheageofwisdomitwastheageoffoolishnessitwastheepochofbeliefitwastheepochofincredulityitwastheseasonoflightitwastheseasonofdarkness";

    #[test]
    fn test_recovers_key() {
        let cracker = ShiftCracker::new();
        let ciphertext = shift_encrypt(7, ENGLISH).unwrap();
        let guess = cracker.crack(&ciphertext).unwrap();
        assert_eq!(guess.key, 7);
        assert_eq!(guess.plaintext, ENGLISH);
    }

    #[test]
    fn test_recovers_every_key() {
        let cracker = ShiftCracker::new();
        for key in 0..26 {
            let ciphertext = shift_encrypt(key, ENGLISH).unwrap();
            assert_eq!(cracker.crack(&ciphertext).unwrap().key, key);
        }
    }

    #[test]
    fn test_rejects_empty() {
        match ShiftCracker::new().crack("") {
            Err(Error::Crack(CrackError::EmptyInput)) => {}
            other => panic!("expected EmptyInput, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_text() {
        assert!(ShiftCracker::new().crack("Hello world").is_err());
    }

    #[test]
    fn test_scores_are_finite() {
        let scores = ShiftCracker::new().score("zzzz").unwrap();
        assert!(scores.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_tie_goes_to_smallest_key() {
        // uniform text scores identically under every shift
        let ciphertext: String = crate::alphabet::ALPHABET.to_string();
        assert_eq!(ShiftCracker::new().crack(&ciphertext).unwrap().key, 0);
    }
}

//! Substitution cipher cracker.
//!
//! Not implemented yet: the intended attack scores candidate keys by n-gram
//! statistics and improves them by hill-climbing. Until then `crack`
//! reports `CrackError::Unsupported`.

use super::{Cracker, Guess};
use crate::error::{CrackError, Result};
use crate::runner::{RunnerConfig, SubstitutionCipherRunner};
use crate::sampler::Corpus;

/// Cracker for the mono-alphabetic substitution cipher.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstitutionCracker;

impl Cracker for SubstitutionCracker {
    type Key = String;
    type Runner = SubstitutionCipherRunner;
    const NAME: &'static str = "SubstitutionCracker";

    fn crack(&self, _ciphertext: &str) -> Result<Guess<String>> {
        Err(CrackError::Unsupported {
            cracker: Self::NAME,
        }
        .into())
    }

    fn runner(&self, config: RunnerConfig, corpus: Corpus) -> SubstitutionCipherRunner {
        SubstitutionCipherRunner::new(config, corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crack_is_unsupported() {
        let err = SubstitutionCracker.crack("abc").unwrap_err();
        assert!(err.is_unsupported());
        assert_eq!(
            err.to_string(),
            "crack error: SubstitutionCracker does not support cracking yet"
        );
    }
}

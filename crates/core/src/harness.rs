//! Accuracy harness: runs a cracker against fresh instances of its cipher.
//!
//! Each trial asks the runner for a ground-truth instance, hands only the
//! ciphertext to the cracker, and counts a success when both the guessed
//! key and the guessed plaintext match exactly. Errors abort the whole run;
//! they are never folded into the failure count.

use crate::cracker::Cracker;
use crate::error::Result;
use crate::metrics::Metrics;
use crate::runner::{Runner, RunnerConfig};
use crate::sampler::Corpus;
use rand::Rng;

/// An explicit runner/cracker pairing.
#[derive(Debug, Clone)]
pub struct Harness<R, C> {
    runner: R,
    cracker: C,
}

impl<R, C> Harness<R, C>
where
    R: Runner,
    C: Cracker<Key = R::Key>,
{
    /// Pair `runner` with `cracker`.
    pub fn new(runner: R, cracker: C) -> Self {
        Self { runner, cracker }
    }

    /// Run `num_runs` independent trials.
    ///
    /// # Errors
    /// The first error from the runner or the cracker, e.g. an unreadable
    /// corpus or `CrackError::Unsupported`.
    pub fn exercise<G: Rng + ?Sized>(&self, num_runs: usize, rng: &mut G) -> Result<Metrics> {
        log::info!("exercising {} over {} runs", C::NAME, num_runs);
        let mut metrics = Metrics::new();

        for trial in 0..num_runs {
            let truth = self.runner.run(rng)?;
            let guess = self.cracker.crack(&truth.ciphertext)?;

            let key_matched = guess.key == truth.key;
            let plaintext_matched = guess.plaintext == truth.plaintext;
            log::debug!(
                "trial {}: key {:?}, guessed {:?}, {}",
                trial,
                truth.key,
                guess.key,
                if key_matched && plaintext_matched {
                    "success"
                } else {
                    "failure"
                }
            );
            metrics.record(key_matched, plaintext_matched, truth.plaintext.len());
        }

        metrics.complete();
        log::info!(
            "{} finished: {} successes, {} failures",
            C::NAME,
            metrics.successes,
            metrics.failures
        );
        Ok(metrics)
    }
}

/// Run `cracker` against `num_runs` instances from its own counterpart runner.
///
/// Returns `(successes, failures)`.
pub fn exercise_cracker<C, G>(
    cracker: C,
    num_runs: usize,
    config: RunnerConfig,
    corpus: Corpus,
    rng: &mut G,
) -> Result<(u64, u64)>
where
    C: Cracker,
    G: Rng + ?Sized,
{
    let runner = cracker.runner(config, corpus);
    let metrics = Harness::new(runner, cracker).exercise(num_runs, rng)?;
    Ok(metrics.tally())
}

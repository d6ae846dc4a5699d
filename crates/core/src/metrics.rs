//! Metrics collection and reporting for the accuracy harness.
//!
//! Tracks how a cracker fared across a batch of trials:
//! - Outcome counts (successes, failures, wrong keys)
//! - Volume (plaintext letters attacked)
//! - Timing
//!
//! The harness owns one `Metrics` and updates it after each trial.

use std::time::{Duration, Instant};

/// Outcome statistics for one harness run.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Outcomes ===
    /// Trials attempted
    pub trials: u64,

    /// Trials where key and plaintext were both recovered exactly
    pub successes: u64,

    /// Trials with any mismatch
    pub failures: u64,

    /// Failed trials where the guessed key itself was wrong
    pub wrong_keys: u64,

    // === Volume ===
    /// Total plaintext letters across all trials
    pub letters: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            trials: 0,
            successes: 0,
            failures: 0,
            wrong_keys: 0,
            letters: 0,
        }
    }

    /// Record one trial.
    pub fn record(&mut self, key_matched: bool, plaintext_matched: bool, letters: usize) {
        self.trials += 1;
        self.letters += letters as u64;
        if key_matched && plaintext_matched {
            self.successes += 1;
        } else {
            self.failures += 1;
            if !key_matched {
                self.wrong_keys += 1;
            }
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// `(successes, failures)`
    pub fn tally(&self) -> (u64, u64) {
        (self.successes, self.failures)
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Fraction of trials that succeeded.
    ///
    /// Returns 0.0 if no trial ran.
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.successes as f64 / self.trials as f64
        }
    }

    /// Plaintext letters attacked per second.
    pub fn throughput_lps(&self) -> f64 {
        let duration_secs = self.duration().as_secs_f64();
        if duration_secs == 0.0 {
            0.0
        } else {
            self.letters as f64 / duration_secs
        }
    }

    /// Print the result in the fixed `Success:`/`Failure:` format.
    pub fn print_result(&self) {
        println!("Success: {}\nFailure: {}", self.successes, self.failures);
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Accuracy Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!("Trials: {}", self.trials);
        println!("Success rate: {:.1}%", self.success_rate() * 100.0);
        println!("Wrong keys: {}", self.wrong_keys);
        println!(
            "Plaintext mismatches: {}",
            self.failures - self.wrong_keys
        );
        println!();

        println!("=== Volume ===");
        println!("Letters: {}", self.letters);
        if self.trials > 0 {
            println!("Mean letters per trial: {:.1}", self.letters as f64 / self.trials as f64);
        }
        println!("Throughput: {:.0} letters/s", self.throughput_lps());
        println!();
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert!(metrics.end_time.is_none());
        assert_eq!(metrics.tally(), (0, 0));
        assert_eq!(metrics.success_rate(), 0.0);
    }

    #[test]
    fn test_record() {
        let mut metrics = Metrics::new();
        metrics.record(true, true, 100);
        metrics.record(false, false, 50);
        metrics.record(true, false, 50);

        assert_eq!(metrics.trials, 3);
        assert_eq!(metrics.tally(), (1, 2));
        assert_eq!(metrics.wrong_keys, 1);
        assert_eq!(metrics.letters, 200);
    }

    #[test]
    fn test_success_rate() {
        let mut metrics = Metrics::new();
        for _ in 0..3 {
            metrics.record(true, true, 10);
        }
        metrics.record(false, false, 10);

        assert_eq!(metrics.success_rate(), 0.75);
    }

    #[test]
    fn test_complete_freezes_duration() {
        let mut metrics = Metrics::new();
        metrics.complete();
        let d = metrics.duration();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(metrics.duration(), d);
    }
}

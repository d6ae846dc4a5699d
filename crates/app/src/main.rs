//! crack-sim: accuracy harness for classical cipher crackers
//!
//! With no arguments, runs the shift-cipher frequency-analysis cracker five
//! times over the system dictionary and prints
//!
//! ```text
//! Success: <n>
//! Failure: <m>
//! ```
//!
//! Logs go to stderr; stdout carries only the result (plus the optional
//! configuration and metrics reports).

mod config;

use clap::Parser;
use config::{Cli, Config, CrackerKind};
use crack_sim_core::cracker::{Cracker, ShiftCracker, SubstitutionCracker, VigenereCracker};
use crack_sim_core::metrics::Metrics;
use crack_sim_core::{Corpus, Harness, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Pair `cracker` with its counterpart runner and run the configured trials.
fn exercise<C: Cracker>(cracker: C, config: &Config, rng: &mut ChaCha8Rng) -> Result<Metrics> {
    let corpus = Corpus::file(&config.corpus);
    let runner = cracker.runner(config.runner, corpus);
    Harness::new(runner, cracker).exercise(config.runs, rng)
}

fn run(config: &Config) -> Result<Metrics> {
    if config.print_config {
        config.print();
    }

    log::info!("Seed: {}", config.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    match config.cracker {
        CrackerKind::Shift => exercise(ShiftCracker::new(), config, &mut rng),
        CrackerKind::Substitution => exercise(SubstitutionCracker, config, &mut rng),
        CrackerKind::Vigenere => exercise(VigenereCracker, config, &mut rng),
    }
}

fn main() {
    let cli = Cli::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());

    let config = Config::from_cli(&cli).unwrap_or_else(|err| {
        log::error!("{err}");
        std::process::exit(1)
    });

    match run(&config) {
        Ok(metrics) => {
            metrics.print_result();
            if config.print_metrics {
                metrics.print_summary();
            }
        }
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1)
        }
    }
}

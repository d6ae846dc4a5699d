//! Configuration for the crack-sim application.
//!
//! Command-line arguments are parsed with clap into [`Cli`] and then resolved
//! into a validated [`Config`].
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: five shift-cracker trials over
//! the system dictionary, printing only the success/failure tally. Every
//! default can be overridden, and `--seed` makes a run reproducible.

use crack_sim_core::runner::{DEFAULT_KEY_LENGTH, DEFAULT_PLAINTEXT_LENGTH};
use crack_sim_core::sampler::DEFAULT_WORD_FILE;
use crack_sim_core::{Error, Result, RunnerConfig};
use std::path::PathBuf;

/// Which cracker to exercise.
#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum CrackerKind {
    /// Chi-square frequency analysis on the shift cipher
    #[default]
    Shift,
    /// Substitution cipher cracker (not implemented)
    Substitution,
    /// Kasiski attack on the Vigenère cipher (not implemented)
    Vigenere,
}

/// Cli Arguments related to logging
#[derive(clap::Args, Debug)]
pub struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser = clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Initialise logging to stderr.
    ///
    /// Sets the logging verbosity in the following order:
    ///  * the `--log` value
    ///  * `Error` when `-q` is used
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * the `CRACK_SIM_LOG` environment variable
    ///  * `Warn` otherwise
    pub fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env("CRACK_SIM_LOG");
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
        builder.init();
    }
}

/// Measure how often a classical cipher cracker recovers key and plaintext
#[derive(clap::Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Number of independent trials
    #[arg(short, long, default_value_t = 5)]
    pub runs: usize,
    /// Cracker to exercise
    #[arg(short, long, value_enum, default_value_t)]
    pub cracker: CrackerKind,
    /// Word list, one word per line
    #[arg(long, default_value = DEFAULT_WORD_FILE)]
    pub corpus: PathBuf,
    /// Words per generated plaintext
    #[arg(long, default_value_t = DEFAULT_PLAINTEXT_LENGTH)]
    pub plaintext_length: usize,
    /// Key length for ciphers with variable-length keys
    #[arg(long, default_value_t = DEFAULT_KEY_LENGTH)]
    pub key_length: usize,
    /// Random seed for a reproducible run (default: from OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the resolved configuration before running
    #[arg(long)]
    pub print_config: bool,
    /// Print a metrics summary after the result
    #[arg(long)]
    pub metrics: bool,
    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Complete configuration for a harness run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Plaintext and key sizes
    pub runner: RunnerConfig,

    /// Word list path
    pub corpus: PathBuf,

    /// Number of trials
    pub runs: usize,

    /// Cracker under test
    pub cracker: CrackerKind,

    /// Seed for the run's RNG
    pub seed: u64,

    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Resolve and validate parsed arguments.
    ///
    /// # Errors
    /// `Error::Config` if a plaintext would be empty or a Vigenère key
    /// would have no letters.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.plaintext_length == 0 {
            return Err(Error::Config(
                "--plaintext-length must be at least 1".to_string(),
            ));
        }
        if cli.key_length == 0 && cli.cracker == CrackerKind::Vigenere {
            return Err(Error::Config(
                "--key-length must be at least 1 for the vigenere cracker".to_string(),
            ));
        }

        let seed = cli.seed.unwrap_or_else(rand::random);

        Ok(Config {
            runner: RunnerConfig {
                plaintext_length: cli.plaintext_length,
                key_length: cli.key_length,
            },
            corpus: cli.corpus.clone(),
            runs: cli.runs,
            cracker: cli.cracker,
            seed,
            print_config: cli.print_config,
            print_metrics: cli.metrics,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Cracker: {:?}", self.cracker);
        println!("Runs: {}", self.runs);
        println!("Seed: {}", self.seed);
        println!("Corpus: {}", self.corpus.display());
        println!("Plaintext length: {} words", self.runner.plaintext_length);
        println!("Key length: {}", self.runner.key_length);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["crack-sim"]).unwrap();
        let config = Config::from_cli(&cli).unwrap();

        assert_eq!(config.runs, 5);
        assert_eq!(config.cracker, CrackerKind::Shift);
        assert_eq!(config.corpus, PathBuf::from("/usr/share/dict/words"));
        assert_eq!(config.runner, RunnerConfig::default());
        assert!(!config.print_config);
        assert!(!config.print_metrics);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "crack-sim",
            "--runs",
            "12",
            "--cracker",
            "vigenere",
            "--corpus",
            "words.txt",
            "--plaintext-length",
            "20",
            "--key-length",
            "4",
            "--seed",
            "42",
            "--metrics",
        ])
        .unwrap();
        let config = Config::from_cli(&cli).unwrap();

        assert_eq!(config.runs, 12);
        assert_eq!(config.cracker, CrackerKind::Vigenere);
        assert_eq!(config.corpus, PathBuf::from("words.txt"));
        assert_eq!(config.runner.plaintext_length, 20);
        assert_eq!(config.runner.key_length, 4);
        assert_eq!(config.seed, 42);
        assert!(config.print_metrics);
    }

    #[test]
    fn test_rejects_zero_plaintext_length() {
        let cli = Cli::try_parse_from(["crack-sim", "--plaintext-length", "0"]).unwrap();
        assert!(matches!(Config::from_cli(&cli), Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_empty_vigenere_key() {
        let cli =
            Cli::try_parse_from(["crack-sim", "--cracker", "vigenere", "--key-length", "0"]).unwrap();
        assert!(matches!(Config::from_cli(&cli), Err(Error::Config(_))));

        // key length is irrelevant to the shift cracker
        let cli = Cli::try_parse_from(["crack-sim", "--key-length", "0"]).unwrap();
        assert!(Config::from_cli(&cli).is_ok());
    }

    #[test]
    fn test_rejects_unknown_cracker() {
        assert!(Cli::try_parse_from(["crack-sim", "--cracker", "enigma"]).is_err());
    }

    #[test]
    fn test_verbosity_flags_conflict() {
        assert!(Cli::try_parse_from(["crack-sim", "-q", "-v"]).is_err());
    }
}

//! crack-sim-core: classical ciphers and a ciphertext-only cracking harness
//!
//! This library provides:
//! - Shift, substitution and Vigenère ciphers over the 26 lowercase letters
//! - A reservoir sampler drawing English-like plaintext from a word list
//! - Runners that generate self-checking (key, plaintext, ciphertext) instances
//! - A chi-square frequency-analysis attack on the shift cipher
//! - An accuracy harness measuring how often an attack succeeds
//!
//! # Architecture
//!
//! - `alphabet`: letter/index conversion and text validation
//! - `cipher`: encrypt/decrypt primitives and key generation
//! - `frequency`: letter-frequency tables and chi-square
//! - `sampler`: reservoir sampling over a word corpus
//! - `runner`: test-instance generation
//! - `cracker`: ciphertext-only attacks
//! - `harness`: repeated runner → cracker trials
//! - `metrics`: outcome statistics
//!
//! # Design Principles
//!
//! - **No panics**: invalid keys and texts are structured errors
//! - **Explicit randomness**: every random draw takes a caller-supplied RNG,
//!   so seeded runs are reproducible
//! - **Bounded memory**: the corpus is streamed, never loaded whole
//!
//! # Example
//! ```
//! use crack_sim_core::cracker::{Cracker, ShiftCracker};
//! use crack_sim_core::cipher::shift_encrypt;
//!
//! let plaintext = "itwasthebestoftimesitwastheworstoftimesitwastheageofwisdom";
//! let ciphertext = shift_encrypt(7, plaintext).unwrap();
//! let guess = ShiftCracker::new().crack(&ciphertext).unwrap();
//! assert_eq!(guess.key, 7);
//! assert_eq!(guess.plaintext, plaintext);
//! ```

pub mod alphabet;
pub mod cipher;
pub mod cracker;
pub mod error;
pub mod frequency;
pub mod harness;
pub mod metrics;
pub mod runner;
pub mod sampler;

// Re-export commonly used types
pub use error::{Error, Result};
pub use harness::{exercise_cracker, Harness};
pub use runner::{RunResult, Runner, RunnerConfig};
pub use sampler::Corpus;

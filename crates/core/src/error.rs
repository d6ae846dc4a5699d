//! Error types for the crack-sim system.
//!
//! Every fallible operation returns a structured error. Validation failures
//! are reported at the boundary of the primitive or cracker that detects
//! them; nothing is silently corrected and nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Cipher: malformed keys or text handed to a primitive
/// - Crack: ciphertext a cracker cannot work with, or an unsupported attack
/// - Corpus: the word list backing the plaintext sampler
/// - Config: command-line configuration problems
#[derive(Debug, Error)]
pub enum Error {
    /// Cipher primitive rejected its key or text
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Cracker could not run on the given ciphertext
    #[error("crack error: {0}")]
    Crack(#[from] CrackError),

    /// Word corpus could not be opened or read
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True if this error reports a key that violates its structural invariant.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Error::Cipher(err) if err.is_invalid_key())
    }

    /// True if this error comes from a cracker that is declared but not implemented.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Crack(CrackError::Unsupported { .. }))
    }
}

/// Cipher primitive errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Substitution key is not exactly one letter per alphabet position
    #[error("invalid key: substitution key must have 26 letters, got {length}")]
    SubstitutionKeyLength { length: usize },

    /// Substitution key maps two plain letters to the same cipher letter
    #[error("invalid key: substitution key repeats letter {letter:?}")]
    SubstitutionKeyRepeat { letter: char },

    /// Vigenère key has no letters to cycle over
    #[error("invalid key: vigenere key is empty")]
    EmptyVigenereKey,

    /// Key contains a character outside the alphabet
    #[error("invalid key: {letter:?} is not a lowercase latin letter")]
    InvalidKeyLetter { letter: char },

    /// Text contains a character outside the alphabet
    #[error("invalid text: {found:?} at position {position} is not a lowercase latin letter")]
    InvalidText { position: usize, found: char },
}

impl CipherError {
    /// True for every variant that describes a malformed key.
    pub fn is_invalid_key(&self) -> bool {
        !matches!(self, CipherError::InvalidText { .. })
    }
}

/// Cracker errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrackError {
    /// Zero-length ciphertext has no letter frequencies to analyse
    #[error("empty ciphertext: frequency analysis needs at least one letter")]
    EmptyInput,

    /// The cracker is declared but its attack is not implemented
    #[error("{cracker} does not support cracking yet")]
    Unsupported { cracker: &'static str },
}

/// Word corpus errors.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Corpus file could not be opened
    #[error("cannot open word corpus {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a line from the corpus failed part way through
    #[error("cannot read word corpus {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Corpus holds no line with a usable letter
    #[error("word corpus {corpus} has no words")]
    Empty { corpus: String },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

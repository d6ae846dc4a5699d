//! Plaintext sampling from a word corpus.
//!
//! Runners need plaintext with a realistic English letter distribution, so
//! instead of random letters we draw whole words from a dictionary and
//! concatenate them without separators.
//!
//! # Algorithm
//!
//! Reservoir sampling (Algorithm R, Knuth TAOCP 3.4.2). The reservoir has
//! `plaintext_length` slots. The first `plaintext_length` words fill it
//! directly; word `i` after that replaces slot `r` when a uniform draw
//! `r in [0, i]` lands below `plaintext_length`. Every corpus word ends up
//! in the sample with probability `plaintext_length / corpus_size`, and
//! only the reservoir is ever held in memory.
//!
//! # Corpus normalisation
//!
//! Dictionary lines are lowercased and reduced to ASCII letters. Lines left
//! empty by this are skipped and do not count towards the stream index.
//! A corpus with fewer words than `plaintext_length` yields all its words,
//! in corpus order. A corpus with no words at all is an error.

use crate::alphabet;
use crate::error::{CorpusError, Result};
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Dictionary shipped with most UNIX systems.
pub const DEFAULT_WORD_FILE: &str = "/usr/share/dict/words";

/// A one-word-per-line text source.
#[derive(Debug, Clone)]
pub enum Corpus {
    /// Read from a file, opened afresh for every sample
    File(PathBuf),
    /// Lines already in memory
    Lines(Arc<[String]>),
}

impl Corpus {
    /// Corpus backed by the file at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Corpus::File(path.into())
    }

    /// Corpus backed by in-memory lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Corpus::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Draw a plaintext of `plaintext_length` words from the corpus.
    ///
    /// # Errors
    /// `CorpusError::Unavailable` if the corpus file cannot be opened,
    /// `CorpusError::Read` if reading fails part way through,
    /// `CorpusError::Empty` if a non-zero length is asked of a corpus with
    /// no usable words.
    pub fn generate_plaintext<R: Rng + ?Sized>(
        &self,
        plaintext_length: usize,
        rng: &mut R,
    ) -> Result<String> {
        let mut reservoir = Reservoir::new(plaintext_length);

        match self {
            Corpus::File(path) => {
                let file = File::open(path).map_err(|source| CorpusError::Unavailable {
                    path: path.clone(),
                    source,
                })?;
                if plaintext_length > 0 {
                    sample_reader(BufReader::new(file), path, &mut reservoir, rng)?;
                }
            }
            Corpus::Lines(lines) => {
                for line in lines.iter() {
                    reservoir.offer(alphabet::normalize_word(line), rng);
                }
            }
        }

        log::debug!(
            "sampled {} of {} corpus words",
            reservoir.len(),
            reservoir.seen()
        );
        if plaintext_length > 0 && reservoir.is_empty() {
            return Err(CorpusError::Empty {
                corpus: self.describe(),
            }
            .into());
        }
        Ok(reservoir.concat())
    }

    fn describe(&self) -> String {
        match self {
            Corpus::File(path) => path.display().to_string(),
            Corpus::Lines(lines) => format!("<{} in-memory lines>", lines.len()),
        }
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Corpus::file(DEFAULT_WORD_FILE)
    }
}

/// Feed every line of `reader` to the reservoir.
///
/// Lines are split on raw bytes and decoded lossily, so a dictionary with a
/// stray non-UTF-8 entry still samples; the bad bytes are dropped by
/// normalisation like any other non-letter.
fn sample_reader<B: BufRead, R: Rng + ?Sized>(
    reader: B,
    path: &Path,
    reservoir: &mut Reservoir,
    rng: &mut R,
) -> Result<()> {
    for line in reader.split(b'\n') {
        let line = line.map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        reservoir.offer(alphabet::normalize_word(&String::from_utf8_lossy(&line)), rng);
    }
    Ok(())
}

/// Fixed-capacity uniform sample over a stream of words.
#[derive(Debug, Clone)]
pub struct Reservoir {
    slots: Vec<String>,
    capacity: usize,
    seen: usize,
}

impl Reservoir {
    /// Create an empty reservoir holding at most `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
            seen: 0,
        }
    }

    /// Offer the next word of the stream. Empty words are ignored.
    pub fn offer<R: Rng + ?Sized>(&mut self, word: String, rng: &mut R) {
        if word.is_empty() {
            return;
        }

        let i = self.seen;
        self.seen += 1;

        if i < self.capacity {
            self.slots.push(word);
        } else {
            let r = rng.gen_range(0..=i);
            if r < self.capacity {
                self.slots[r] = word;
            }
        }
    }

    /// Number of words offered so far (excluding skipped empty ones).
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Number of words currently held.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no word has been kept.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Concatenate the held words in slot order.
    pub fn concat(self) -> String {
        self.slots.concat()
    }
}

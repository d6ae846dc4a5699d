//! Letter-frequency tables and the chi-square distance between them.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::Result;

/// Average letter frequencies of English text, in percent, `'a'` first.
pub const ENGLISH_PERCENTAGES: [f64; ALPHABET_LEN] = [
    8.2, 1.5, 2.8, 4.2, 12.7, 2.2, 2.0, 6.1, 7.0, 0.1, 0.8, 4.0, 2.4, 6.7, 7.5, 1.9, 0.1, 6.0,
    6.3, 9.0, 2.8, 1.0, 2.4, 0.1, 2.0, 0.1,
];

/// Relative frequency of each alphabet letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyTable {
    frequencies: [f64; ALPHABET_LEN],
}

impl FrequencyTable {
    /// The English reference table, as proportions.
    pub fn english() -> Self {
        Self {
            frequencies: ENGLISH_PERCENTAGES.map(|p| p / 100.0),
        }
    }

    /// Measure the letter frequencies of `text`.
    ///
    /// An empty text yields an all-zero table; callers that divide by the
    /// text length must reject empty input themselves.
    pub fn measure(text: &str) -> Result<Self> {
        let indices = alphabet::to_indices(text)?;
        let mut frequencies = [0.0; ALPHABET_LEN];
        if indices.is_empty() {
            return Ok(Self { frequencies });
        }

        for &i in &indices {
            frequencies[i] += 1.0;
        }
        let len = indices.len() as f64;
        for f in frequencies.iter_mut() {
            *f /= len;
        }
        Ok(Self { frequencies })
    }

    /// Table re-indexed under the hypothesis that every letter was shifted
    /// forward by `shift`: position `i` holds the frequency of letter `i + shift`.
    pub fn aligned(&self, shift: usize) -> Self {
        let mut frequencies = self.frequencies;
        frequencies.rotate_left(shift % ALPHABET_LEN);
        Self { frequencies }
    }

    /// Chi-square statistic of `self` (observed) against `expected`.
    ///
    /// `expected` must have no zero entries.
    pub fn chi_square(&self, expected: &FrequencyTable) -> f64 {
        self.frequencies
            .iter()
            .zip(expected.frequencies.iter())
            .map(|(o, e)| (o - e).powi(2) / e)
            .sum()
    }
}

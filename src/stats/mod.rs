//! Partial and aggregate counting statistics
//!
//! A worker reports a [`PartialResult`]; the coordinator folds all partials
//! into an [`AggregateReport`]. Aggregation is plain addition, so it is
//! commutative: the order in which worker results are folded never changes
//! the totals.

pub mod aggregator;

use serde::{Deserialize, Serialize};

/// Word and vowel counts contributed by one worker
///
/// Defaults to `{0, 0}`, which is also the value attributed to a worker
/// whose result file is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialResult {
    /// Number of words in the worker's line range
    pub words: u64,
    /// Number of vowels in the worker's line range
    pub vowels: u64,
}

impl PartialResult {
    /// Fold another partial result into this one
    pub fn add(&mut self, other: &PartialResult) {
        self.words += other.words;
        self.vowels += other.vowels;
    }
}

/// Final totals across all workers for one input file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub total_words: u64,
    pub total_vowels: u64,
    /// `total_vowels / total_words`, or `0.0` when there are no words
    pub average_vowels_per_word: f64,
}

impl AggregateReport {
    /// Build a report from summed totals, guarding the zero-word case
    pub fn from_totals(total_words: u64, total_vowels: u64) -> Self {
        let average_vowels_per_word = if total_words == 0 {
            0.0
        } else {
            total_vowels as f64 / total_words as f64
        };

        Self {
            total_words,
            total_vowels,
            average_vowels_per_word,
        }
    }
}

//! Worker result file format
//!
//! A worker hands its partial counts back to the coordinator through a small
//! UTF-8 text file of `key=value` lines:
//!
//! ```text
//! words=42
//! vowels=97
//! ```
//!
//! Line order is not significant. Both values are unsigned integer counts;
//! the legacy key spellings `palabras` and `vocales` (from the original tool
//! this replaces) are accepted on read. Parsing is tolerant by design: an
//! unknown line is ignored, and a missing or unparsable value contributes 0
//! for that metric only, surfaced as a [`ParseIssue`] the collector logs.

use crate::stats::PartialResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Key for the word count field
pub const WORDS_KEY: &str = "words";
/// Key for the vowel count field
pub const VOWELS_KEY: &str = "vowels";

// Key spellings written by the original Java tool
const LEGACY_WORDS_KEY: &str = "palabras";
const LEGACY_VOWELS_KEY: &str = "vocales";

/// A non-fatal problem found while parsing a result file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIssue {
    /// A recognized key carried a value that is not an unsigned integer
    #[error("unparsable value for '{key}': '{value}'")]
    BadValue { key: String, value: String },
}

/// A parsed result file: the counts plus any per-field diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResult {
    pub partial: PartialResult,
    pub issues: Vec<ParseIssue>,
}

/// Write a result file for the given counts
///
/// Always writes both lines, even for a `{0,0}` result from an empty range.
pub fn write_result(path: &Path, partial: &PartialResult) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}={}", WORDS_KEY, partial.words)?;
    writeln!(writer, "{}={}", VOWELS_KEY, partial.vowels)?;
    writer.flush()
}

/// Parse the text of a result file
///
/// Each field defaults to 0 independently: a bad word count does not affect
/// the vowel count, and vice versa. If a key appears more than once the last
/// occurrence wins.
pub fn parse_result(text: &str) -> ParsedResult {
    let mut partial = PartialResult::default();
    let mut issues = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if let Some(value) = field_value(line, WORDS_KEY, LEGACY_WORDS_KEY) {
            match value.parse::<u64>() {
                Ok(n) => partial.words = n,
                Err(_) => issues.push(ParseIssue::BadValue {
                    key: WORDS_KEY.to_string(),
                    value: value.to_string(),
                }),
            }
        } else if let Some(value) = field_value(line, VOWELS_KEY, LEGACY_VOWELS_KEY) {
            match value.parse::<u64>() {
                Ok(n) => partial.vowels = n,
                Err(_) => issues.push(ParseIssue::BadValue {
                    key: VOWELS_KEY.to_string(),
                    value: value.to_string(),
                }),
            }
        }
        // Unknown keys and blank lines are ignored
    }

    ParsedResult { partial, issues }
}

/// Extract the value of a `key=value` line matching either key spelling
fn field_value<'a>(line: &'a str, key: &str, legacy_key: &str) -> Option<&'a str> {
    for k in [key, legacy_key] {
        if let Some(rest) = line.strip_prefix(k) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(value.trim());
            }
        }
    }
    None
}

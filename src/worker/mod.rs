//! Worker process implementation
//!
//! A worker is spawned by the coordinator with `--mode worker` and processes
//! exactly one line range of the input file: it tokenizes each assigned line
//! on whitespace, normalizes every word (lowercase, Unicode NFD, combining
//! marks stripped so accented vowels count), tallies words and `aeiou`
//! vowels, and writes its partial result file. Workers share nothing with
//! each other; the result file is their only output that matters.

use crate::config::cli::Cli;
use crate::protocol;
use crate::stats::PartialResult;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Worker failure, mapped to the process exit code in main
#[derive(Debug, Error)]
pub enum WorkerError {
    /// Invalid invocation (exit code 1)
    #[error("invalid worker invocation: {0}")]
    Usage(String),

    /// I/O failure reading the input or writing the result (exit code 2)
    #[error("I/O error in worker: {0}")]
    Io(#[from] std::io::Error),
}

/// Arguments of one worker invocation
#[derive(Debug, Clone)]
pub struct WorkerArgs {
    /// Input file to read
    pub input: PathBuf,
    /// First line of the assigned range, inclusive; clamped to 0
    pub start: i64,
    /// Last line of the assigned range, inclusive; may exceed EOF
    pub end: i64,
    /// Result file to write
    pub output: PathBuf,
}

impl WorkerArgs {
    /// Extract the worker arguments from a `--mode worker` invocation
    pub fn from_cli(cli: &Cli) -> Result<Self, WorkerError> {
        match (&cli.input, cli.start, cli.end, &cli.output) {
            (Some(input), Some(start), Some(end), Some(output)) => Ok(Self {
                input: input.clone(),
                start,
                end,
                output: output.clone(),
            }),
            _ => Err(WorkerError::Usage(
                "--input, --start, --end and --output are required".to_string(),
            )),
        }
    }
}

/// Process the assigned line range and write the result file
///
/// The range is inclusive on both ends. A `start` below 0 is clamped to 0;
/// an `end` past the last line stops at end-of-file without error; an empty
/// range (`end < start`) still writes a `{0,0}` result file.
pub fn run(args: &WorkerArgs) -> Result<PartialResult, WorkerError> {
    let start = args.start.max(0);
    let reader = BufReader::new(File::open(&args.input)?);

    let mut partial = PartialResult::default();

    for (index, line) in reader.lines().enumerate() {
        let index = index as i64;
        if index > args.end {
            break;
        }

        let line = line?;
        if index < start {
            continue;
        }

        for word in line.split_whitespace() {
            let normalized = normalize_word(word);
            if normalized.is_empty() {
                continue;
            }

            partial.words += 1;
            partial.vowels += count_vowels(&normalized);
        }
    }

    protocol::write_result(&args.output, &partial)?;
    Ok(partial)
}

/// Lowercase a word and strip diacritics
///
/// NFD decomposition separates base characters from combining marks, so
/// dropping the marks turns `á` into `a` before vowels are counted.
fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Count the `aeiou` vowels in a normalized word
fn count_vowels(word: &str) -> u64 {
    word.chars().filter(|c| "aeiou".contains(*c)).count() as u64
}

//! JSON report output
//!
//! Serializes the same report the text output prints: per-worker
//! contributions in index order plus the aggregate totals, stamped with a
//! generation timestamp. The output path may be a directory, in which case
//! each input file gets its own `<stem>.json` inside it.

use crate::stats::aggregator::ReportAggregator;
use crate::stats::AggregateReport;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// JSON report for one input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Input file the report describes
    pub input: String,
    /// RFC 3339 generation timestamp
    pub generated_at: String,
    /// Per-worker contributions, in worker index order
    pub workers: Vec<JsonWorker>,
    pub totals: AggregateReport,
}

/// One worker's contribution in the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonWorker {
    pub index: usize,
    pub words: u64,
    pub vowels: u64,
}

impl JsonReport {
    /// Build the report value for one input file
    pub fn build(input: &Path, aggregator: &ReportAggregator) -> Self {
        let workers = aggregator
            .worker_ids()
            .into_iter()
            .filter_map(|index| {
                aggregator.worker_result(index).map(|partial| JsonWorker {
                    index,
                    words: partial.words,
                    vowels: partial.vowels,
                })
            })
            .collect();

        Self {
            input: input.display().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            workers,
            totals: aggregator.aggregate(),
        }
    }
}

/// Resolve the report path: a directory gets `<input stem>.json` inside it
pub fn report_path(json_output: &Path, input: &Path) -> PathBuf {
    if json_output.is_dir() {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("report");
        json_output.join(format!("{}.json", stem))
    } else {
        json_output.to_path_buf()
    }
}

/// Write the JSON report for one input file
pub fn write_report(
    json_output: &Path,
    input: &Path,
    aggregator: &ReportAggregator,
) -> Result<()> {
    let path = report_path(json_output, input);
    let report = JsonReport::build(input, aggregator);

    let file = File::create(&path)
        .with_context(|| format!("Failed to create JSON report '{}'", path.display()))?;
    serde_json::to_writer_pretty(file, &report)
        .with_context(|| format!("Failed to write JSON report '{}'", path.display()))?;

    println!("JSON report written to {}", path.display());
    Ok(())
}

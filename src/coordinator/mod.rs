//! Coordinator module
//!
//! Orchestrates the processing of each input file: count lines, partition
//! into balanced ranges, fan out one worker process per range, wait for the
//! fleet, and aggregate the result files into the final report. The flow is
//! strictly sequential per file — partition, launch, wait, parse, report —
//! and the coordinator itself never spawns threads.

pub mod collector;
pub mod launcher;

use crate::config::Config;
use crate::output;
use crate::partition;
use crate::stats::AggregateReport;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Coordinator that processes input files with a fleet of worker processes
pub struct Coordinator {
    config: Config,
    /// Executable spawned in worker mode (normally the coordinator itself)
    worker_program: PathBuf,
}

impl Coordinator {
    /// Create a coordinator for the given configuration
    pub fn new(config: Config, worker_program: PathBuf) -> Self {
        Self {
            config,
            worker_program,
        }
    }

    /// Process every configured input file
    ///
    /// An unreadable input is fatal for that file only; the batch continues
    /// with the remaining files, matching the per-file error taxonomy.
    pub fn run(&self) -> Result<()> {
        for input in &self.config.inputs {
            println!();
            println!("=== Processing file: {} ===", input.display());

            if let Err(e) = self.process_file(input) {
                eprintln!("Error processing '{}': {:#}", input.display(), e);
            }
        }

        Ok(())
    }

    /// Partition, launch, collect, and report one input file
    pub fn process_file(&self, input: &Path) -> Result<AggregateReport> {
        let total_lines = count_lines(input)
            .with_context(|| format!("Failed to read input file '{}'", input.display()))?;
        println!(
            "File '{}' -> {} lines. Launching {} workers.",
            input.display(),
            total_lines,
            self.config.workers
        );

        let ranges = partition::partition(total_lines, self.config.workers);
        let workers = launcher::launch(
            &self.worker_program,
            input,
            &ranges,
            self.config.runtime.debug,
        );
        let aggregator = collector::collect(workers);

        output::text::print_report(&aggregator);

        if let Some(json_output) = &self.config.output.json_output {
            output::json::write_report(json_output, input, &aggregator)?;
        }

        Ok(aggregator.aggregate())
    }
}

/// Count the lines of a file without holding them in memory
fn count_lines(path: &Path) -> std::io::Result<u64> {
    let reader = BufReader::new(File::open(path)?);
    let mut count = 0u64;

    for line in reader.lines() {
        line?;
        count += 1;
    }

    Ok(count)
}

//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExecutionMode {
    /// Coordinator mode (default) - partition, launch workers, aggregate
    Coordinator,
    /// Worker mode - process one line range (spawned by the coordinator)
    Worker,
}

/// TextPulse - Parallel word and vowel counting
#[derive(Parser, Debug)]
#[command(name = "textpulse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Execution mode: coordinator or worker
    #[arg(long, value_enum, default_value = "coordinator")]
    pub mode: ExecutionMode,

    /// Input files, optionally mixed with a worker count
    ///
    /// Any argument that parses as an integer selects the number of workers
    /// (the last one wins); every other argument is an input file path.
    #[arg(value_name = "FILE|WORKERS")]
    pub args: Vec<String>,

    // === Output Options ===
    /// JSON report output path (file, or directory for per-input files)
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    // === Configuration File ===
    /// TOML configuration file with defaults (CLI arguments win)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Enable debug output (worker command lines, per-worker log files)
    #[arg(long)]
    pub debug: bool,

    // === Worker Mode Options ===
    /// Input file to read (worker mode only)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// First line of the assigned range, inclusive (worker mode only)
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<i64>,

    /// Last line of the assigned range, inclusive (worker mode only)
    #[arg(long, allow_hyphen_values = true)]
    pub end: Option<i64>,

    /// Result file to write (worker mode only)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Split the positional arguments into input files and a worker count
    ///
    /// Mirrors the original tool's argument convention: every positional that
    /// parses as an integer is a worker-count candidate and the last one
    /// wins; everything else is an input file. Validation of the candidate
    /// (positive, fallback to the default) happens in `Config`.
    pub fn classify_args(&self) -> (Vec<PathBuf>, Option<i64>) {
        let mut inputs = Vec::new();
        let mut workers = None;

        for arg in &self.args {
            match arg.parse::<i64>() {
                Ok(n) => workers = Some(n),
                Err(_) => inputs.push(PathBuf::from(arg)),
            }
        }

        (inputs, workers)
    }

    /// Validate CLI arguments
    ///
    /// Worker mode validates through `WorkerArgs::from_cli` instead, so its
    /// failures map to the worker's usage exit code.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.mode == ExecutionMode::Worker {
            return Ok(());
        }

        if self.args.is_empty() {
            anyhow::bail!(
                "no input files provided\nUsage: textpulse <file1> [file2 ...] [workers]"
            );
        }

        Ok(())
    }
}

//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod file;

use anyhow::Result;
use cli::Cli;
use file::FileConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of workers when none is given
pub const DEFAULT_WORKERS: usize = 4;

/// Complete coordinator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input files to process, in order
    pub inputs: Vec<PathBuf>,
    /// Number of worker processes per input file
    pub workers: usize,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON report path (file, or directory for per-input files)
    pub json_output: Option<PathBuf>,
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Emit debug diagnostics and per-worker log files
    pub debug: bool,
}

impl Config {
    /// Build the configuration from CLI arguments and the optional TOML file
    ///
    /// Precedence: CLI positionals/flags, then config-file values, then
    /// built-in defaults. A non-positive worker count from either source
    /// falls back to the default with a warning.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let file_config = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let (inputs, cli_workers) = cli.classify_args();
        let workers = resolve_workers(cli_workers.or(file_config.workers));

        Ok(Self {
            inputs,
            workers,
            output: OutputConfig {
                json_output: cli
                    .json_output
                    .clone()
                    .or(file_config.output.json_output),
            },
            runtime: RuntimeConfig { debug: cli.debug },
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            anyhow::bail!("no input files provided");
        }

        let cores = num_cpus::get();
        if self.workers > cores {
            eprintln!(
                "Warning: {} workers exceed the {} available CPU cores",
                self.workers, cores
            );
        }

        if self.inputs.len() > 1 {
            if let Some(path) = &self.output.json_output {
                if !path.is_dir() {
                    eprintln!(
                        "Warning: JSON report '{}' is overwritten per input file; \
                         pass a directory to keep one report per file",
                        path.display()
                    );
                }
            }
        }

        Ok(())
    }
}

/// Resolve a requested worker count, falling back to the default
///
/// The original tool accepted any integer argument as the worker count; a
/// non-positive value is downgraded to the default rather than rejected.
fn resolve_workers(requested: Option<i64>) -> usize {
    match requested {
        Some(n) if n > 0 => n as usize,
        Some(n) => {
            eprintln!(
                "Warning: worker count {} is not positive, using default ({})",
                n, DEFAULT_WORKERS
            );
            DEFAULT_WORKERS
        }
        None => DEFAULT_WORKERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::ExecutionMode;

    fn cli_with_args(args: &[&str]) -> Cli {
        Cli {
            mode: ExecutionMode::Coordinator,
            args: args.iter().map(|s| s.to_string()).collect(),
            json_output: None,
            config: None,
            debug: false,
            input: None,
            start: None,
            end: None,
            output: None,
        }
    }

    #[test]
    fn test_default_workers() {
        let config = Config::from_cli(&cli_with_args(&["a.txt"])).unwrap();
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert_eq!(config.inputs, vec![PathBuf::from("a.txt")]);
    }

    #[test]
    fn test_explicit_workers() {
        let config = Config::from_cli(&cli_with_args(&["a.txt", "3"])).unwrap();
        assert_eq!(config.workers, 3);
    }

    #[test]
    fn test_non_positive_workers_fall_back() {
        let config = Config::from_cli(&cli_with_args(&["a.txt", "0"])).unwrap();
        assert_eq!(config.workers, DEFAULT_WORKERS);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("textpulse.toml");
        std::fs::write(&path, "workers = 8\n").unwrap();

        let mut cli = cli_with_args(&["a.txt", "3"]);
        cli.config = Some(path.clone());
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.workers, 3);

        let cli_no_count = {
            let mut cli = cli_with_args(&["a.txt"]);
            cli.config = Some(path);
            cli
        };
        let config = Config::from_cli(&cli_no_count).unwrap();
        assert_eq!(config.workers, 8);
    }

    #[test]
    fn test_validate_requires_inputs() {
        let config = Config {
            inputs: vec![],
            workers: 4,
            output: OutputConfig::default(),
            runtime: RuntimeConfig::default(),
        };
        assert!(config.validate().is_err());
    }
}

//! TextPulse CLI entry point

use anyhow::{Context, Result};
use textpulse::config::cli::{Cli, ExecutionMode};
use textpulse::config::Config;
use textpulse::coordinator::Coordinator;
use textpulse::worker::{self, WorkerArgs, WorkerError};

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.validate()?;

    match cli.mode {
        ExecutionMode::Coordinator => run_coordinator(cli),
        ExecutionMode::Worker => run_worker(cli),
    }
}

/// Run in coordinator mode: partition, launch workers, aggregate, report
fn run_coordinator(cli: Cli) -> Result<()> {
    println!("TextPulse v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_cli(&cli)?;
    config.validate()?;

    if cli.debug {
        eprintln!(
            "DEBUG: {} input file(s), {} workers per file",
            config.inputs.len(),
            config.workers
        );
    }

    // Workers are launched by re-invoking this executable in worker mode
    let worker_program = std::env::current_exe()
        .context("Failed to resolve the current executable for worker launches")?;

    Coordinator::new(config, worker_program).run()
}

/// Run in worker mode, mapping failures to the worker exit codes
///
/// Exit codes: 1 for an invalid invocation, 2 for an I/O failure. The
/// coordinator reads these back when it logs worker completion.
fn run_worker(cli: Cli) -> Result<()> {
    match WorkerArgs::from_cli(&cli).and_then(|args| worker::run(&args)) {
        Ok(_) => Ok(()),
        Err(e @ WorkerError::Usage(_)) => {
            eprintln!("{}", e);
            eprintln!(
                "Usage: textpulse --mode worker --input <file> --start <n> --end <n> --output <file>"
            );
            std::process::exit(1);
        }
        Err(e @ WorkerError::Io(_)) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    }
}

//! Worker process launch
//!
//! Starts one OS process per line range by re-invoking the coordinator's own
//! executable in worker mode. Each worker gets a unique result path derived
//! from the input's base name and the worker index, so concurrent workers
//! never write to the same file. A spawn failure is recorded as an empty
//! slot and never aborts the rest of the batch.

use crate::partition::LineRange;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// A unit of work handed to one worker process
///
/// Created before spawning and immutable afterwards. The index-to-output-path
/// association established here is what the collector uses to attribute
/// results, regardless of completion order.
#[derive(Debug, Clone)]
pub struct WorkerTask {
    /// 1-based worker index
    pub index: usize,
    /// Assigned line range
    pub range: LineRange,
    /// Result file the worker writes
    pub output_path: PathBuf,
}

/// A launched worker slot
#[derive(Debug)]
pub struct LaunchedWorker {
    pub task: WorkerTask,
    /// Process handle; `None` when the spawn itself failed
    pub child: Option<Child>,
}

/// Derive the result file path for one worker: `<input stem>_worker<i>.res`
pub fn result_path(input: &Path, index: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("input");
    PathBuf::from(format!("{}_worker{}.res", stem, index))
}

/// Launch one worker process per range
///
/// Returns a slot per range, in range order. Slots whose spawn failed carry
/// `child: None`; their result paths are still checked later so the
/// collector's missing-file handling reports them.
pub fn launch(
    program: &Path,
    input: &Path,
    ranges: &[LineRange],
    debug: bool,
) -> Vec<LaunchedWorker> {
    let mut workers = Vec::with_capacity(ranges.len());

    for (i, range) in ranges.iter().enumerate() {
        let task = WorkerTask {
            index: i + 1,
            range: *range,
            output_path: result_path(input, i + 1),
        };

        let mut command = worker_command(program, input, &task);
        let spawned = configure_stdio(&mut command, &task, debug)
            .and_then(|()| command.spawn().context("spawn failed"));

        match spawned {
            Ok(child) => {
                println!(
                    "Launched worker {}: lines {} -> {}",
                    task.index,
                    task.range,
                    task.output_path.display()
                );
                workers.push(LaunchedWorker {
                    task,
                    child: Some(child),
                });
            }
            Err(e) => {
                eprintln!("Error launching worker {}: {:#}", task.index, e);
                workers.push(LaunchedWorker { task, child: None });
            }
        }
    }

    workers
}

/// Build the worker-mode command line for one task
fn worker_command(program: &Path, input: &Path, task: &WorkerTask) -> Command {
    let mut command = Command::new(program);
    command
        .arg("--mode")
        .arg("worker")
        .arg("--input")
        .arg(input)
        .arg("--start")
        .arg(task.range.start.to_string())
        .arg("--end")
        .arg(task.range.end.to_string())
        .arg("--output")
        .arg(&task.output_path);
    command
}

/// Route the worker's output streams
///
/// In debug mode both stdout and stderr go to one per-worker log file (a
/// merged stream, via a cloned handle); otherwise both are inherited from
/// the coordinator. Worker output is observational only.
fn configure_stdio(command: &mut Command, task: &WorkerTask, debug: bool) -> Result<()> {
    if debug {
        let log_path = task.output_path.with_extension("log");
        let log_file = File::create(&log_path)
            .with_context(|| format!("Failed to create worker log '{}'", log_path.display()))?;
        command.stdout(Stdio::from(log_file.try_clone()?));
        command.stderr(Stdio::from(log_file));
        eprintln!("DEBUG: Worker {} log: {}", task.index, log_path.display());
    } else {
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_result_path_naming() {
        assert_eq!(
            result_path(Path::new("corpus.txt"), 1),
            PathBuf::from("corpus_worker1.res")
        );
        assert_eq!(
            result_path(Path::new("data/novel.text"), 3),
            PathBuf::from("novel_worker3.res")
        );
    }

    #[test]
    fn test_result_paths_unique_per_index() {
        let a = result_path(Path::new("corpus.txt"), 1);
        let b = result_path(Path::new("corpus.txt"), 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_worker_command_arguments() {
        let task = WorkerTask {
            index: 2,
            range: LineRange { start: 4, end: 6 },
            output_path: PathBuf::from("corpus_worker2.res"),
        };
        let command = worker_command(Path::new("/usr/bin/textpulse"), Path::new("corpus.txt"), &task);

        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(
            args,
            vec![
                OsStr::new("--mode"),
                OsStr::new("worker"),
                OsStr::new("--input"),
                OsStr::new("corpus.txt"),
                OsStr::new("--start"),
                OsStr::new("4"),
                OsStr::new("--end"),
                OsStr::new("6"),
                OsStr::new("--output"),
                OsStr::new("corpus_worker2.res"),
            ]
        );
    }

    #[test]
    fn test_empty_range_encodes_end_minus_one() {
        let task = WorkerTask {
            index: 1,
            range: LineRange { start: 0, end: -1 },
            output_path: PathBuf::from("corpus_worker1.res"),
        };
        let command = worker_command(Path::new("textpulse"), Path::new("corpus.txt"), &task);

        let args: Vec<&OsStr> = command.get_args().collect();
        assert!(args.contains(&OsStr::new("-1")));
    }

    #[test]
    fn test_spawn_failure_records_empty_slot() {
        let ranges = vec![
            LineRange { start: 0, end: 1 },
            LineRange { start: 2, end: 3 },
        ];
        let workers = launch(
            Path::new("/nonexistent/textpulse-worker"),
            Path::new("corpus.txt"),
            &ranges,
            false,
        );

        assert_eq!(workers.len(), 2);
        for (i, worker) in workers.iter().enumerate() {
            assert!(worker.child.is_none());
            assert_eq!(worker.task.index, i + 1);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_spawns_one_process_per_range() {
        // /bin/true ignores the worker arguments; this only checks the fan-out
        let ranges = vec![
            LineRange { start: 0, end: 4 },
            LineRange { start: 5, end: 9 },
            LineRange { start: 10, end: 14 },
        ];
        let mut workers = launch(Path::new("/bin/true"), Path::new("corpus.txt"), &ranges, false);

        assert_eq!(workers.len(), 3);
        for worker in &mut workers {
            let child = worker.child.as_mut().expect("spawn should succeed");
            let status = child.wait().unwrap();
            assert!(status.success());
        }
    }
}

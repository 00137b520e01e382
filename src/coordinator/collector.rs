//! Result collection and aggregation
//!
//! The fan-in side of the coordinator: wait for every launched worker, then
//! read each result file in index order and fold the partials into the
//! aggregator. Collection is best-effort by design — a missing or malformed
//! result contributes zero with a warning, and nothing here is fatal.

use crate::coordinator::launcher::LaunchedWorker;
use crate::protocol;
use crate::stats::aggregator::ReportAggregator;
use crate::stats::PartialResult;

/// Wait for all workers and aggregate their result files
///
/// Waiting happens in launch order; the workers finish in whatever order
/// they like, and attribution stays correct because each slot carries its
/// own output path from launch time. Failed-launch slots (`child: None`)
/// are skipped at the wait barrier and surface as missing result files.
pub fn collect(mut workers: Vec<LaunchedWorker>) -> ReportAggregator {
    for worker in &mut workers {
        let Some(child) = worker.child.as_mut() else {
            continue;
        };

        match child.wait() {
            Ok(status) => match status.code() {
                Some(code) => {
                    println!("Worker {} finished with exit code {}", worker.task.index, code)
                }
                None => println!(
                    "Worker {} terminated abnormally ({})",
                    worker.task.index, status
                ),
            },
            // A failed wait never aborts collection of the remaining workers
            Err(e) => eprintln!("Error waiting for worker {}: {}", worker.task.index, e),
        }
    }

    let mut aggregator = ReportAggregator::new();
    for worker in &workers {
        aggregator.add_worker(worker.task.index, read_partial(worker));
    }

    aggregator
}

/// Read and parse one worker's result file, defaulting to `{0,0}`
fn read_partial(worker: &LaunchedWorker) -> PartialResult {
    let path = &worker.task.output_path;

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!(
                "Warning: result file '{}' missing for worker {}: {}",
                path.display(),
                worker.task.index,
                e
            );
            return PartialResult::default();
        }
    };

    let parsed = protocol::parse_result(&text);
    for issue in &parsed.issues {
        eprintln!(
            "Warning: result file '{}' for worker {}: {}",
            path.display(),
            worker.task.index,
            issue
        );
    }

    parsed.partial
}

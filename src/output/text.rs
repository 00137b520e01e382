//! Human-readable report output

use crate::stats::aggregator::ReportAggregator;

/// Print the per-worker breakdown and the aggregate report
///
/// Purely presentational: every number comes from the aggregator, and the
/// per-worker lines appear in worker index order before the totals.
pub fn print_report(aggregator: &ReportAggregator) {
    println!("=== Partial results ===");
    for index in aggregator.worker_ids() {
        if let Some(partial) = aggregator.worker_result(index) {
            println!(
                "Worker {} -> words={}, vowels={}",
                index, partial.words, partial.vowels
            );
        }
    }

    let report = aggregator.aggregate();

    println!("═══════════════════════════════════════════════════════════");
    println!("                    AGGREGATE REPORT");
    println!("═══════════════════════════════════════════════════════════");
    println!("Total words:  {}", report.total_words);
    println!("Total vowels: {}", report.total_vowels);
    println!(
        "Average vowels per word: {:.4}",
        report.average_vowels_per_word
    );
    println!("═══════════════════════════════════════════════════════════");
}

//! End-of-run summary printed to stdout.

use discoverer_core::reindex::ReindexReport;

pub fn print_report(report: &ReindexReport) {
    println!("configs processed: {}", report.configs);
    println!("summaries written: {}", report.succeeded());
    println!("already present (skipped): {}", report.skipped);
    println!("failed: {}", report.failed());
    for failure in &report.failures {
        println!(
            "  [{}] {} ({}): {}",
            failure.kind, failure.site, failure.config, failure.message
        );
    }
}

//! Progress logging utilities.

use log::info;

use crate::error_handling::ProbeStats;

/// Logs how many probes have finished so far and the current rate.
pub fn log_progress(start_time: std::time::Instant, stats: &ProbeStats, total: usize) {
    let completed = stats.completed();
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Probed {}/{} pairs in {:.2} seconds (~{:.2} probes/sec), {} reported, {} failed",
        completed,
        total,
        elapsed_secs,
        rate,
        stats.emitted(),
        stats.failed()
    );
}

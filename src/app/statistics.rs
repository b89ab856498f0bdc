//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProbeStats};

/// Logs the outcome counts and a per-category breakdown of failures.
pub fn print_probe_statistics(stats: &ProbeStats, total: usize, elapsed_seconds: f64) {
    info!(
        "Probed {} pair{} in {:.1}s: {} reported, {} filtered, {} failed",
        total,
        if total == 1 { "" } else { "s" },
        elapsed_seconds,
        stats.emitted(),
        stats.filtered(),
        stats.failed()
    );

    if stats.failed() > 0 {
        info!("Failure Counts ({} total):", stats.failed());
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }
}

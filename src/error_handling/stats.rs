//! Probe statistics tracking.
//!
//! Thread-safe counters updated by every probe task and read once after the
//! dispatch barrier.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe probe statistics tracker.
///
/// Tracks how each probe ended (emitted, filtered, failed) and a per-category
/// count of failures, using atomic counters so it can be shared across tasks
/// through an `Arc`.
pub struct ProbeStats {
    emitted: AtomicUsize,
    filtered: AtomicUsize,
    failed: AtomicUsize,
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl Default for ProbeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        ProbeStats {
            emitted: AtomicUsize::new(0),
            filtered: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            errors,
        }
    }

    /// Records a response that passed the filter.
    pub fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a response suppressed by the filter.
    pub fn record_filtered(&self) {
        self.filtered.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed probe under its category.
    pub fn record_failure(&self, error: ErrorType) {
        self.failed.fetch_add(1, Ordering::Relaxed);
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProbeStats initialization.",
                error
            );
        }
    }

    /// Responses that passed the filter.
    pub fn emitted(&self) -> usize {
        self.emitted.load(Ordering::SeqCst)
    }

    /// Responses suppressed by the filter.
    pub fn filtered(&self) -> usize {
        self.filtered.load(Ordering::SeqCst)
    }

    /// Probes that ended in a failure.
    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }

    /// Probes that reached an outcome of any kind.
    pub fn completed(&self) -> usize {
        self.emitted() + self.filtered() + self.failed()
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }
}

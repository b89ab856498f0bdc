//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources used by
//! every probe:
//! - HTTP client (TLS settings, proxy, timeouts)
//! - Logger
//! - Concurrency semaphore

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// Creates a new semaphore with the specified permit count, used to limit the
/// number of probes in flight at once. A count of zero is raised to one so
/// the run can always make progress.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count.max(1)))
}

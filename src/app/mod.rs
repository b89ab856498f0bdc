//! Application plumbing around the probe engine.
//!
//! This module provides input loading, progress logging, shutdown handling,
//! and the end-of-run statistics summary.

pub mod input;
pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use input::{load_headers, read_lines};
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use statistics::print_probe_statistics;

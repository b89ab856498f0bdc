//! Error handling and probe statistics.
//!
//! This module provides:
//! - Setup error types (`InitializationError`, `InputError`)
//! - Per-probe failure categories (`ErrorType`) and their classification
//! - Thread-safe outcome counters (`ProbeStats`)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProbeStats;
pub use types::{ErrorType, InitializationError, InputError};

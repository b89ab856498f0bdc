//! Virtual-host probing engine.
//!
//! One probe is one GET to a host URL with the `Host` header replaced by a
//! domain. This module builds the per-probe request, applies the response
//! filter, and fans probes out over the hosts × domains cross product.

mod collector;
mod context;
mod dispatch;
mod filter;
mod headers;
mod message;
mod request;

use std::time::Duration;

pub use collector::{ResultCollector, ResultSink};
pub use context::ProbeContext;
pub use dispatch::dispatch;
pub use filter::{parse_content_length, FilterPolicy};
pub use headers::HeaderSet;
pub use message::ResultMessage;
pub use request::{execute_probe, ProbeOutcome, ProbeTarget};

/// Transport settings for the shared HTTP client.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Forward proxy URL; empty means direct connections.
    pub proxy: String,
    /// Skip certificate and hostname validation.
    pub accept_invalid_certs: bool,
    /// Overall per-request timeout.
    pub timeout: Duration,
}

/// Immutable per-run settings handed to every probe task.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    /// Which completed responses are reported.
    pub policy: FilterPolicy,
    /// Maximum number of probes in flight.
    pub max_concurrency: usize,
    /// Per-request timeout; the task deadline is this plus a small grace period.
    pub request_timeout: Duration,
}

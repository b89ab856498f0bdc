//! Shared, read-only resources for probe tasks.

use std::sync::Arc;

use crate::error_handling::ProbeStats;

use super::{HeaderSet, ProbeSettings};

/// Everything a probe task needs besides its own (host, domain) pair.
///
/// Built once per run and shared through an `Arc`. Only `stats` is written to,
/// and it is internally synchronized.
pub struct ProbeContext {
    /// Shared HTTP client.
    pub client: reqwest::Client,
    /// Headers applied to every request.
    pub headers: Arc<HeaderSet>,
    /// Filter, concurrency and timeout settings.
    pub settings: ProbeSettings,
    /// Outcome counters.
    pub stats: Arc<ProbeStats>,
}

impl ProbeContext {
    /// Bundles the shared resources for a run.
    pub fn new(
        client: reqwest::Client,
        headers: Arc<HeaderSet>,
        settings: ProbeSettings,
        stats: Arc<ProbeStats>,
    ) -> Self {
        Self {
            client,
            headers,
            settings,
            stats,
        }
    }
}

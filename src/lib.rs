//! vhost_probe library: virtual-host probing engine
//!
//! Sends one HTTP GET per (host, domain) pair, connecting to the host URL
//! while presenting the domain as the `Host` header. Servers that route on
//! `Host` answer differently for domains they serve, which exposes forgotten
//! virtual hosts, staging names and fronting behavior.
//!
//! # Example
//!
//! ```no_run
//! use vhost_probe::{run_probe, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     host_file: PathBuf::from("hosts.txt"),
//!     domain_file: PathBuf::from("domains.txt"),
//!     threads: 20,
//!     ..Default::default()
//! };
//!
//! let report = run_probe(config).await?;
//! for message in &report.messages {
//!     println!("{message}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod probe;

// Re-export public API
pub use app::{load_headers, read_lines};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ErrorType, InitializationError, InputError, ProbeStats};
pub use probe::{FilterPolicy, HeaderSet, ResultMessage};
pub use run::{run_probe, run_probe_with_cancel, RunReport};

// Internal run module (wires inputs, client and dispatcher together)
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{
        load_headers, log_progress, print_probe_statistics, read_lines, shutdown_gracefully,
    };
    use crate::config::{Config, LOGGING_INTERVAL};
    use crate::error_handling::ProbeStats;
    use crate::initialization::init_client;
    use crate::probe::{dispatch, ProbeContext, ResultMessage};

    /// Results of a probing run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of (host, domain) pairs, |hosts| × |domains|
        pub total_pairs: usize,
        /// Responses that passed the filter
        pub emitted: usize,
        /// Responses suppressed by the filter
        pub filtered: usize,
        /// Probes that ended in an error
        pub failed: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Reported messages, in no particular order
        pub messages: Vec<ResultMessage>,
    }

    /// Runs a probe with the provided configuration.
    ///
    /// Equivalent to [`run_probe_with_cancel`] with a token that is never cancelled.
    ///
    /// # Errors
    ///
    /// See [`run_probe_with_cancel`].
    pub async fn run_probe(config: Config) -> Result<RunReport> {
        run_probe_with_cancel(config, CancellationToken::new()).await
    }

    /// Runs a probe, stopping early when `cancel` fires.
    ///
    /// Reads both lists, loads the header set, builds the shared client and
    /// dispatches one probe per pair. Probes still pending when `cancel` fires
    /// are reported as cancelled; the call still returns a full report.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The host or domain list cannot be read (no probe is sent)
    /// - The HTTP client cannot be built
    pub async fn run_probe_with_cancel(
        config: Config,
        cancel: CancellationToken,
    ) -> Result<RunReport> {
        let hosts = read_lines(&config.host_file, "hosts")
            .await
            .context("Failed to read hosts file")?;
        let domains = read_lines(&config.domain_file, "domains")
            .await
            .context("Failed to read domains file")?;

        let headers = Arc::new(load_headers(config.header_file.as_deref()).await);
        let client =
            init_client(&config.client_settings()).context("Failed to initialize HTTP client")?;

        let total_pairs = hosts.len().saturating_mul(domains.len());
        info!(
            "Probing {} hosts with {} domains ({} requests, {} concurrent)",
            hosts.len(),
            domains.len(),
            total_pairs,
            config.probe_settings().max_concurrency
        );

        let stats = Arc::new(ProbeStats::new());
        let ctx = Arc::new(ProbeContext::new(
            client,
            headers,
            config.probe_settings(),
            Arc::clone(&stats),
        ));

        let start_time = Instant::now();

        let cancel_logging = CancellationToken::new();
        let logging_task = {
            let cancel_logging = cancel_logging.clone();
            let stats = Arc::clone(&stats);
            Some(tokio::task::spawn(async move {
                let mut interval =
                    tokio::time::interval(std::time::Duration::from_secs(LOGGING_INTERVAL));
                // The first tick completes immediately.
                interval.tick().await;
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            log_progress(start_time, &stats, total_pairs);
                        }
                        _ = cancel_logging.cancelled() => {
                            break;
                        }
                    }
                }
            }))
        };

        let messages = dispatch(ctx, &hosts, &domains, cancel).await;

        shutdown_gracefully(cancel_logging, logging_task).await;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_probe_statistics(&stats, total_pairs, elapsed_seconds);

        Ok(RunReport {
            total_pairs,
            emitted: stats.emitted(),
            filtered: stats.filtered(),
            failed: stats.failed(),
            elapsed_seconds,
            messages,
        })
    }
}

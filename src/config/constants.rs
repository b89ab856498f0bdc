//! Configuration constants.
//!
//! Defaults for the CLI options plus the fallback header set sent with every
//! probe when no header file is supplied.

use std::time::Duration;

/// Default number of concurrent in-flight probes.
pub const DEFAULT_THREADS: usize = 10;

/// Seconds between progress log lines while probes are running.
pub const LOGGING_INTERVAL: u64 = 5;

/// Default per-request deadline in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Grace period added on top of the client timeout before a task is abandoned.
///
/// The client enforces the per-request timeout itself; the outer deadline only
/// fires when something below reqwest stops making progress.
pub const TASK_DEADLINE_GRACE: Duration = Duration::from_secs(2);

/// Maximum number of redirect hops a probe follows.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent used when no header file is given.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

/// Default Accept-Language used when no header file is given.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Fallback header set. Never empty.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("User-Agent", DEFAULT_USER_AGENT),
    ("Accept-Language", DEFAULT_ACCEPT_LANGUAGE),
];

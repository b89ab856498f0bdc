//! Response filter policy.

use reqwest::StatusCode;

/// Decides whether a completed response is reported.
///
/// Rules, in order:
/// 1. A positive `min_content_length` suppresses any smaller response, even in verbose mode.
/// 2. Verbose mode reports every remaining status code.
/// 3. Otherwise only `200 OK` is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Minimum Content-Length to report; 0 disables the check.
    pub min_content_length: u64,
    /// Report non-200 responses too.
    pub verbose: bool,
}

impl FilterPolicy {
    /// True when a response with this status and length should be reported.
    pub fn admits(&self, status: StatusCode, content_length: u64) -> bool {
        if self.min_content_length > 0 && content_length < self.min_content_length {
            return false;
        }
        self.verbose || status == StatusCode::OK
    }
}

/// Parses a raw `Content-Length` header value for filtering.
///
/// Missing or unparseable values count as zero.
pub fn parse_content_length(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

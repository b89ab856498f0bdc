//! Error type definitions.
//!
//! Setup failures are typed with `thiserror`; per-probe failures are
//! categorised into `ErrorType` for the end-of-run summary.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure to load one of the line-oriented input lists.
#[derive(Error, Debug)]
pub enum InputError {
    /// The list file could not be opened or read.
    #[error("Failed to read {kind} file {}: {source}", path.display())]
    Unreadable {
        /// Which list was being read ("hosts" or "domains").
        kind: &'static str,
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Categories of per-probe failures.
///
/// Every failure message emitted by a probe is counted under exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Host is not a valid URL, or a header value is illegal.
    HttpRequestBuilderError,
    /// A redirect could not be followed, or the hop limit was reached.
    HttpRequestRedirectError,
    /// The client timeout elapsed.
    HttpRequestTimeoutError,
    /// The request failed after the connection was made.
    HttpRequestRequestError,
    /// The connection could not be established.
    HttpRequestConnectError,
    /// Reading the response body failed.
    HttpRequestBodyError,
    /// The response could not be decoded.
    HttpRequestDecodeError,
    /// Any other client error.
    HttpRequestOtherError,
    /// The outer per-task deadline elapsed.
    ProbeDeadlineExceeded,
    /// The run was interrupted before the probe finished.
    ProbeCancelled,
    /// The probe task panicked.
    ProbeTaskPanicked,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Label used in the statistics summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::ProbeDeadlineExceeded => "Probe deadline exceeded",
            ErrorType::ProbeCancelled => "Probe cancelled",
            ErrorType::ProbeTaskPanicked => "Probe task panicked",
        }
    }
}

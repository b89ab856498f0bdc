//! Result messages produced by probes.

use std::fmt;

use reqwest::StatusCode;

use crate::error_handling::ErrorType;

/// The reported outcome of one (host, domain) probe.
///
/// `Display` renders the line printed for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultMessage {
    /// A response that passed the filter.
    Response {
        /// URL the request was sent to.
        host: String,
        /// Value sent as the `Host` header.
        domain: String,
        /// Status of the final response.
        status: StatusCode,
        /// Raw `Content-Length` header text; empty when absent.
        content_length: String,
    },
    /// The probe did not produce a response.
    Failure {
        /// URL the request was sent to.
        host: String,
        /// Value sent as the `Host` header.
        domain: String,
        /// Failure category.
        error: ErrorType,
        /// Error text shown to the operator.
        detail: String,
    },
}

impl ResultMessage {
    /// The host URL of the pair.
    pub fn host(&self) -> &str {
        match self {
            ResultMessage::Response { host, .. } | ResultMessage::Failure { host, .. } => host,
        }
    }

    /// The domain of the pair.
    pub fn domain(&self) -> &str {
        match self {
            ResultMessage::Response { domain, .. } | ResultMessage::Failure { domain, .. } => {
                domain
            }
        }
    }

    /// True when the probe produced no response.
    pub fn is_failure(&self) -> bool {
        matches!(self, ResultMessage::Failure { .. })
    }
}

impl fmt::Display for ResultMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultMessage::Response {
                host,
                domain,
                status,
                content_length,
            } => write!(
                f,
                "Host: {host} Domain: {domain} Code: {status} Content-Length: {content_length}"
            ),
            ResultMessage::Failure {
                host,
                error: ErrorType::HttpRequestBuilderError,
                detail,
                ..
            } => write!(f, "Failed to create request for {host}: {detail}"),
            ResultMessage::Failure { host, detail, .. } => {
                write!(f, "Request to {host} failed: {detail}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_line_format() {
        let msg = ResultMessage::Response {
            host: "https://10.0.0.1".to_string(),
            domain: "a.example.com".to_string(),
            status: StatusCode::OK,
            content_length: "1234".to_string(),
        };
        assert_eq!(
            msg.to_string(),
            "Host: https://10.0.0.1 Domain: a.example.com Code: 200 OK Content-Length: 1234"
        );
    }

    #[test]
    fn test_response_line_keeps_empty_content_length() {
        let msg = ResultMessage::Response {
            host: "http://10.0.0.1".to_string(),
            domain: "b.example.com".to_string(),
            status: StatusCode::NOT_FOUND,
            content_length: String::new(),
        };
        assert_eq!(
            msg.to_string(),
            "Host: http://10.0.0.1 Domain: b.example.com Code: 404 Not Found Content-Length: "
        );
    }

    #[test]
    fn test_failure_line_format() {
        let msg = ResultMessage::Failure {
            host: "http://10.0.0.1".to_string(),
            domain: "a.example.com".to_string(),
            error: ErrorType::HttpRequestConnectError,
            detail: "connection refused".to_string(),
        };
        assert!(msg.is_failure());
        assert_eq!(
            msg.to_string(),
            "Request to http://10.0.0.1 failed: connection refused"
        );
    }

    #[test]
    fn test_builder_failure_line_format() {
        let msg = ResultMessage::Failure {
            host: "not a url".to_string(),
            domain: "a.example.com".to_string(),
            error: ErrorType::HttpRequestBuilderError,
            detail: "relative URL without a base".to_string(),
        };
        assert_eq!(
            msg.to_string(),
            "Failed to create request for not a url: relative URL without a base"
        );
        assert_eq!(msg.domain(), "a.example.com");
    }
}

//! A single (host, domain) probe.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderValue, CONTENT_LENGTH, HOST, LOCATION};
use reqwest::StatusCode;
use url::Url;

use crate::config::MAX_REDIRECT_HOPS;
use crate::error_handling::{categorize_reqwest_error, ErrorType, ProbeStats};

use super::{parse_content_length, FilterPolicy, HeaderSet, ResultMessage};

/// One pair of the hosts × domains cross product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// URL the connection is made to.
    pub host: Arc<str>,
    /// Value sent as the `Host` header.
    pub domain: Arc<str>,
}

impl ProbeTarget {
    /// Pairs a host URL with the domain to present for it.
    pub fn new(host: impl Into<Arc<str>>, domain: impl Into<Arc<str>>) -> Self {
        Self {
            host: host.into(),
            domain: domain.into(),
        }
    }

    /// A failure message for this target.
    pub fn failure(&self, error: ErrorType, detail: impl Into<String>) -> ProbeOutcome {
        ProbeOutcome::Report(ResultMessage::Failure {
            host: self.host.to_string(),
            domain: self.domain.to_string(),
            error,
            detail: detail.into(),
        })
    }

    pub(crate) fn deadline_exceeded(&self, deadline: Duration) -> ProbeOutcome {
        self.failure(
            ErrorType::ProbeDeadlineExceeded,
            format!("no response within {}s", deadline.as_secs()),
        )
    }

    pub(crate) fn cancelled(&self) -> ProbeOutcome {
        self.failure(ErrorType::ProbeCancelled, "probe cancelled")
    }
}

/// How a probe ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A message to report: a response that passed the filter, or a failure.
    Report(ResultMessage),
    /// A response the filter suppressed.
    Filtered,
}

impl ProbeOutcome {
    /// Counts this outcome in `stats`.
    pub fn record(&self, stats: &ProbeStats) {
        match self {
            ProbeOutcome::Report(ResultMessage::Response { .. }) => stats.record_emitted(),
            ProbeOutcome::Report(ResultMessage::Failure { error, .. }) => {
                stats.record_failure(*error)
            }
            ProbeOutcome::Filtered => stats.record_filtered(),
        }
    }

    /// The message to report, if any.
    pub fn into_message(self) -> Option<ResultMessage> {
        match self {
            ProbeOutcome::Report(message) => Some(message),
            ProbeOutcome::Filtered => None,
        }
    }
}

/// Sends one GET to `target.host` with `Host: target.domain`.
///
/// The header set is applied first and the domain is written over any `Host`
/// entry it contains. Redirects are followed here, up to
/// `MAX_REDIRECT_HOPS`: the domain stays in `Host` only while a relative
/// redirect keeps the request on the same server, after which each hop
/// carries its own authority. Transport errors become failure messages; they
/// are never retried. Every response is dropped before returning, so its
/// connection is released on every path.
pub async fn execute_probe(
    client: &reqwest::Client,
    headers: &HeaderSet,
    target: &ProbeTarget,
    policy: &FilterPolicy,
) -> ProbeOutcome {
    let mut url = match Url::parse(&target.host) {
        Ok(url) => url,
        Err(e) => return target.failure(ErrorType::HttpRequestBuilderError, e.to_string()),
    };
    let mut host_override = match HeaderValue::from_str(&target.domain) {
        Ok(value) => Some(value),
        Err(e) => {
            return target.failure(
                ErrorType::HttpRequestBuilderError,
                format!("invalid Host header {:?}: {e}", target.domain.as_ref()),
            )
        }
    };

    debug!("Probing {} as {}", target.host, target.domain);
    let mut hops = 0;
    let response = loop {
        let mut request_headers = headers.to_header_map();
        match &host_override {
            Some(value) => {
                request_headers.insert(HOST, value.clone());
            }
            None => {
                request_headers.remove(HOST);
            }
        }

        let response = match client.get(url.clone()).headers(request_headers).send().await {
            Ok(response) => response,
            Err(e) => return target.failure(categorize_reqwest_error(&e), error_chain(&e)),
        };

        let Some(location) = redirect_location(&response) else {
            break response;
        };
        drop(response);

        if hops == MAX_REDIRECT_HOPS {
            return target.failure(
                ErrorType::HttpRequestRedirectError,
                format!("stopped after {MAX_REDIRECT_HOPS} redirects"),
            );
        }
        let next = match resolve_redirect(&url, &location) {
            Ok(next) => next,
            Err(detail) => return target.failure(ErrorType::HttpRequestRedirectError, detail),
        };
        if host_override.is_some() && !stays_on_server(&url, &location, &next) {
            debug!(
                "{} redirected {} to {}, no longer sending Host: {}",
                target.host, target.domain, next, target.domain
            );
            host_override = None;
        }
        hops += 1;
        url = next;
    };

    let status = response.status();
    let content_length = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    drop(response);

    if !policy.admits(status, parse_content_length(&content_length)) {
        debug!(
            "Filtered {} as {}: {} (Content-Length {:?})",
            target.host, target.domain, status, content_length
        );
        return ProbeOutcome::Filtered;
    }

    ProbeOutcome::Report(ResultMessage::Response {
        host: target.host.to_string(),
        domain: target.domain.to_string(),
        status,
        content_length,
    })
}

/// The `Location` of a followable redirect, or `None` for a final response.
fn redirect_location(response: &reqwest::Response) -> Option<String> {
    match response.status() {
        StatusCode::MOVED_PERMANENTLY
        | StatusCode::FOUND
        | StatusCode::SEE_OTHER
        | StatusCode::TEMPORARY_REDIRECT
        | StatusCode::PERMANENT_REDIRECT => response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        _ => None,
    }
}

fn resolve_redirect(current: &Url, location: &str) -> Result<Url, String> {
    let next = current
        .join(location)
        .map_err(|e| format!("invalid redirect location {location:?}: {e}"))?;
    match next.scheme() {
        "http" | "https" => Ok(next),
        other => Err(format!("redirect to unsupported scheme {other:?}")),
    }
}

/// True when `location` is relative and `next` keeps the scheme, host and port of `current`.
fn stays_on_server(current: &Url, location: &str, next: &Url) -> bool {
    matches!(
        Url::parse(location),
        Err(url::ParseError::RelativeUrlWithoutBase)
    ) && current.origin() == next.origin()
}

/// Renders an error with its sources, e.g. `error sending request: connection refused`.
fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !rendered.contains(&cause_text) {
            rendered.push_str(": ");
            rendered.push_str(&cause_text);
        }
        source = cause.source();
    }
    rendered
}

//! HTTP client initialization.
//!
//! One `reqwest::Client` is built per run and shared by every probe task.
//! `reqwest::Client` is internally reference-counted and safe for concurrent
//! use, so tasks clone it rather than wrapping it in a lock.

use std::time::Duration;

use log::{info, warn};
use reqwest::{redirect, ClientBuilder, Proxy};

use crate::config::TCP_CONNECT_TIMEOUT_SECS;
use crate::error_handling::InitializationError;
use crate::probe::ClientSettings;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - Certificate and hostname validation skipped when `accept_invalid_certs` is set
/// - All traffic routed through `proxy` when it is a valid URL, direct otherwise
/// - Connect timeout and overall request timeout
/// - HTTP/1.1 only, so the `Host` header is what the server sees
/// - No automatic redirects; probes follow them so the `Host` override can be dropped per hop
///
/// An unparseable proxy is not fatal: it is logged and the client connects
/// directly. Environment proxy variables are never consulted.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend cannot be
/// initialized.
pub fn init_client(settings: &ClientSettings) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new()
        .danger_accept_invalid_certs(settings.accept_invalid_certs)
        .danger_accept_invalid_hostnames(settings.accept_invalid_certs)
        .connect_timeout(
            Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS).min(settings.timeout),
        )
        .timeout(settings.timeout)
        .redirect(redirect::Policy::none())
        // HTTP/2 takes the authority from the URL, which would undo the Host override.
        .http1_only()
        .no_proxy();

    if settings.accept_invalid_certs {
        info!("TLS certificate verification is disabled for all probes");
    }

    if let Some(proxy) = parse_proxy(&settings.proxy) {
        info!("Routing all probes through proxy {}", settings.proxy);
        builder = builder.proxy(proxy);
    }

    Ok(builder.build()?)
}

/// Parses the proxy option, returning `None` for an empty or invalid value.
fn parse_proxy(raw: &str) -> Option<Proxy> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parsed = match url::Url::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            warn!("Failed to parse proxy URL {raw:?}: {e}. Connecting directly.");
            return None;
        }
    };

    match Proxy::all(parsed) {
        Ok(proxy) => Some(proxy),
        Err(e) => {
            warn!("Unsupported proxy URL {raw:?}: {e}. Connecting directly.");
            None
        }
    }
}

// Shared test helpers for building clients, contexts and input files.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tempfile::NamedTempFile;
use vhost_probe::initialization::init_client;
use vhost_probe::probe::{ClientSettings, ProbeContext, ProbeSettings};
use vhost_probe::{FilterPolicy, HeaderSet, ProbeStats};

/// Builds a probe context the way a run does, with the given filter and limits.
#[allow(dead_code)] // Not every test file uses every helper
pub fn create_test_context(
    policy: FilterPolicy,
    max_concurrency: usize,
    timeout: Duration,
    headers: HeaderSet,
) -> Arc<ProbeContext> {
    let client = init_client(&ClientSettings {
        proxy: String::new(),
        accept_invalid_certs: true,
        timeout,
    })
    .expect("Failed to build client");

    Arc::new(ProbeContext::new(
        client,
        Arc::new(headers),
        ProbeSettings {
            policy,
            max_concurrency,
            request_timeout: timeout,
        },
        Arc::new(ProbeStats::new()),
    ))
}

/// Writes one entry per line to a temporary file.
#[allow(dead_code)]
pub fn write_lines_to_file(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file.flush().expect("Failed to flush file");
    file
}

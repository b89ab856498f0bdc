//! Integration tests for `run_probe`: input files through to the report.

mod helpers;

use std::path::PathBuf;

use vhost_probe::{run_probe, Config};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::write_lines_to_file;

#[tokio::test]
async fn test_run_probe_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&server)
        .await;

    let hosts = write_lines_to_file(&[server.uri(), "# commented out".to_string()]);
    let domains = write_lines_to_file(&[
        "a.example.com".to_string(),
        String::new(),
        "b.example.com".to_string(),
    ]);

    let report = run_probe(Config {
        host_file: hosts.path().to_path_buf(),
        domain_file: domains.path().to_path_buf(),
        ..Default::default()
    })
    .await
    .expect("run should succeed");

    assert_eq!(report.total_pairs, 2);
    assert_eq!(report.emitted, 2);
    assert_eq!(report.filtered, 0);
    assert_eq!(report.failed, 0);
    assert_eq!(report.messages.len(), 2);
}

#[tokio::test]
async fn test_missing_domain_file_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let hosts = write_lines_to_file(&[server.uri()]);
    let result = run_probe(Config {
        host_file: hosts.path().to_path_buf(),
        domain_file: PathBuf::from("/nonexistent/domains.txt"),
        ..Default::default()
    })
    .await;

    let err = result.expect_err("missing domain list is fatal");
    assert!(format!("{err:#}").contains("domains"));
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_missing_host_file_is_fatal() {
    let domains = write_lines_to_file(&["a.example.com".to_string()]);
    let result = run_probe(Config {
        host_file: PathBuf::from("/nonexistent/hosts.txt"),
        domain_file: domains.path().to_path_buf(),
        ..Default::default()
    })
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_invalid_proxy_is_not_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let hosts = write_lines_to_file(&[server.uri()]);
    let domains = write_lines_to_file(&["a.example.com".to_string()]);

    let report = run_probe(Config {
        host_file: hosts.path().to_path_buf(),
        domain_file: domains.path().to_path_buf(),
        proxy: "not a proxy url".to_string(),
        ..Default::default()
    })
    .await
    .expect("bad proxy falls back to direct connections");
    assert_eq!(report.emitted, 1);
}

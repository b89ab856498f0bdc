//! Configuration types and CLI options.
//!
//! `Config` is parsed by `clap` in the binary and can be built directly by
//! library callers (`Config { .. Default::default() }`).

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_THREADS, DEFAULT_TIMEOUT_SECS};
use crate::probe::{ClientSettings, FilterPolicy, ProbeSettings};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// # Examples
///
/// ```bash
/// # Probe every host with every domain, 20 at a time
/// vhost_probe --host hosts.txt --domain domains.txt -t 20
///
/// # Through an intercepting proxy, showing every status code
/// vhost_probe --host hosts.txt --domain domains.txt --proxy http://127.0.0.1:8080 -v
///
/// # Only report responses with at least 100 bytes of Content-Length
/// vhost_probe --host hosts.txt --domain domains.txt --fcl 100
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vhost_probe",
    version,
    about = "Sends one request per (host, domain) pair with the domain as the Host header."
)]
pub struct Config {
    /// File containing the list of hosts (one URL per line)
    #[arg(short = 'H', long = "host", value_parser)]
    pub host_file: PathBuf,

    /// File containing the list of domains to send as the Host header
    #[arg(short = 'd', long = "domain", value_parser)]
    pub domain_file: PathBuf,

    /// Maximum number of concurrent requests
    #[arg(short = 't', long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Proxy URL, e.g. http://127.0.0.1:8080
    #[arg(long, default_value = "")]
    pub proxy: String,

    /// JSON file containing custom headers ({"Name": "Value", ...})
    #[arg(long = "header")]
    pub header_file: Option<PathBuf>,

    /// Report every response regardless of status code
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Drop responses whose Content-Length is below this value (0 disables)
    #[arg(long = "fcl", default_value_t = 0)]
    pub min_content_length: u64,

    /// Per-request timeout in seconds (at least 1)
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_seconds: u64,

    /// Validate TLS certificates (disabled by default so self-signed targets can be probed)
    #[arg(long)]
    pub verify_tls: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Do not print the banner
    #[arg(short = 'q', long)]
    pub silent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host_file: PathBuf::from("hosts.txt"),
            domain_file: PathBuf::from("domains.txt"),
            threads: DEFAULT_THREADS,
            proxy: String::new(),
            header_file: None,
            verbose: false,
            min_content_length: 0,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            verify_tls: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            silent: false,
        }
    }
}

impl Config {
    /// Client-side settings derived from the options.
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            proxy: self.proxy.clone(),
            accept_invalid_certs: !self.verify_tls,
            timeout: self.request_timeout(),
        }
    }

    /// The client timeout; a zero value is raised to one second.
    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    /// Per-task settings derived from the options.
    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            policy: FilterPolicy {
                min_content_length: self.min_content_length,
                verbose: self.verbose,
            },
            max_concurrency: self.threads.max(1),
            request_timeout: self.request_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.threads, 10);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.min_content_length, 0);
        assert!(config.proxy.is_empty());
        assert!(!config.verbose);
        assert!(!config.verify_tls);
        assert!(config.header_file.is_none());
    }

    #[test]
    fn test_parse_short_flags() {
        let config = Config::try_parse_from([
            "vhost_probe",
            "-H",
            "hosts.txt",
            "-d",
            "domains.txt",
            "-t",
            "5",
            "-v",
            "--fcl",
            "100",
            "--proxy",
            "http://127.0.0.1:8080",
        ])
        .expect("valid arguments should parse");

        assert_eq!(config.host_file, PathBuf::from("hosts.txt"));
        assert_eq!(config.domain_file, PathBuf::from("domains.txt"));
        assert_eq!(config.threads, 5);
        assert!(config.verbose);
        assert_eq!(config.min_content_length, 100);
        assert_eq!(config.proxy, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_parse_requires_host_and_domain() {
        assert!(Config::try_parse_from(["vhost_probe", "--host", "hosts.txt"]).is_err());
        assert!(Config::try_parse_from(["vhost_probe", "--domain", "domains.txt"]).is_err());
    }

    #[test]
    fn test_tls_verification_disabled_unless_requested() {
        let config = Config::default();
        assert!(config.client_settings().accept_invalid_certs);

        let config = Config {
            verify_tls: true,
            ..Default::default()
        };
        assert!(!config.client_settings().accept_invalid_certs);
    }

    #[test]
    fn test_parse_rejects_zero_timeout() {
        let result = Config::try_parse_from([
            "vhost_probe",
            "-H",
            "hosts.txt",
            "-d",
            "domains.txt",
            "--timeout-seconds",
            "0",
        ]);
        assert!(result.is_err());

        let config = Config::try_parse_from([
            "vhost_probe",
            "-H",
            "hosts.txt",
            "-d",
            "domains.txt",
            "--timeout-seconds",
            "1",
        ])
        .expect("a one second timeout is valid");
        assert_eq!(config.timeout_seconds, 1);
    }

    #[test]
    fn test_zero_timeout_from_library_is_raised_to_one_second() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.client_settings().timeout, Duration::from_secs(1));
        assert_eq!(
            config.probe_settings().request_timeout,
            Duration::from_secs(1)
        );
    }

    #[test]
    fn test_zero_threads_still_allows_one_probe() {
        let config = Config {
            threads: 0,
            ..Default::default()
        };
        assert_eq!(config.probe_settings().max_concurrency, 1);
    }

    #[test]
    fn test_probe_settings_carry_filter_options() {
        let config = Config {
            verbose: true,
            min_content_length: 250,
            timeout_seconds: 3,
            ..Default::default()
        };
        let settings = config.probe_settings();
        assert!(settings.policy.verbose);
        assert_eq!(settings.policy.min_content_length, 250);
        assert_eq!(settings.request_timeout, Duration::from_secs(3));
    }
}

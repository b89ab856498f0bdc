//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `vhost_probe` library that handles:
//! - Command-line argument parsing
//! - The banner
//! - Logger initialization
//! - Ctrl-C handling
//! - Printing result lines to stdout
//!
//! All probing is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process;
use tokio_util::sync::CancellationToken;

use vhost_probe::initialization::init_logger_with;
use vhost_probe::{run_probe_with_cancel, Config};

const BANNER: &str = r#"
        _               _
 __   _| |__   ___  ___| |_     _ __  _ __ ___  | |__   ___
 \ \ / / '_ \ / _ \/ __| __|   | '_ \| '__/ _ \ | '_ \ / _ \
  \ V /| | | | (_) \__ \ |_    | |_) | | | (_) || |_) |  __/
   \_/ |_| |_|\___/|___/\__|___| .__/|_|  \___/ |_.__/ \___|
                          |_____|_|
"#;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    if !config.silent {
        eprintln!("{}", BANNER.white());
        eprintln!("{:>58}", format!("v{}", env!("CARGO_PKG_VERSION")));
    }

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("Interrupted, cancelling outstanding probes");
                cancel.cancel();
            }
        });
    }

    match run_probe_with_cancel(config, cancel).await {
        Ok(report) => {
            for message in &report.messages {
                println!("{message}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("vhost_probe error: {:#}", e);
            process::exit(1);
        }
    }
}

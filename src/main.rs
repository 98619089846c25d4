// src/main.rs
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use tracker_healthcheck::checker::{verdict, Checker, DEFAULT_PROBE_TIMEOUT};
use tracker_healthcheck::config::load_config;
use tracker_healthcheck::endpoint::collect_endpoints;

/// Probe every enabled tracker binding and exit 0 only if all of them
/// are reachable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the tracker configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Per-probe timeout in seconds
    #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT.as_secs())]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("Loading configuration from: {}", cli.config);
    let config = load_config(&cli.config).await?;

    let endpoints = collect_endpoints(&config);
    if endpoints.is_empty() {
        info!("No enabled bindings to probe");
    }

    let checker = Checker::new(Duration::from_secs(cli.timeout))?;
    let outcomes = checker.run(&endpoints).await;

    if verdict(&outcomes) {
        info!("Exit Code 0");
        Ok(())
    } else {
        error!("Exit Code 1");
        std::process::exit(1);
    }
}

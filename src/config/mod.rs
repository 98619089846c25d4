// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load the tracker configuration from a TOML file.
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Configuration> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Configuration =
        toml::from_str(&contents).context("Failed to parse TOML config")?;

    Ok(config)
}

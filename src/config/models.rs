// src/config/models.rs
use serde::Deserialize;

/// One `[[api_server]]` block from the tracker configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiServerConfig {
    pub enabled: bool,
    pub bind_address: String,
    #[serde(default)]
    pub ssl: bool,
}

/// One `[[http_server]]` block from the tracker configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub enabled: bool,
    pub bind_address: String,
    #[serde(default)]
    pub ssl: bool,
}

/// One `[[udp_server]]` block from the tracker configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UdpServerConfig {
    pub enabled: bool,
    pub bind_address: String,
}

/// The slice of the tracker's `config.toml` this probe cares about.
///
/// The real file carries many more sections (database, cache, tracker
/// tuning); serde skips everything not listed here, so the probe reads the
/// server's own configuration file unchanged. Absent server lists default
/// to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub api_server: Vec<ApiServerConfig>,
    #[serde(default)]
    pub http_server: Vec<HttpServerConfig>,
    #[serde(default)]
    pub udp_server: Vec<UdpServerConfig>,
}

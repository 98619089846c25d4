// src/endpoint/service.rs
use std::fmt;

use tracing::debug;

use crate::config::Configuration;
use crate::endpoint::address::parse_bind_address;

/// Which server family a binding belongs to. The kind selects the probe
/// strategy and fixes the order the batch is checked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Api,
    Http,
    Udp,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceKind::Api => "API(S)",
            ServiceKind::Http => "HTTP(S)",
            ServiceKind::Udp => "UDP",
        };
        write!(f, "{label}")
    }
}

/// A normalized, probe-ready endpoint.
///
/// `host` is always a literal address an outbound attempt can target:
/// wildcard binds were rewritten to loopback during normalization, and
/// IPv6 hosts keep their brackets. `ssl` is meaningful for the TCP-based
/// kinds and always false for UDP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub kind: ServiceKind,
    pub host: String,
    pub port: u16,
    pub ssl: bool,
}

impl Endpoint {
    /// `host:port`, suitable for socket-address parsing.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Root-path probe URL for the TCP-based kinds.
    pub fn url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{}://{}:{}/", scheme, self.host, self.port)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Build the probe batch from the configuration: enabled API bindings
/// first, then HTTP, then UDP, keeping declaration order within each
/// list. Bind addresses matching neither address pattern contribute
/// nothing and raise no error.
pub fn collect_endpoints(config: &Configuration) -> Vec<Endpoint> {
    let mut batch = Vec::new();

    for block in config.api_server.iter().filter(|b| b.enabled) {
        push_targets(&mut batch, ServiceKind::Api, &block.bind_address, block.ssl);
    }
    for block in config.http_server.iter().filter(|b| b.enabled) {
        push_targets(&mut batch, ServiceKind::Http, &block.bind_address, block.ssl);
    }
    for block in config.udp_server.iter().filter(|b| b.enabled) {
        push_targets(&mut batch, ServiceKind::Udp, &block.bind_address, false);
    }

    batch
}

fn push_targets(batch: &mut Vec<Endpoint>, kind: ServiceKind, bind_address: &str, ssl: bool) {
    let targets = parse_bind_address(bind_address);
    if targets.is_empty() {
        debug!(
            "skipping {} binding '{}': no recognizable host:port",
            kind, bind_address
        );
        return;
    }

    for target in targets {
        batch.push(Endpoint {
            kind,
            host: target.host,
            port: target.port,
            ssl,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiServerConfig, HttpServerConfig, UdpServerConfig};

    fn api(enabled: bool, bind_address: &str, ssl: bool) -> ApiServerConfig {
        ApiServerConfig {
            enabled,
            bind_address: bind_address.to_string(),
            ssl,
        }
    }

    fn http(enabled: bool, bind_address: &str, ssl: bool) -> HttpServerConfig {
        HttpServerConfig {
            enabled,
            bind_address: bind_address.to_string(),
            ssl,
        }
    }

    fn udp(enabled: bool, bind_address: &str) -> UdpServerConfig {
        UdpServerConfig {
            enabled,
            bind_address: bind_address.to_string(),
        }
    }

    #[test]
    fn test_collects_enabled_blocks_in_api_http_udp_order() {
        let config = Configuration {
            api_server: vec![api(true, "0.0.0.0:8080", false)],
            http_server: vec![
                http(true, "0.0.0.0:6969", true),
                http(false, "0.0.0.0:6968", false),
                http(true, "10.0.0.5:7070", false),
            ],
            udp_server: vec![udp(true, "0.0.0.0:6969")],
        };

        let batch = collect_endpoints(&config);
        let kinds: Vec<ServiceKind> = batch.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ServiceKind::Api,
                ServiceKind::Http,
                ServiceKind::Http,
                ServiceKind::Udp
            ]
        );

        assert_eq!(batch[0].host, "127.0.0.1");
        assert_eq!(batch[0].port, 8080);
        assert!(batch[1].ssl);
        assert_eq!(batch[2].host, "10.0.0.5");
        assert_eq!(batch[3].port, 6969);
    }

    #[test]
    fn test_disabled_blocks_are_excluded() {
        let config = Configuration {
            api_server: vec![api(false, "127.0.0.1:8080", false)],
            http_server: vec![http(false, "127.0.0.1:6969", false)],
            udp_server: vec![udp(false, "127.0.0.1:6969")],
        };
        assert!(collect_endpoints(&config).is_empty());
    }

    #[test]
    fn test_malformed_bind_addresses_are_skipped_silently() {
        let config = Configuration {
            api_server: vec![api(true, "localhost:8080", false)],
            http_server: vec![http(true, "0.0.0.0:6969", false)],
            udp_server: vec![],
        };

        let batch = collect_endpoints(&config);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].kind, ServiceKind::Http);
    }

    #[test]
    fn test_udp_endpoints_never_carry_ssl() {
        let config = Configuration {
            api_server: vec![],
            http_server: vec![],
            udp_server: vec![udp(true, "0.0.0.0:6969")],
        };
        let batch = collect_endpoints(&config);
        assert!(!batch[0].ssl);
    }

    #[test]
    fn test_url_reflects_ssl_flag_and_keeps_ipv6_brackets() {
        let plain = Endpoint {
            kind: ServiceKind::Http,
            host: "127.0.0.1".to_string(),
            port: 6969,
            ssl: false,
        };
        let tls = Endpoint {
            kind: ServiceKind::Api,
            host: "[::1]".to_string(),
            port: 8080,
            ssl: true,
        };

        assert_eq!(plain.url(), "http://127.0.0.1:6969/");
        assert_eq!(tls.url(), "https://[::1]:8080/");
        assert_eq!(tls.authority(), "[::1]:8080");
    }
}

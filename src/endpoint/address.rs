// src/endpoint/address.rs
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IPV4_BIND: Regex =
        Regex::new(r"((\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})):(\d+)").unwrap();
    static ref IPV6_BIND: Regex = Regex::new(r"(\[[^\]]*\]):(\d+)").unwrap();
}

const V4_ANY: &str = "0.0.0.0";
const V4_LOOPBACK: &str = "127.0.0.1";
const V6_ANY: &str = "[::]";
const V6_LOOPBACK: &str = "[::1]";

/// A concrete probe target extracted from a bind-address string. IPv6
/// hosts keep their brackets so `host:port` concatenation stays valid for
/// URLs and socket addresses alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindAddress {
    pub host: String,
    pub port: u16,
}

/// Extract every probe target recognizable in a raw bind-address string.
///
/// Both patterns are searched independently: an IPv4 `host:port` (four
/// dot-separated octets, each 0-255, leading zeros tolerated) and a
/// bracketed IPv6 `[host]:port`. A string matching neither yields an
/// empty result; malformed entries are skipped, never an error. A
/// crafted string matching both patterns contributes two targets.
///
/// Wildcard binds are not connectable, so they are rewritten to their
/// loopback equivalents: `0.0.0.0` becomes `127.0.0.1` and `[::]`
/// becomes `[::1]`. Ports outside the 16-bit range disqualify that
/// pattern's match.
pub fn parse_bind_address(raw: &str) -> Vec<BindAddress> {
    let mut targets = Vec::new();

    if let Some(caps) = IPV4_BIND.captures(raw) {
        let octets_in_range = (2..=5).all(|i| caps[i].parse::<u8>().is_ok());
        if octets_in_range {
            if let Ok(port) = caps[6].parse::<u16>() {
                let host = if &caps[1] == V4_ANY {
                    V4_LOOPBACK.to_string()
                } else {
                    caps[1].to_string()
                };
                targets.push(BindAddress { host, port });
            }
        }
    }

    if let Some(caps) = IPV6_BIND.captures(raw) {
        if let Ok(port) = caps[2].parse::<u16>() {
            let host = if &caps[1] == V6_ANY {
                V6_LOOPBACK.to_string()
            } else {
                caps[1].to_string()
            };
            targets.push(BindAddress { host, port });
        }
    }

    targets
}

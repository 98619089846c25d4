// src/probe/error.rs
use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

/// Why a single endpoint probe concluded "unreachable".
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid socket address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("nothing is bound to {0} (probe bind succeeded)")]
    PortVacant(SocketAddr),
}

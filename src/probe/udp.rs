// src/probe/udp.rs
use std::net::SocketAddr;

use async_trait::async_trait;
use tracing::debug;

use crate::probe::error::ProbeError;
use crate::probe::Probe;

/// Liveness probe for UDP services, which never answer an empty
/// datagram. Instead of waiting for a reply that will not come, try to
/// bind the configured address locally: a running server already holds
/// the port, so a failed bind means the service is up and a successful
/// bind means nobody is listening. This only observes servers on the
/// same host, which is exactly where the probe runs.
pub struct UdpProbe {
    authority: String,
}

impl UdpProbe {
    pub fn new(authority: String) -> Self {
        Self { authority }
    }
}

#[async_trait]
impl Probe for UdpProbe {
    async fn check(&self) -> Result<(), ProbeError> {
        let addr: SocketAddr =
            self.authority
                .parse()
                .map_err(|source| ProbeError::InvalidAddress {
                    addr: self.authority.clone(),
                    source,
                })?;

        match tokio::net::UdpSocket::bind(addr).await {
            Ok(_socket) => {
                debug!("bind to {} succeeded, port is vacant", addr);
                Err(ProbeError::PortVacant(addr))
            }
            Err(err) => {
                debug!("bind to {} refused ({}), port is held", addr, err);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_occupied_port_is_reachable() {
        let holder = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let authority = holder.local_addr().unwrap().to_string();

        let probe = UdpProbe::new(authority);
        assert!(probe.check().await.is_ok());
    }

    #[tokio::test]
    async fn test_vacant_port_is_unreachable() {
        let socket = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let authority = socket.local_addr().unwrap().to_string();
        drop(socket);

        let probe = UdpProbe::new(authority);
        let result = probe.check().await;
        assert!(matches!(result, Err(ProbeError::PortVacant(_))));
    }

    #[tokio::test]
    async fn test_garbage_authority_is_invalid() {
        let probe = UdpProbe::new("not-a-socket-addr".to_string());
        let result = probe.check().await;
        assert!(matches!(result, Err(ProbeError::InvalidAddress { .. })));
    }
}

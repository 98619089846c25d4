// src/probe/mod.rs
mod error;
mod http;
mod udp;

use async_trait::async_trait;

pub use error::ProbeError;
pub use http::{build_client, HttpProbe};
pub use udp::UdpProbe;

use crate::endpoint::{Endpoint, ServiceKind};

/// A single reachability check against one endpoint.
#[async_trait]
pub trait Probe {
    async fn check(&self) -> Result<(), ProbeError>;
}

/// What one probe attempt concluded, with the failure rendered for
/// logging when the endpoint was unreachable.
#[derive(Debug)]
pub struct ProbeOutcome {
    pub endpoint: Endpoint,
    pub reachable: bool,
    pub detail: Option<String>,
}

fn create_probe(endpoint: &Endpoint, client: &reqwest::Client) -> Box<dyn Probe + Send + Sync> {
    match endpoint.kind {
        ServiceKind::Api | ServiceKind::Http => {
            Box::new(HttpProbe::new(endpoint.url(), client.clone()))
        }
        ServiceKind::Udp => Box::new(UdpProbe::new(endpoint.authority())),
    }
}

/// Run the probe matching the endpoint's kind and fold the result into
/// a [`ProbeOutcome`]. TCP-based kinds reuse the given client, which
/// carries the probe timeout.
pub async fn probe_endpoint(endpoint: &Endpoint, client: &reqwest::Client) -> ProbeOutcome {
    let probe = create_probe(endpoint, client);
    match probe.check().await {
        Ok(()) => ProbeOutcome {
            endpoint: endpoint.clone(),
            reachable: true,
            detail: None,
        },
        Err(err) => ProbeOutcome {
            endpoint: endpoint.clone(),
            reachable: false,
            detail: Some(err.to_string()),
        },
    }
}

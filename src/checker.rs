// src/checker.rs
use std::time::Duration;

use tracing::{error, info};

use crate::endpoint::{Endpoint, ServiceKind};
use crate::probe::{build_client, probe_endpoint, ProbeError, ProbeOutcome};

/// How long each individual probe may take before it counts as failed.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Runs the probe batch one endpoint at a time and reports every result,
/// healthy or not. Probing never stops early: a dead endpoint in the
/// middle of the batch still lets the ones after it be checked and
/// logged. A single HTTP client, carrying the timeout budget, serves
/// every TCP-based check in the run.
pub struct Checker {
    client: reqwest::Client,
}

impl Checker {
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }

    pub async fn run(&self, endpoints: &[Endpoint]) -> Vec<ProbeOutcome> {
        let mut outcomes = Vec::with_capacity(endpoints.len());

        for endpoint in endpoints {
            match endpoint.kind {
                ServiceKind::Udp => info!("Checking {} binding {}", endpoint.kind, endpoint),
                _ => info!(
                    "Checking {} binding {} ssl={}",
                    endpoint.kind, endpoint, endpoint.ssl
                ),
            }

            let outcome = probe_endpoint(endpoint, &self.client).await;
            if outcome.reachable {
                info!("Connection is available");
            } else {
                match &outcome.detail {
                    Some(detail) => error!("Connection is unavailable: {}", detail),
                    None => error!("Connection is unavailable"),
                }
            }

            outcomes.push(outcome);
        }

        let reachable = outcomes.iter().filter(|o| o.reachable).count();
        info!(
            "Probe run complete: {} reachable, {} unreachable",
            reachable,
            outcomes.len() - reachable
        );

        outcomes
    }
}

/// The whole batch passes only when every endpoint was reachable. An
/// empty batch has nothing to fail and passes.
pub fn verdict(outcomes: &[ProbeOutcome]) -> bool {
    outcomes.iter().all(|o| o.reachable)
}

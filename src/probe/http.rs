// src/probe/http.rs
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::probe::error::ProbeError;
use crate::probe::Probe;

/// Build the client shared by every HTTP(S) check in a run. The probe
/// budget caps both connection establishment and the whole exchange,
/// certificate verification is off so trackers running on self-signed
/// or container-internal certs still answer, and redirects are not
/// followed since the first response already proves the listener is up.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ProbeError> {
    let client = reqwest::Client::builder()
        .connect_timeout(timeout)
        .timeout(timeout)
        .danger_accept_invalid_certs(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}

/// Liveness probe for the TCP-based services: issue a HEAD request
/// against the endpoint's root path and treat any response at all,
/// whatever its status code, as proof the listener is up.
pub struct HttpProbe {
    url: String,
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(url: String, client: reqwest::Client) -> Self {
        Self { url, client }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn check(&self) -> Result<(), ProbeError> {
        debug!("sending HEAD {}", self.url);
        let response = self.client.head(self.url.as_str()).send().await?;
        debug!("{} answered {}", self.url, response.status());
        Ok(())
    }
}

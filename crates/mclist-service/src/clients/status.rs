//! Client for the mcsrvstat.us server status API

use async_trait::async_trait;
use mclist_core::traits::{ServerStatus, ServerStatusProvider};
use mclist_core::{ProviderError, ProviderResult};
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, instrument};

const SERVICE: &str = "status";

#[derive(Debug, Default, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    online: bool,
    version: Option<String>,
    players: Option<Players>,
}

#[derive(Debug, Default, Deserialize)]
struct Players {
    max: Option<i32>,
}

impl From<StatusResponse> for ServerStatus {
    fn from(response: StatusResponse) -> Self {
        Self {
            online: response.online,
            version: response.version.filter(|version| !version.trim().is_empty()),
            max_players: response.players.and_then(|players| players.max),
        }
    }
}

/// Status provider that queries `GET {base_url}/{address}`
#[derive(Debug, Clone)]
pub struct McSrvStatProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl McSrvStatProvider {
    /// Create a provider for a base URL such as `https://api.mcsrvstat.us/2`
    pub fn new(client: reqwest::Client, base_url: &str) -> ProviderResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ProviderError::invalid_response(SERVICE, format!("bad base url: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ProviderError::invalid_response(
                SERVICE,
                format!("bad base url: {base_url}"),
            ));
        }

        Ok(Self { client, base_url })
    }

    /// URL for an address, appended as a single escaped path segment
    fn status_url(&self, address: &str) -> ProviderResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ProviderError::request(SERVICE, "base url cannot take a path"))?
            .pop_if_empty()
            .push(address.trim());
        Ok(url)
    }
}

#[async_trait]
impl ServerStatusProvider for McSrvStatProvider {
    #[instrument(skip(self))]
    async fn fetch(&self, address: &str) -> ProviderResult<ServerStatus> {
        let url = self.status_url(address)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ProviderError::request(SERVICE, e.to_string()))?;

        let body: StatusResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::invalid_response(SERVICE, e.to_string()))?;

        let status = ServerStatus::from(body);
        debug!(online = status.online, version = ?status.version, "Fetched server status");

        Ok(status)
    }
}

//! HTTP clients for the OAuth provider and the server status API

mod oauth;
mod status;

use std::time::Duration;

use mclist_common::HttpClientConfig;
use mclist_core::{ProviderError, ProviderResult};

pub use oauth::HttpOAuthProvider;
pub use status::McSrvStatProvider;

const USER_AGENT: &str = concat!("mclist/", env!("CARGO_PKG_VERSION"));

/// Build the shared outbound client. It pools connections, so build it once.
pub fn build_http_client(config: &HttpClientConfig) -> ProviderResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ProviderError::request("http", e.to_string()))
}

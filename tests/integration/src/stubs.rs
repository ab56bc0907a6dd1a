//! Stub OAuth and status providers

use std::collections::HashMap;

use async_trait::async_trait;
use mclist_core::traits::{OAuthProvider, OAuthToken, ServerStatus, ServerStatusProvider};
use mclist_core::{ProviderError, ProviderResult, UserProfile};

const TOKEN_PREFIX: &str = "forum-token-";

/// OAuth provider that accepts a fixed set of authorization codes
#[derive(Debug, Clone, Default)]
pub struct StubOAuthProvider {
    profiles: HashMap<String, UserProfile>,
}

impl StubOAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `code` and log it in as `profile`
    pub fn with_code(mut self, code: impl Into<String>, profile: UserProfile) -> Self {
        self.profiles.insert(code.into(), profile);
        self
    }
}

#[async_trait]
impl OAuthProvider for StubOAuthProvider {
    async fn exchange_code(&self, code: &str) -> ProviderResult<OAuthToken> {
        if !self.profiles.contains_key(code) {
            return Err(ProviderError::rejected(
                "oauth",
                "There was a problem fetching your token. invalid_grant - The authorization code is invalid",
            ));
        }

        Ok(OAuthToken {
            access_token: format!("{TOKEN_PREFIX}{code}"),
            token_type: Some("bearer".to_string()),
        })
    }

    async fn fetch_profile(&self, token: &OAuthToken) -> ProviderResult<UserProfile> {
        token
            .access_token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|code| self.profiles.get(code))
            .cloned()
            .ok_or_else(|| {
                ProviderError::rejected(
                    "oauth",
                    "There was a problem fetching your profile. 3S290/7 - INVALID_ACCESS_TOKEN",
                )
            })
    }
}

/// Status provider answering from a fixed table. Unknown addresses are offline.
#[derive(Debug, Clone, Default)]
pub struct StubStatusProvider {
    servers: HashMap<String, ServerStatus>,
    unreachable: Vec<String>,
}

impl StubStatusProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_online(mut self, address: &str, version: &str, max_players: i32) -> Self {
        self.servers.insert(
            address.to_string(),
            ServerStatus {
                online: true,
                version: Some(version.to_string()),
                max_players: Some(max_players),
            },
        );
        self
    }

    /// Make lookups of `address` fail at the transport level
    pub fn with_unreachable(mut self, address: &str) -> Self {
        self.unreachable.push(address.to_string());
        self
    }
}

#[async_trait]
impl ServerStatusProvider for StubStatusProvider {
    async fn fetch(&self, address: &str) -> ProviderResult<ServerStatus> {
        if self.unreachable.iter().any(|unreachable| unreachable == address) {
            return Err(ProviderError::request("status", "connection refused"));
        }

        Ok(self.servers.get(address).cloned().unwrap_or_default())
    }
}

//! External provider ports - the OAuth forum and the server status API

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::UserProfile;

/// Result type for provider calls
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failures talking to an external service
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure or non-success status
    #[error("{service} request failed: {message}")]
    Request { service: &'static str, message: String },

    /// The service answered with a body we could not understand
    #[error("{service} returned an unexpected response: {message}")]
    InvalidResponse { service: &'static str, message: String },

    /// The service understood the request and refused it
    #[error("{message}")]
    Rejected { service: &'static str, message: String },
}

impl ProviderError {
    pub fn request(service: &'static str, message: impl Into<String>) -> Self {
        Self::Request {
            service,
            message: message.into(),
        }
    }

    pub fn invalid_response(service: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            service,
            message: message.into(),
        }
    }

    pub fn rejected(service: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected {
            service,
            message: message.into(),
        }
    }

    pub fn service(&self) -> &'static str {
        match self {
            Self::Request { service, .. }
            | Self::InvalidResponse { service, .. }
            | Self::Rejected { service, .. } => service,
        }
    }
}

/// Access token granted by the OAuth provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthToken {
    pub access_token: String,
    pub token_type: Option<String>,
}

/// Live status of a Minecraft server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerStatus {
    pub online: bool,
    pub version: Option<String>,
    pub max_players: Option<i32>,
}

#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Exchange an authorization code for an access token
    async fn exchange_code(&self, code: &str) -> ProviderResult<OAuthToken>;

    /// Fetch the profile of the token's owner
    async fn fetch_profile(&self, token: &OAuthToken) -> ProviderResult<UserProfile>;
}

#[async_trait]
pub trait ServerStatusProvider: Send + Sync {
    /// Look up the live status of a server by address
    async fn fetch(&self, address: &str) -> ProviderResult<ServerStatus>;
}

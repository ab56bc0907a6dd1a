//! OAuth client for the forum the users sign in with

use async_trait::async_trait;
use mclist_common::OAuthConfig;
use mclist_core::traits::{OAuthProvider, OAuthToken};
use mclist_core::{ProviderError, ProviderResult, UserId, UserProfile};
use serde::Deserialize;
use tracing::{debug, instrument};

const SERVICE: &str = "oauth";

/// Token endpoint response. Errors come back in the same body.
#[derive(Debug, Default, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    token_type: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

impl TokenResponse {
    fn into_token(self) -> ProviderResult<OAuthToken> {
        match self.access_token {
            Some(access_token) if !access_token.is_empty() => Ok(OAuthToken {
                access_token,
                token_type: self.token_type,
            }),
            _ => Err(ProviderError::rejected(
                SERVICE,
                format!(
                    "There was a problem fetching your token. {} - {}",
                    self.error.as_deref().unwrap_or("unknown"),
                    self.error_description.as_deref().unwrap_or("unknown"),
                ),
            )),
        }
    }
}

/// Profile ("me") endpoint response
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileResponse {
    id: Option<i32>,
    name: Option<String>,
    email: Option<String>,
    photo_url: Option<String>,
    posts: Option<i32>,
    error_code: Option<serde_json::Value>,
    error_message: Option<String>,
}

impl ProfileResponse {
    fn into_profile(self) -> ProviderResult<UserProfile> {
        let Some(id) = self.id else {
            let code = match self.error_code {
                Some(serde_json::Value::String(code)) => code,
                Some(code) => code.to_string(),
                None => "unknown".to_string(),
            };
            return Err(ProviderError::rejected(
                SERVICE,
                format!(
                    "There was a problem fetching your profile. {code} - {}",
                    self.error_message.as_deref().unwrap_or("unknown"),
                ),
            ));
        };

        let name = self
            .name
            .ok_or_else(|| ProviderError::invalid_response(SERVICE, "profile has no name"))?;
        let email = self
            .email
            .ok_or_else(|| ProviderError::invalid_response(SERVICE, "profile has no email"))?;

        Ok(UserProfile {
            id: UserId::new(id),
            name,
            email,
            photo_url: self.photo_url,
            posts: self.posts.unwrap_or_default(),
        })
    }
}

/// OAuth provider backed by the forum's token and profile endpoints
#[derive(Clone)]
pub struct HttpOAuthProvider {
    client: reqwest::Client,
    config: OAuthConfig,
}

impl HttpOAuthProvider {
    pub fn new(client: reqwest::Client, config: OAuthConfig) -> Self {
        Self { client, config }
    }
}

impl std::fmt::Debug for HttpOAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOAuthProvider")
            .field("client_id", &self.config.client_id)
            .field("token_url", &self.config.token_url)
            .field("profile_url", &self.config.profile_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl OAuthProvider for HttpOAuthProvider {
    #[instrument(skip(self, code))]
    async fn exchange_code(&self, code: &str) -> ProviderResult<OAuthToken> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("scope", "profile"),
        ];

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderError::request(SERVICE, e.to_string()))?;

        debug!(status = %response.status(), "Token endpoint answered");

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::invalid_response(SERVICE, e.to_string()))?;

        body.into_token()
    }

    #[instrument(skip(self, token))]
    async fn fetch_profile(&self, token: &OAuthToken) -> ProviderResult<UserProfile> {
        let response = self
            .client
            .get(&self.config.profile_url)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| ProviderError::request(SERVICE, e.to_string()))?;

        debug!(status = %response.status(), "Profile endpoint answered");

        let body: ProfileResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::invalid_response(SERVICE, e.to_string()))?;

        body.into_profile()
    }
}

//! Application configuration structs
//!
//! Loads configuration from environment variables and an optional `.env` file.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub oauth: OAuthConfig,
    pub status: StatusApiConfig,
    pub http_client: HttpClientConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP listen configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// JWT configuration. Expiries are in seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64,
}

/// OAuth client registered with the forum
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    #[serde(default = "default_oauth_token_url")]
    pub token_url: String,
    #[serde(default = "default_oauth_profile_url")]
    pub profile_url: String,
}

/// Minecraft server status API
#[derive(Debug, Clone, Deserialize)]
pub struct StatusApiConfig {
    #[serde(default = "default_status_api_url")]
    pub base_url: String,
}

/// Outbound HTTP client settings
#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientConfig {
    #[serde(default = "default_http_timeout")]
    pub timeout_secs: u64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "mclist".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_access_token_expiry() -> i64 {
    900 // 15 minutes
}

fn default_refresh_token_expiry() -> i64 {
    2_592_000 // 30 days
}

fn default_oauth_token_url() -> String {
    "https://www.minecraftitalia.net/oauth/token/".to_string()
}

fn default_oauth_profile_url() -> String {
    "https://www.minecraftitalia.net/api/core/me/".to_string()
}

fn default_status_api_url() -> String {
    "https://api.mcsrvstat.us/2".to_string()
}

fn default_http_timeout() -> u64 {
    10
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn parsed_or<T: std::str::FromStr>(name: &'static str, default: fn() -> T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(default)
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parsed_or("DATABASE_MAX_CONNECTIONS", default_max_connections),
                min_connections: parsed_or("DATABASE_MIN_CONNECTIONS", default_min_connections),
            },
            jwt: JwtConfig {
                secret: required("JWT_SECRET")
                    .or_else(|_| env::var("APP_SECRET"))
                    .map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                access_token_expiry: parsed_or(
                    "JWT_ACCESS_TOKEN_EXPIRY",
                    default_access_token_expiry,
                ),
                refresh_token_expiry: parsed_or(
                    "JWT_REFRESH_TOKEN_EXPIRY",
                    default_refresh_token_expiry,
                ),
            },
            oauth: OAuthConfig {
                client_id: required("OAUTH_CLIENT_ID")?,
                client_secret: required("OAUTH_CLIENT_SECRET")?,
                redirect_uri: required("OAUTH_REDIRECT_URI")?,
                token_url: env::var("OAUTH_TOKEN_URL")
                    .unwrap_or_else(|_| default_oauth_token_url()),
                profile_url: env::var("OAUTH_PROFILE_URL")
                    .unwrap_or_else(|_| default_oauth_profile_url()),
            },
            status: StatusApiConfig {
                base_url: env::var("STATUS_API_URL").unwrap_or_else(|_| default_status_api_url()),
            },
            http_client: HttpClientConfig {
                timeout_secs: parsed_or("HTTP_CLIENT_TIMEOUT_SECS", default_http_timeout),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parsed_or(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second,
                ),
                burst: parsed_or("RATE_LIMIT_BURST", default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

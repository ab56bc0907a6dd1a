//! # mclist-common
//!
//! Shared utilities including configuration, error handling, token signing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, IssuedTokens, TokenService, TokenType};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    HttpClientConfig, JwtConfig, OAuthConfig, RateLimitConfig, ServerConfig, StatusApiConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};

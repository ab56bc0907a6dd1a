//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    HttpClientConfig, JwtConfig, OAuthConfig, RateLimitConfig, ServerConfig, StatusApiConfig,
};

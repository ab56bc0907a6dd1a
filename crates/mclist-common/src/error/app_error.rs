//! Application error types
//!
//! Failures outside the domain rules: authentication, infrastructure, and
//! the third-party services the listing depends on.

use mclist_core::{DomainError, ProviderError};
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Access or refresh token that does not verify, or names an unknown user
    #[error("Could not authenticate user.")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// No token cookie on the request
    #[error("Could not authenticate user.")]
    MissingAuth,

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    /// OAuth or status API failure. The message is shown to the caller.
    #[error("{0}")]
    ExternalService(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// HTTP-equivalent status, used to tell caller mistakes from our own
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::InvalidToken | Self::TokenExpired | Self::MissingAuth => 401,
            Self::ExternalService(_) => 502,
            Self::Database(_) | Self::Internal(_) => 500,
            Self::Domain(e) => e.status_code(),
        }
    }

    /// Stable code exposed to clients
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MissingAuth => "MISSING_AUTH",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Whether the caller sent something we refused (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Whether the failure is on our side or upstream (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        Self::ExternalService(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

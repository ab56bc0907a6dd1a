//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ServerId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Server not found: {0}")]
    ServerNotFound(ServerId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the author or an admin can modify this server")]
    NotServerAuthor,

    #[error("Admin role required")]
    AdminRequired,

    #[error("Your account has been banned")]
    UserBanned,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("You have already voted for this server this month.")]
    AlreadyVoted,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Could not find server info.")]
    ServerOffline,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::ServerNotFound(_) => "NOT_FOUND",

            // Validation
            Self::InvalidRole(_) => "VALIDATION_ERROR",

            // Authorization
            Self::NotServerAuthor | Self::AdminRequired => "INSUFFICIENT_PERMISSIONS",
            Self::UserBanned => "USER_BANNED",

            // Conflict
            Self::AlreadyVoted => "ALREADY_VOTED",

            // Business Rules
            Self::ServerOffline => "SERVER_OFFLINE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ServerNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidRole(_) | Self::ServerOffline)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotServerAuthor | Self::AdminRequired | Self::UserBanned
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyVoted)
    }

    /// HTTP-equivalent status for the violated rule
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authorization() {
            403
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}

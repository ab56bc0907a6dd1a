//! Error handling utilities for repositories

use mclist_core::error::DomainError;
use mclist_core::value_objects::{ServerId, UserId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for a foreign key violation and return the matching error or fallback.
/// `on_fk` receives the name of the violated constraint.
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce(&str) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk(db_err.constraint().unwrap_or_default());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "server not found" error
pub fn server_not_found(id: ServerId) -> DomainError {
    DomainError::ServerNotFound(id)
}

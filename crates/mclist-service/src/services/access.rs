//! Access rules shared by the mutation services

use mclist_core::entities::{Server, User};
use mclist_core::DomainError;

/// Banned users may not create, modify or vote
pub fn ensure_active(user: &User) -> Result<(), DomainError> {
    if user.is_banned() {
        return Err(DomainError::UserBanned);
    }
    Ok(())
}

pub fn ensure_admin(user: &User) -> Result<(), DomainError> {
    if !user.is_admin() {
        return Err(DomainError::AdminRequired);
    }
    Ok(())
}

/// A listing may be changed by its author or an admin, provided they are not banned
pub fn ensure_can_edit(user: &User, server: &Server) -> Result<(), DomainError> {
    ensure_active(user)?;
    if server.is_author(user.id) || user.is_admin() {
        Ok(())
    } else {
        Err(DomainError::NotServerAuthor)
    }
}

/// Unpublished listings are only visible to their author and admins
pub fn can_view(viewer: Option<&User>, server: &Server) -> bool {
    server.published
        || viewer.is_some_and(|user| server.is_author(user.id) || user.is_admin())
}

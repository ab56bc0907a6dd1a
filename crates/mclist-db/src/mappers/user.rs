//! User entity <-> model mapper

use mclist_core::entities::User;
use mclist_core::error::DomainError;
use mclist_core::value_objects::{Role, UserId};

use crate::models::UserModel;

/// Convert UserModel to User entity
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse::<Role>()
            .map_err(|e| DomainError::DatabaseError(format!("users.role: {e}")))?;

        Ok(User {
            id: UserId::new(model.id),
            username: model.username,
            photo_url: model.photo_url,
            email: model.email,
            role,
            banned: model.banned,
            posts: model.posts,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

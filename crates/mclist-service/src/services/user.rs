//! User administration service
//!
//! Admin-only role and ban management.

use mclist_core::entities::User;
use mclist_core::value_objects::{Role, UserId};
use mclist_core::DomainError;
use tracing::{info, instrument};

use crate::dto::UserResponse;

use super::access::ensure_admin;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Change a user's role. `role` must be `user` or `admin`.
    #[instrument(skip(self, actor), fields(admin_id = %actor.id))]
    pub async fn update_role(
        &self,
        actor: &User,
        user_id: UserId,
        role: &str,
    ) -> ServiceResult<UserResponse> {
        ensure_admin(actor)?;
        let role: Role = role
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidRole(role.to_string()))?;

        let user = self.ctx.user_repo().update_role(user_id, role).await?;
        info!(user_id = %user_id, role = %role.as_str(), "User role updated");

        Ok(UserResponse::from(&user))
    }

    /// Ban or unban a user
    #[instrument(skip(self, actor), fields(admin_id = %actor.id))]
    pub async fn update_ban(
        &self,
        actor: &User,
        user_id: UserId,
        banned: bool,
    ) -> ServiceResult<UserResponse> {
        ensure_admin(actor)?;

        let user = self.ctx.user_repo().update_banned(user_id, banned).await?;
        info!(user_id = %user_id, banned, "User ban state updated");

        Ok(UserResponse::from(&user))
    }
}

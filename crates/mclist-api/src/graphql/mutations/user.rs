//! User administration: role and ban changes

use async_graphql::{Context, Object, Result};
use mclist_core::UserId;
use mclist_service::{AuthService, UserService};

use crate::graphql::context::{cookies, services};
use crate::graphql::types::UserResult;

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Set a user's role to `user` or `admin`. Admin only.
    async fn update_role(
        &self,
        ctx: &Context<'_>,
        id: i32,
        role: String,
    ) -> Result<UserResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = AuthService::new(services)
                .authenticate_admin(cookies(ctx).access_token())
                .await?;
            UserService::new(services)
                .update_role(&actor, UserId::new(id), &role)
                .await
        }
        .await;

        Ok(UserResult::from_service(ctx, result))
    }

    /// Ban or unban a user. Admin only.
    async fn update_ban(&self, ctx: &Context<'_>, id: i32, banned: bool) -> Result<UserResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = AuthService::new(services)
                .authenticate_admin(cookies(ctx).access_token())
                .await?;
            UserService::new(services)
                .update_ban(&actor, UserId::new(id), banned)
                .await
        }
        .await;

        Ok(UserResult::from_service(ctx, result))
    }
}

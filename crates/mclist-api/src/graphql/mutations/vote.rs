//! Monthly votes and the admin vote reset

use async_graphql::{Context, Object, Result};
use mclist_core::ServerId;
use mclist_service::{AuthService, VoteService};

use crate::graphql::context::{cookies, services};
use crate::graphql::types::{OutcomeResult, ServerResult};

#[derive(Default)]
pub struct VoteMutation;

#[Object]
impl VoteMutation {
    /// Vote for a server. One vote per server per calendar month.
    async fn vote(&self, ctx: &Context<'_>, id: i32) -> Result<OutcomeResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = AuthService::new(services)
                .authenticate_active(cookies(ctx).access_token())
                .await?;
            VoteService::new(services)
                .vote(&actor, ServerId::new(id))
                .await
        }
        .await;

        Ok(OutcomeResult::from_service(ctx, result))
    }

    /// Delete every vote of a server. Admin only.
    async fn reset_votes(&self, ctx: &Context<'_>, id: i32) -> Result<ServerResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = AuthService::new(services)
                .authenticate_admin(cookies(ctx).access_token())
                .await?;
            VoteService::new(services)
                .reset_votes(&actor, ServerId::new(id))
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }
}

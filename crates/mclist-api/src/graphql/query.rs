//! Query root
//!
//! The API is mutation-first; the queries only cover what a client needs to
//! render its own session and a single listing.

use async_graphql::{Context, Object, Result};
use mclist_core::ServerId;
use mclist_service::{AuthService, ServerService, ServiceResult};

use super::context::{cookies, services};
use super::error::query_error;
use super::types::{ServerObject, UserObject};

#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
    /// The user identified by the access cookie, or null
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        let services = services(ctx)?;

        AuthService::new(services)
            .current_user(cookies(ctx).access_token())
            .await
            .map(|user| user.map(UserObject::from))
            .map_err(|e| query_error(ctx, &e))
    }

    /// A server with its tags, version and vote count, or null
    async fn server(&self, ctx: &Context<'_>, id: i32) -> Result<Option<ServerObject>> {
        let services = services(ctx)?;

        let result: ServiceResult<_> = async {
            let viewer = AuthService::new(services)
                .viewer(cookies(ctx).access_token())
                .await?;
            ServerService::new(services)
                .get_server(viewer.as_ref(), ServerId::new(id))
                .await
        }
        .await;

        result
            .map(|server| server.map(ServerObject::from))
            .map_err(|e| query_error(ctx, &e))
    }
}

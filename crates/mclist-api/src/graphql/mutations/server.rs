//! Server listing mutations
//!
//! Every resolver authenticates the caller from the access cookie and turns a
//! failed service call into a `MutationError` payload.

use async_graphql::{Context, Object, Result};
use mclist_core::{ServerId, User};
use mclist_service::dto::{
    AddTagsRequest, RemoveTagsRequest, ServerInput, UpdateContentRequest, UpdateCoverRequest,
    UpdateTitleRequest,
};
use mclist_service::{AuthService, ServerService, ServiceContext, ServiceResult};

use crate::graphql::context::{cookies, services};
use crate::graphql::types::ServerResult;

#[derive(Default)]
pub struct ServerMutation;

/// The caller identified by the access cookie
async fn caller(services: &ServiceContext, ctx: &Context<'_>) -> ServiceResult<User> {
    AuthService::new(services)
        .authenticate(cookies(ctx).access_token())
        .await
}

#[Object]
impl ServerMutation {
    async fn create_server(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: Option<String>,
        cover: Option<String>,
        tags: Vec<String>,
        ip: String,
    ) -> Result<ServerResult> {
        let services = services(ctx)?;
        let input = ServerInput {
            title,
            content,
            cover,
            tags,
            ip,
        };
        let result = async {
            let actor = AuthService::new(services)
                .authenticate_active(cookies(ctx).access_token())
                .await?;
            ServerService::new(services)
                .create_server(&actor, input)
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }

    #[allow(clippy::too_many_arguments)]
    async fn update_server(
        &self,
        ctx: &Context<'_>,
        id: i32,
        title: String,
        content: Option<String>,
        cover: Option<String>,
        tags: Vec<String>,
        ip: String,
    ) -> Result<ServerResult> {
        let services = services(ctx)?;
        let input = ServerInput {
            title,
            content,
            cover,
            tags,
            ip,
        };
        let result = async {
            let actor = caller(services, ctx).await?;
            ServerService::new(services)
                .update_server(&actor, ServerId::new(id), input)
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }

    async fn update_title(
        &self,
        ctx: &Context<'_>,
        id: i32,
        title: String,
    ) -> Result<ServerResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = caller(services, ctx).await?;
            ServerService::new(services)
                .update_title(&actor, ServerId::new(id), UpdateTitleRequest { title })
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }

    async fn update_content(
        &self,
        ctx: &Context<'_>,
        id: i32,
        content: String,
    ) -> Result<ServerResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = caller(services, ctx).await?;
            ServerService::new(services)
                .update_content(&actor, ServerId::new(id), UpdateContentRequest { content })
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }

    async fn update_cover(
        &self,
        ctx: &Context<'_>,
        id: i32,
        cover: String,
    ) -> Result<ServerResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = caller(services, ctx).await?;
            ServerService::new(services)
                .update_cover(&actor, ServerId::new(id), UpdateCoverRequest { cover })
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }

    /// Link tags to a server, creating unknown ones
    async fn add_tag(
        &self,
        ctx: &Context<'_>,
        id: i32,
        tags: Vec<String>,
    ) -> Result<ServerResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = caller(services, ctx).await?;
            ServerService::new(services)
                .add_tags(&actor, ServerId::new(id), AddTagsRequest { tags })
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }

    /// Unlink tags from a server by name
    async fn remove_tag(
        &self,
        ctx: &Context<'_>,
        id: i32,
        tags: Vec<String>,
    ) -> Result<ServerResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = caller(services, ctx).await?;
            ServerService::new(services)
                .remove_tags(&actor, ServerId::new(id), RemoveTagsRequest { tags })
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }

    async fn update_ip(&self, ctx: &Context<'_>, id: i32, ip: String) -> Result<ServerResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = caller(services, ctx).await?;
            ServerService::new(services)
                .update_ip(&actor, ServerId::new(id), ip)
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }

    /// Refresh version and slots from the status API
    async fn update_remote_info(
        &self,
        ctx: &Context<'_>,
        id: i32,
        ip: String,
    ) -> Result<ServerResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = caller(services, ctx).await?;
            ServerService::new(services)
                .update_remote_info(&actor, ServerId::new(id), ip)
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }

    /// Unpublish a server. The row is kept.
    async fn delete_server(&self, ctx: &Context<'_>, id: i32) -> Result<ServerResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = caller(services, ctx).await?;
            ServerService::new(services)
                .delete_server(&actor, ServerId::new(id))
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }

    async fn publish_server(&self, ctx: &Context<'_>, id: i32) -> Result<ServerResult> {
        let services = services(ctx)?;
        let result = async {
            let actor = caller(services, ctx).await?;
            ServerService::new(services)
                .publish_server(&actor, ServerId::new(id))
                .await
        }
        .await;

        Ok(ServerResult::from_service(ctx, result))
    }
}

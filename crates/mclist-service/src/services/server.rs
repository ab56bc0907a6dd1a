//! Server listing service
//!
//! Create, update, publish and soft-delete listings. Every mutation checks
//! that the caller may edit the listing before touching it.

use chrono::Utc;
use mclist_core::entities::{normalize_tag_names, NewServer, Server, ServerChanges, User};
use mclist_core::traits::ServerStatus;
use mclist_core::value_objects::{ServerId, VersionId};
use mclist_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{
    AddTagsRequest, RemoveTagsRequest, ServerInput, ServerResponse, ServerWithDetails,
    UpdateContentRequest, UpdateCoverRequest, UpdateTitleRequest, ValidateInOrder,
    TAGS_TO_ADD_MESSAGE, TAGS_TO_REMOVE_MESSAGE,
};

use super::access::{can_view, ensure_active, ensure_can_edit};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::tag::{ResolvedTags, TagService};

/// Server listing service
pub struct ServerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ServerService<'a> {
    /// Create a new ServerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Get a listing with its tags, version and vote count
    ///
    /// Unpublished listings read as missing unless `viewer` may see them.
    #[instrument(skip(self, viewer))]
    pub async fn get_server(
        &self,
        viewer: Option<&User>,
        id: ServerId,
    ) -> ServiceResult<Option<ServerResponse>> {
        match self.ctx.server_repo().find_by_id(id).await? {
            Some(server) if can_view(viewer, &server) => self.details(server).await.map(Some),
            _ => Ok(None),
        }
    }

    /// Load the related rows of a listing and build its response
    pub async fn details(&self, server: Server) -> ServiceResult<ServerResponse> {
        let version_id = server.version_id;
        let version = async move {
            match version_id {
                Some(version_id) => self.ctx.version_repo().find_by_id(version_id).await,
                None => Ok(None),
            }
        };

        let (tags, vote_count, version) = futures::try_join!(
            self.ctx.server_repo().tags_of(server.id),
            self.ctx.server_repo().vote_count(server.id),
            version,
        )?;

        Ok(ServerResponse::from(ServerWithDetails {
            server,
            version,
            tags,
            vote_count,
        }))
    }

    // ========================================================================
    // Full create / update
    // ========================================================================

    /// Create a listing owned by `actor`
    ///
    /// The address must answer on the status API. Slots and version are taken
    /// from the live status.
    #[instrument(skip(self, actor, input), fields(user_id = %actor.id, ip = %input.ip))]
    pub async fn create_server(
        &self,
        actor: &User,
        input: ServerInput,
    ) -> ServiceResult<ServerResponse> {
        ensure_active(actor)?;
        input.validate_in_order()?;

        let tags = self.resolve_tags(&input.tags, TAGS_TO_ADD_MESSAGE).await?;
        let status = self.online_status(&input.ip).await?;
        let version_id = self.resolve_version(&status).await?;

        let new_server = NewServer {
            title: input.title,
            content: input.content,
            cover: input.cover,
            ip: input.ip,
            version_id,
            slots: status.max_players,
            published: true,
            last_updated: Some(Utc::now()),
            author_id: actor.id,
        };

        let server = self
            .ctx
            .server_repo()
            .create(&new_server, &tags.ids())
            .await?;

        info!(
            server_id = %server.id,
            tags_created = tags.create.len(),
            "Server created"
        );

        self.details(server).await
    }

    /// Replace every editable field of a listing, including its tag set
    #[instrument(skip(self, actor, input), fields(user_id = %actor.id, ip = %input.ip))]
    pub async fn update_server(
        &self,
        actor: &User,
        id: ServerId,
        input: ServerInput,
    ) -> ServiceResult<ServerResponse> {
        input.validate_in_order()?;
        self.load_editable(actor, id).await?;

        let tags = self.resolve_tags(&input.tags, TAGS_TO_ADD_MESSAGE).await?;
        let status = self.online_status(&input.ip).await?;
        let version_id = self.resolve_version(&status).await?;

        let changes = ServerChanges {
            title: Some(input.title),
            content: input.content,
            cover: input.cover,
            ip: Some(input.ip),
            version_id,
            slots: status.max_players,
            last_updated: Some(Utc::now()),
            ..Default::default()
        };

        let server = self.ctx.server_repo().update(id, &changes).await?;
        self.ctx.server_repo().set_tags(id, &tags.ids()).await?;

        info!(server_id = %id, "Server updated");

        self.details(server).await
    }

    // ========================================================================
    // Single-field updates
    // ========================================================================

    #[instrument(skip(self, actor, request), fields(user_id = %actor.id))]
    pub async fn update_title(
        &self,
        actor: &User,
        id: ServerId,
        request: UpdateTitleRequest,
    ) -> ServiceResult<ServerResponse> {
        request.validate_in_order()?;
        self.apply(
            actor,
            id,
            ServerChanges {
                title: Some(request.title),
                ..Default::default()
            },
        )
        .await
    }

    #[instrument(skip(self, actor, request), fields(user_id = %actor.id))]
    pub async fn update_content(
        &self,
        actor: &User,
        id: ServerId,
        request: UpdateContentRequest,
    ) -> ServiceResult<ServerResponse> {
        request.validate_in_order()?;
        self.apply(
            actor,
            id,
            ServerChanges {
                content: Some(request.content),
                ..Default::default()
            },
        )
        .await
    }

    #[instrument(skip(self, actor, request), fields(user_id = %actor.id))]
    pub async fn update_cover(
        &self,
        actor: &User,
        id: ServerId,
        request: UpdateCoverRequest,
    ) -> ServiceResult<ServerResponse> {
        request.validate_in_order()?;
        self.apply(
            actor,
            id,
            ServerChanges {
                cover: Some(request.cover),
                ..Default::default()
            },
        )
        .await
    }

    /// Move a listing to a new address. The new address must be online.
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn update_ip(
        &self,
        actor: &User,
        id: ServerId,
        ip: String,
    ) -> ServiceResult<ServerResponse> {
        self.load_editable(actor, id).await?;
        self.online_status(&ip).await?;

        let server = self
            .ctx
            .server_repo()
            .update(
                id,
                &ServerChanges {
                    ip: Some(ip),
                    ..Default::default()
                },
            )
            .await?;

        info!(server_id = %id, ip = %server.ip, "Server address updated");

        self.details(server).await
    }

    /// Pull version and slots from the status API
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn update_remote_info(
        &self,
        actor: &User,
        id: ServerId,
        ip: String,
    ) -> ServiceResult<ServerResponse> {
        self.load_editable(actor, id).await?;
        let status = self.online_status(&ip).await?;
        let version_id = self.resolve_version(&status).await?;

        let changes = ServerChanges {
            version_id,
            slots: status.max_players,
            last_updated: Some(Utc::now()),
            ..Default::default()
        };

        let server = self.ctx.server_repo().update(id, &changes).await?;
        info!(server_id = %id, slots = ?server.slots, "Server remote info refreshed");

        self.details(server).await
    }

    // ========================================================================
    // Tags
    // ========================================================================

    /// Link tags to a listing, creating the ones that do not exist
    #[instrument(skip(self, actor, request), fields(user_id = %actor.id))]
    pub async fn add_tags(
        &self,
        actor: &User,
        id: ServerId,
        request: AddTagsRequest,
    ) -> ServiceResult<ServerResponse> {
        request.validate_in_order()?;
        let server = self.load_editable(actor, id).await?;

        let tags = self.resolve_tags(&request.tags, TAGS_TO_ADD_MESSAGE).await?;
        self.ctx.server_repo().connect_tags(id, &tags.ids()).await?;

        info!(server_id = %id, count = tags.len(), "Tags added");

        self.details(server).await
    }

    /// Unlink tags by name. Names the listing does not carry are ignored.
    #[instrument(skip(self, actor, request), fields(user_id = %actor.id))]
    pub async fn remove_tags(
        &self,
        actor: &User,
        id: ServerId,
        request: RemoveTagsRequest,
    ) -> ServiceResult<ServerResponse> {
        request.validate_in_order()?;
        let names = normalize_tag_names(&request.tags);
        if names.is_empty() {
            return Err(ServiceError::validation(TAGS_TO_REMOVE_MESSAGE));
        }

        let server = self.load_editable(actor, id).await?;
        self.ctx
            .server_repo()
            .disconnect_tags_by_name(id, &names)
            .await?;

        info!(server_id = %id, count = names.len(), "Tags removed");

        self.details(server).await
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    /// Soft delete: hide the listing without removing it
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn delete_server(&self, actor: &User, id: ServerId) -> ServiceResult<ServerResponse> {
        self.set_published(actor, id, false).await
    }

    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn publish_server(
        &self,
        actor: &User,
        id: ServerId,
    ) -> ServiceResult<ServerResponse> {
        self.set_published(actor, id, true).await
    }

    async fn set_published(
        &self,
        actor: &User,
        id: ServerId,
        published: bool,
    ) -> ServiceResult<ServerResponse> {
        let response = self
            .apply(
                actor,
                id,
                ServerChanges {
                    published: Some(published),
                    ..Default::default()
                },
            )
            .await?;

        info!(server_id = %id, published, "Server visibility changed");
        Ok(response)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Load a listing the caller is allowed to edit
    async fn load_editable(&self, actor: &User, id: ServerId) -> ServiceResult<Server> {
        let server = self
            .ctx
            .server_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ServerNotFound(id))?;

        ensure_can_edit(actor, &server).inspect_err(|e| {
            warn!(server_id = %id, user_id = %actor.id, error = %e, "Server edit rejected");
        })?;

        Ok(server)
    }

    async fn apply(
        &self,
        actor: &User,
        id: ServerId,
        changes: ServerChanges,
    ) -> ServiceResult<ServerResponse> {
        self.load_editable(actor, id).await?;
        let server = self.ctx.server_repo().update(id, &changes).await?;
        self.details(server).await
    }

    /// Resolve tag names, rejecting a list that is empty after normalisation
    async fn resolve_tags(
        &self,
        names: &[String],
        empty_message: &'static str,
    ) -> ServiceResult<ResolvedTags> {
        let tags = TagService::new(self.ctx).resolve_tags(names).await?;
        if tags.is_empty() {
            return Err(ServiceError::validation(empty_message));
        }
        Ok(tags)
    }

    /// Fetch the live status, failing when the server is offline
    async fn online_status(&self, ip: &str) -> ServiceResult<ServerStatus> {
        let status = self.ctx.status().fetch(ip).await?;
        if !status.online {
            warn!(ip = %ip, "Server is offline");
            return Err(DomainError::ServerOffline.into());
        }
        Ok(status)
    }

    async fn resolve_version(&self, status: &ServerStatus) -> ServiceResult<Option<VersionId>> {
        match status.version.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {
                let link = TagService::new(self.ctx).resolve_version(name).await?;
                Ok(Some(link.id()))
            }
            _ => Ok(None),
        }
    }
}

//! Voting service
//!
//! One vote per user, server and calendar month (UTC).

use chrono::{DateTime, Utc};
use mclist_core::entities::User;
use mclist_core::value_objects::ServerId;
use mclist_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{OutcomeResponse, ServerResponse};

use super::access::{can_view, ensure_active, ensure_admin};
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::server::ServerService;

pub const VOTE_ADDED: &str = "Your vote was added.";

/// Voting service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast a vote for a server now
    pub async fn vote(&self, actor: &User, server_id: ServerId) -> ServiceResult<OutcomeResponse> {
        self.vote_at(actor, server_id, Utc::now()).await
    }

    /// Cast a vote as if at `cast_at`
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn vote_at(
        &self,
        actor: &User,
        server_id: ServerId,
        cast_at: DateTime<Utc>,
    ) -> ServiceResult<OutcomeResponse> {
        ensure_active(actor)?;

        let server = self
            .ctx
            .server_repo()
            .find_by_id(server_id)
            .await?
            .ok_or(DomainError::ServerNotFound(server_id))?;
        if !can_view(Some(actor), &server) {
            return Err(DomainError::ServerNotFound(server_id).into());
        }

        let vote = self
            .ctx
            .vote_repo()
            .insert_if_absent(actor.id, server_id, cast_at)
            .await?
            .ok_or(DomainError::AlreadyVoted)?;

        info!(vote_id = %vote.id, server_id = %server_id, "Vote added");

        Ok(OutcomeResponse::new(VOTE_ADDED))
    }

    /// Delete every vote of a server. Admin only.
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn reset_votes(
        &self,
        actor: &User,
        server_id: ServerId,
    ) -> ServiceResult<ServerResponse> {
        ensure_admin(actor)?;

        let server = self
            .ctx
            .server_repo()
            .find_by_id(server_id)
            .await?
            .ok_or(DomainError::ServerNotFound(server_id))?;

        let removed = self.ctx.vote_repo().delete_for_server(server_id).await?;
        info!(server_id = %server_id, removed, "Votes reset");

        ServerService::new(self.ctx).details(server).await
    }
}

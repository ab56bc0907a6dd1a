//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use mclist_core::entities::Vote;
use mclist_core::traits::{RepoResult, VoteRepository};
use mclist_core::value_objects::{MonthWindow, ServerId, UserId};

use crate::models::VoteModel;

use super::error::{map_db_error, map_fk_violation, server_not_found, user_not_found};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn insert_if_absent(
        &self,
        author_id: UserId,
        server_id: ServerId,
        cast_at: DateTime<Utc>,
    ) -> RepoResult<Option<Vote>> {
        let window = MonthWindow::containing(cast_at);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // NOT EXISTS alone does not serialize two concurrent inserts under
        // READ COMMITTED; the pair lock does, and is released on commit.
        sqlx::query("SELECT pg_advisory_xact_lock($1, $2)")
            .bind(author_id.into_inner())
            .bind(server_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let inserted = sqlx::query_as::<_, VoteModel>(
            r"
            INSERT INTO votes (author_id, server_id, created_at)
            SELECT $1, $2, $3
            WHERE NOT EXISTS (
                SELECT 1 FROM votes
                WHERE author_id = $1
                  AND server_id = $2
                  AND created_at >= $4
                  AND created_at < $5
            )
            RETURNING id, author_id, server_id, created_at
            ",
        )
        .bind(author_id.into_inner())
        .bind(server_id.into_inner())
        .bind(cast_at)
        .bind(window.start)
        .bind(window.end)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            map_fk_violation(e, |constraint| {
                if constraint.contains("author") {
                    user_not_found(author_id)
                } else {
                    server_not_found(server_id)
                }
            })
        })?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(inserted.map(Vote::from))
    }

    #[instrument(skip(self))]
    async fn delete_for_server(&self, server_id: ServerId) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM votes WHERE server_id = $1")
            .bind(server_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

//! PostgreSQL implementation of TagRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mclist_core::entities::TagLink;
use mclist_core::traits::{RepoResult, TagRepository};

use crate::models::NamedUpsertModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TagRepository
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    /// Create a new PgTagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self))]
    async fn upsert_by_name(&self, name: &str) -> RepoResult<TagLink> {
        // The no-op update makes RETURNING yield the existing row on conflict
        let row = sqlx::query_as::<_, NamedUpsertModel>(
            r"
            INSERT INTO tags (name) VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, (xmax = 0) AS inserted
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(TagLink::from(row))
    }
}

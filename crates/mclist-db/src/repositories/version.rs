//! PostgreSQL implementation of VersionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mclist_core::entities::{Version, VersionLink};
use mclist_core::traits::{RepoResult, VersionRepository};
use mclist_core::value_objects::VersionId;

use crate::models::{NamedModel, NamedUpsertModel};

use super::error::map_db_error;

/// PostgreSQL implementation of VersionRepository
#[derive(Clone)]
pub struct PgVersionRepository {
    pool: PgPool,
}

impl PgVersionRepository {
    /// Create a new PgVersionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VersionRepository for PgVersionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: VersionId) -> RepoResult<Option<Version>> {
        let result = sqlx::query_as::<_, NamedModel>("SELECT id, name FROM versions WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Version::from))
    }

    #[instrument(skip(self))]
    async fn upsert_by_name(&self, name: &str) -> RepoResult<VersionLink> {
        let row = sqlx::query_as::<_, NamedUpsertModel>(
            r"
            INSERT INTO versions (name) VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, (xmax = 0) AS inserted
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(VersionLink::from(row))
    }
}

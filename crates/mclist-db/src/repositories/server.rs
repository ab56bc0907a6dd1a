//! PostgreSQL implementation of ServerRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use mclist_core::entities::{NewServer, Server, ServerChanges, Tag};
use mclist_core::traits::{RepoResult, ServerRepository};
use mclist_core::value_objects::{ServerId, TagId};

use crate::mappers::{ServerInsert, ServerUpdate};
use crate::models::{NamedModel, ServerModel};

use super::error::{map_db_error, map_fk_violation, server_not_found, user_not_found};

const SERVER_COLUMNS: &str = "id, title, content, cover, ip, version_id, slots, published, \
                              last_updated, author_id, created_at, updated_at";

fn raw_tag_ids(tag_ids: &[TagId]) -> Vec<i32> {
    tag_ids.iter().map(|id| id.into_inner()).collect()
}

/// PostgreSQL implementation of ServerRepository
#[derive(Clone)]
pub struct PgServerRepository {
    pool: PgPool,
}

impl PgServerRepository {
    /// Create a new PgServerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Link tags inside an open transaction
    async fn insert_links(
        tx: &mut Transaction<'_, Postgres>,
        id: ServerId,
        tag_ids: &[TagId],
    ) -> RepoResult<()> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r"
            INSERT INTO server_tags (server_id, tag_id)
            SELECT $1, UNNEST($2::INTEGER[])
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(id.into_inner())
        .bind(raw_tag_ids(tag_ids))
        .execute(&mut **tx)
        .await
        .map_err(|e| map_fk_violation(e, |_| server_not_found(id)))?;

        Ok(())
    }

    async fn ensure_exists(&self, id: ServerId) -> RepoResult<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM servers WHERE id = $1)")
                .bind(id.into_inner())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        if exists {
            Ok(())
        } else {
            Err(server_not_found(id))
        }
    }
}

#[async_trait]
impl ServerRepository for PgServerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ServerId) -> RepoResult<Option<Server>> {
        let result = sqlx::query_as::<_, ServerModel>(&format!(
            "SELECT {SERVER_COLUMNS} FROM servers WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Server::from))
    }

    #[instrument(skip(self, server), fields(author_id = %server.author_id))]
    async fn create(&self, server: &NewServer, tag_ids: &[TagId]) -> RepoResult<Server> {
        let values = ServerInsert::new(server);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, ServerModel>(&format!(
            r"
            INSERT INTO servers (title, content, cover, ip, version_id, slots, published, last_updated, author_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {SERVER_COLUMNS}
            "
        ))
        .bind(values.title)
        .bind(values.content)
        .bind(values.cover)
        .bind(values.ip)
        .bind(values.version_id)
        .bind(values.slots)
        .bind(values.published)
        .bind(values.last_updated)
        .bind(values.author_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_fk_violation(e, |_| user_not_found(server.author_id)))?;

        let created = Server::from(model);
        Self::insert_links(&mut tx, created.id, tag_ids).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(created)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: ServerId, changes: &ServerChanges) -> RepoResult<Server> {
        let values = ServerUpdate::new(changes);

        let model = sqlx::query_as::<_, ServerModel>(&format!(
            r"
            UPDATE servers
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                cover = COALESCE($4, cover),
                ip = COALESCE($5, ip),
                version_id = COALESCE($6, version_id),
                slots = COALESCE($7, slots),
                published = COALESCE($8, published),
                last_updated = COALESCE($9, last_updated),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {SERVER_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(values.title)
        .bind(values.content)
        .bind(values.cover)
        .bind(values.ip)
        .bind(values.version_id)
        .bind(values.slots)
        .bind(values.published)
        .bind(values.last_updated)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| server_not_found(id))?;

        Ok(Server::from(model))
    }

    #[instrument(skip(self))]
    async fn connect_tags(&self, id: ServerId, tag_ids: &[TagId]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        Self::insert_links(&mut tx, id, tag_ids).await?;
        tx.commit().await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn disconnect_tags_by_name(&self, id: ServerId, names: &[String]) -> RepoResult<()> {
        self.ensure_exists(id).await?;

        sqlx::query(
            r"
            DELETE FROM server_tags st
            USING tags t
            WHERE st.tag_id = t.id AND st.server_id = $1 AND t.name = ANY($2)
            ",
        )
        .bind(id.into_inner())
        .bind(names)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_tags(&self, id: ServerId, tag_ids: &[TagId]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM server_tags WHERE server_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        Self::insert_links(&mut tx, id, tag_ids).await?;
        tx.commit().await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn tags_of(&self, id: ServerId) -> RepoResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, NamedModel>(
            r"
            SELECT t.id, t.name
            FROM tags t
            JOIN server_tags st ON st.tag_id = t.id
            WHERE st.server_id = $1
            ORDER BY t.name
            ",
        )
        .bind(id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self))]
    async fn vote_count(&self, id: ServerId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM votes WHERE server_id = $1")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

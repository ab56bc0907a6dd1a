//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mclist_core::entities::{User, UserProfile};
use mclist_core::traits::{RepoResult, UserRepository};
use mclist_core::value_objects::{Role, UserId};

use crate::models::UserModel;

use super::error::{map_db_error, user_not_found};

const USER_COLUMNS: &str =
    "id, username, photo_url, email, role, banned, posts, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self, profile), fields(user_id = %profile.id))]
    async fn upsert_from_profile(&self, profile: &UserProfile) -> RepoResult<User> {
        // role and banned keep their column defaults on insert and are never updated here
        let model = sqlx::query_as::<_, UserModel>(&format!(
            r"
            INSERT INTO users (id, username, photo_url, email, posts)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET username = EXCLUDED.username,
                photo_url = EXCLUDED.photo_url,
                email = EXCLUDED.email,
                posts = EXCLUDED.posts,
                updated_at = NOW()
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(profile.id.into_inner())
        .bind(&profile.name)
        .bind(profile.photo_url.as_deref())
        .bind(&profile.email)
        .bind(profile.posts)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        User::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update_role(&self, id: UserId, role: Role) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(&format!(
            "UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| user_not_found(id))?;

        User::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update_banned(&self, id: UserId, banned: bool) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(&format!(
            "UPDATE users SET banned = $2, updated_at = NOW() WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id.into_inner())
        .bind(banned)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| user_not_found(id))?;

        User::try_from(model)
    }
}

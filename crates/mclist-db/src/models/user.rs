//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i32,
    pub username: String,
    pub photo_url: Option<String>,
    pub email: String,
    /// 'user' or 'admin', enforced by a CHECK constraint
    pub role: String,
    pub banned: bool,
    pub posts: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

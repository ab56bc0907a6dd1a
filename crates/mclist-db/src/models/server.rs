//! Server listing database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for servers table
#[derive(Debug, Clone, FromRow)]
pub struct ServerModel {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub cover: Option<String>,
    pub ip: String,
    pub version_id: Option<i32>,
    pub slots: Option<i32>,
    pub published: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub id: i32,
    pub author_id: i32,
    pub server_id: i32,
    pub created_at: DateTime<Utc>,
}

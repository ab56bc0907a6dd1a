//! Vote entity

use chrono::{DateTime, Utc};

use crate::value_objects::{ServerId, UserId, VoteId};

/// A user's vote for a server. At most one per user, server and calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: VoteId,
    pub author_id: UserId,
    pub server_id: ServerId,
    pub created_at: DateTime<Utc>,
}

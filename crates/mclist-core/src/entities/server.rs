//! Server entity - a Minecraft server listing

use chrono::{DateTime, Utc};

use crate::value_objects::{ServerId, UserId, VersionId};

/// Server listing entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub id: ServerId,
    pub title: String,
    pub content: Option<String>,
    pub cover: Option<String>,
    pub ip: String,
    pub version_id: Option<VersionId>,
    pub slots: Option<i32>,
    pub published: bool,
    /// Last time live status was pulled from the status API
    pub last_updated: Option<DateTime<Utc>>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Server {
    /// Check if a user authored this listing
    #[inline]
    pub fn is_author(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// Values for inserting a new listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServer {
    pub title: String,
    pub content: Option<String>,
    pub cover: Option<String>,
    pub ip: String,
    pub version_id: Option<VersionId>,
    pub slots: Option<i32>,
    pub published: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub author_id: UserId,
}

/// Partial update of a listing. `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub cover: Option<String>,
    pub ip: Option<String>,
    pub version_id: Option<VersionId>,
    pub slots: Option<i32>,
    pub published: Option<bool>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl ServerChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the changes to an in-memory entity
    pub fn apply_to(&self, server: &mut Server) {
        if let Some(title) = &self.title {
            server.title.clone_from(title);
        }
        if let Some(content) = &self.content {
            server.content = Some(content.clone());
        }
        if let Some(cover) = &self.cover {
            server.cover = Some(cover.clone());
        }
        if let Some(ip) = &self.ip {
            server.ip.clone_from(ip);
        }
        if let Some(version_id) = self.version_id {
            server.version_id = Some(version_id);
        }
        if let Some(slots) = self.slots {
            server.slots = Some(slots);
        }
        if let Some(published) = self.published {
            server.published = published;
        }
        if let Some(last_updated) = self.last_updated {
            server.last_updated = Some(last_updated);
        }
        server.updated_at = Utc::now();
    }
}

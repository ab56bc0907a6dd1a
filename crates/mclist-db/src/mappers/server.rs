//! Server entity <-> model mapper

use mclist_core::entities::{NewServer, Server, ServerChanges};
use mclist_core::value_objects::{ServerId, UserId, VersionId};

use crate::models::ServerModel;

/// Convert ServerModel to Server entity
impl From<ServerModel> for Server {
    fn from(model: ServerModel) -> Self {
        Server {
            id: ServerId::new(model.id),
            title: model.title,
            content: model.content,
            cover: model.cover,
            ip: model.ip,
            version_id: model.version_id.map(VersionId::new),
            slots: model.slots,
            published: model.published,
            last_updated: model.last_updated,
            author_id: UserId::new(model.author_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values bound by the insert statement, in column order
pub struct ServerInsert<'a> {
    pub title: &'a str,
    pub content: Option<&'a str>,
    pub cover: Option<&'a str>,
    pub ip: &'a str,
    pub version_id: Option<i32>,
    pub slots: Option<i32>,
    pub published: bool,
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
    pub author_id: i32,
}

impl<'a> ServerInsert<'a> {
    pub fn new(server: &'a NewServer) -> Self {
        Self {
            title: &server.title,
            content: server.content.as_deref(),
            cover: server.cover.as_deref(),
            ip: &server.ip,
            version_id: server.version_id.map(VersionId::into_inner),
            slots: server.slots,
            published: server.published,
            last_updated: server.last_updated,
            author_id: server.author_id.into_inner(),
        }
    }
}

/// Values bound by the partial update statement. `None` keeps the column.
pub struct ServerUpdate<'a> {
    pub title: Option<&'a str>,
    pub content: Option<&'a str>,
    pub cover: Option<&'a str>,
    pub ip: Option<&'a str>,
    pub version_id: Option<i32>,
    pub slots: Option<i32>,
    pub published: Option<bool>,
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,
}

impl<'a> ServerUpdate<'a> {
    pub fn new(changes: &'a ServerChanges) -> Self {
        Self {
            title: changes.title.as_deref(),
            content: changes.content.as_deref(),
            cover: changes.cover.as_deref(),
            ip: changes.ip.as_deref(),
            version_id: changes.version_id.map(VersionId::into_inner),
            slots: changes.slots,
            published: changes.published,
            last_updated: changes.last_updated,
        }
    }
}

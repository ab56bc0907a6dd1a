//! GraphQL object and union types
//!
//! Every mutation resolves to a union of its payload and [`MutationError`],
//! so failures travel as data instead of top-level `errors`.

use async_graphql::{SimpleObject, Union};
use chrono::{DateTime, Utc};
use mclist_service::dto::{
    OutcomeResponse, ServerResponse, TagResponse, UserResponse, VersionResponse,
};

// ============================================================================
// Objects
// ============================================================================

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: i32,
    pub username: String,
    pub photo_url: Option<String>,
    pub email: String,
    pub role: String,
    pub banned: bool,
    pub posts: i32,
    pub created_at: DateTime<Utc>,
}

impl From<UserResponse> for UserObject {
    fn from(user: UserResponse) -> Self {
        Self {
            id: user.id,
            username: user.username,
            photo_url: user.photo_url,
            email: user.email,
            role: user.role,
            banned: user.banned,
            posts: user.posts,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Tag")]
pub struct TagObject {
    pub id: i32,
    pub name: String,
}

impl From<TagResponse> for TagObject {
    fn from(tag: TagResponse) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Version")]
pub struct VersionObject {
    pub id: i32,
    pub name: String,
}

impl From<VersionResponse> for VersionObject {
    fn from(version: VersionResponse) -> Self {
        Self {
            id: version.id,
            name: version.name,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Server")]
pub struct ServerObject {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub cover: Option<String>,
    pub ip: String,
    pub slots: Option<i32>,
    pub published: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub author_id: i32,
    pub version: Option<VersionObject>,
    pub tags: Vec<TagObject>,
    pub vote_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServerResponse> for ServerObject {
    fn from(server: ServerResponse) -> Self {
        Self {
            id: server.id,
            title: server.title,
            content: server.content,
            cover: server.cover,
            ip: server.ip,
            slots: server.slots,
            published: server.published,
            last_updated: server.last_updated,
            author_id: server.author_id,
            version: server.version.map(VersionObject::from),
            tags: server.tags.into_iter().map(TagObject::from).collect(),
            vote_count: server.vote_count,
            created_at: server.created_at,
            updated_at: server.updated_at,
        }
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// Logged-in user. The tokens themselves are only sent as cookies.
#[derive(Debug, Clone, SimpleObject)]
pub struct AuthPayload {
    pub user: UserObject,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct UserPayload {
    pub user: UserObject,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct ServerPayload {
    pub server: ServerObject,
}

/// Success message for mutations without an entity result
#[derive(Debug, Clone, SimpleObject)]
pub struct Outcome {
    pub outcome: String,
}

impl From<OutcomeResponse> for Outcome {
    fn from(response: OutcomeResponse) -> Self {
        Self {
            outcome: response.outcome,
        }
    }
}

/// A failed mutation
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct MutationError {
    /// Stable machine-readable code such as `VALIDATION_ERROR`
    pub code: String,
    /// Human-readable message
    pub message: String,
}

// ============================================================================
// Unions
// ============================================================================

#[derive(Debug, Clone, Union)]
pub enum AuthResult {
    AuthPayload(AuthPayload),
    MutationError(MutationError),
}

#[derive(Debug, Clone, Union)]
pub enum UserResult {
    UserPayload(UserPayload),
    MutationError(MutationError),
}

#[derive(Debug, Clone, Union)]
pub enum ServerResult {
    ServerPayload(ServerPayload),
    MutationError(MutationError),
}

#[derive(Debug, Clone, Union)]
pub enum OutcomeResult {
    Outcome(Outcome),
    MutationError(MutationError),
}

impl From<UserResponse> for UserPayload {
    fn from(user: UserResponse) -> Self {
        Self {
            user: UserObject::from(user),
        }
    }
}

impl From<ServerResponse> for ServerPayload {
    fn from(server: ServerResponse) -> Self {
        Self {
            server: ServerObject::from(server),
        }
    }
}

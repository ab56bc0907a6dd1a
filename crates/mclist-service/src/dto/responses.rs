//! Response DTOs returned by services
//!
//! The GraphQL layer wraps these in its own object types.

use chrono::{DateTime, Utc};
use mclist_common::auth::IssuedTokens;
use mclist_core::{Server, Tag, User, Version};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Result of a login or refresh: the user plus the tokens to set as cookies
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub tokens: IssuedTokens,
}

/// Generic success message for mutations without an entity result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeResponse {
    pub outcome: String,
}

impl OutcomeResponse {
    pub fn new(outcome: impl Into<String>) -> Self {
        Self {
            outcome: outcome.into(),
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub photo_url: Option<String>,
    pub email: String,
    pub role: String,
    pub banned: bool,
    pub posts: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into_inner(),
            username: user.username.clone(),
            photo_url: user.photo_url.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            banned: user.banned,
            posts: user.posts,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Server Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagResponse {
    pub id: i32,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into_inner(),
            name: tag.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionResponse {
    pub id: i32,
    pub name: String,
}

impl From<Version> for VersionResponse {
    fn from(version: Version) -> Self {
        Self {
            id: version.id.into_inner(),
            name: version.name,
        }
    }
}

/// A listing with its tags, version and vote count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerResponse {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub cover: Option<String>,
    pub ip: String,
    pub slots: Option<i32>,
    pub published: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub author_id: i32,
    pub version: Option<VersionResponse>,
    pub tags: Vec<TagResponse>,
    pub vote_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Server entity plus the related rows needed to build a [`ServerResponse`]
#[derive(Debug, Clone)]
pub struct ServerWithDetails {
    pub server: Server,
    pub version: Option<Version>,
    pub tags: Vec<Tag>,
    pub vote_count: i64,
}

impl From<ServerWithDetails> for ServerResponse {
    fn from(details: ServerWithDetails) -> Self {
        let ServerWithDetails {
            server,
            version,
            tags,
            vote_count,
        } = details;

        Self {
            id: server.id.into_inner(),
            title: server.title,
            content: server.content,
            cover: server.cover,
            ip: server.ip,
            slots: server.slots,
            published: server.published,
            last_updated: server.last_updated,
            author_id: server.author_id.into_inner(),
            version: version.map(VersionResponse::from),
            tags: tags.into_iter().map(TagResponse::from).collect(),
            vote_count,
            created_at: server.created_at,
            updated_at: server.updated_at,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness probe response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

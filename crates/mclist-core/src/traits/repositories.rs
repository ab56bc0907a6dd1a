//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    NewServer, Server, ServerChanges, Tag, TagLink, User, UserProfile, Version, VersionLink,
    Vote,
};
use crate::error::DomainError;
use crate::value_objects::{Role, ServerId, TagId, UserId, VersionId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Insert the user on first login, or refresh the provider-owned fields.
    /// Role and ban state are never touched.
    async fn upsert_from_profile(&self, profile: &UserProfile) -> RepoResult<User>;

    /// Set a user's role
    async fn update_role(&self, id: UserId, role: Role) -> RepoResult<User>;

    /// Set a user's ban flag
    async fn update_banned(&self, id: UserId, banned: bool) -> RepoResult<User>;
}

// ============================================================================
// Server Repository
// ============================================================================

#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// Find listing by ID
    async fn find_by_id(&self, id: ServerId) -> RepoResult<Option<Server>>;

    /// Insert a listing and link it to the given tags
    async fn create(&self, server: &NewServer, tag_ids: &[TagId]) -> RepoResult<Server>;

    /// Apply a partial update
    async fn update(&self, id: ServerId, changes: &ServerChanges) -> RepoResult<Server>;

    /// Link tags to a listing, ignoring links that already exist
    async fn connect_tags(&self, id: ServerId, tag_ids: &[TagId]) -> RepoResult<()>;

    /// Unlink tags from a listing by name. Unknown names are ignored.
    async fn disconnect_tags_by_name(&self, id: ServerId, names: &[String]) -> RepoResult<()>;

    /// Replace the tag set of a listing
    async fn set_tags(&self, id: ServerId, tag_ids: &[TagId]) -> RepoResult<()>;

    /// Tags currently linked to a listing, ordered by name
    async fn tags_of(&self, id: ServerId) -> RepoResult<Vec<Tag>>;

    /// Total number of votes a listing has received
    async fn vote_count(&self, id: ServerId) -> RepoResult<i64>;
}

// ============================================================================
// Tag Repository
// ============================================================================

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Resolve a tag name to a row, inserting it when missing.
    /// Safe under concurrent calls for the same name.
    async fn upsert_by_name(&self, name: &str) -> RepoResult<TagLink>;
}

// ============================================================================
// Version Repository
// ============================================================================

#[async_trait]
pub trait VersionRepository: Send + Sync {
    /// Find version by ID
    async fn find_by_id(&self, id: VersionId) -> RepoResult<Option<Version>>;

    /// Resolve a version name to a row, inserting it when missing
    async fn upsert_by_name(&self, name: &str) -> RepoResult<VersionLink>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Record a vote cast at `cast_at` unless the author already voted for the
    /// listing in the same calendar month. Returns `None` when a vote exists.
    ///
    /// Check and insert happen in one statement, so two concurrent calls for
    /// the same pair cannot both succeed.
    async fn insert_if_absent(
        &self,
        author_id: UserId,
        server_id: ServerId,
        cast_at: DateTime<Utc>,
    ) -> RepoResult<Option<Vote>>;

    /// Delete every vote of a listing, returning how many were removed
    async fn delete_for_server(&self, server_id: ServerId) -> RepoResult<u64>;
}

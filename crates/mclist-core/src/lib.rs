//! # mclist-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! ports for the external OAuth and server status providers.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    NewServer, Server, ServerChanges, Tag, TagLink, User, UserProfile, Version, VersionLink, Vote,
    normalize_tag_names,
};
pub use error::DomainError;
pub use traits::{
    OAuthProvider, OAuthToken, ProviderError, ProviderResult, RepoResult, ServerRepository,
    ServerStatus, ServerStatusProvider, TagRepository, UserRepository, VersionRepository,
    VoteRepository,
};
pub use value_objects::{
    IdParseError, MonthWindow, Role, RoleParseError, ServerId, TagId, UserId, VersionId, VoteId,
};

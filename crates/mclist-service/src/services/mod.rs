//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod auth;
pub mod context;
pub mod error;
pub mod server;
pub mod tag;
pub mod user;
pub mod vote;

// Re-export all services for convenience
pub use auth::{AuthService, LOGGED_OUT};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use server::ServerService;
pub use tag::{ResolvedTags, TagService};
pub use user::UserService;
pub use vote::{VoteService, VOTE_ADDED};

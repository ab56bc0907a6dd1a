//! # mclist-service
//!
//! Application layer containing business logic, services, DTOs, and the HTTP
//! clients for the OAuth provider and the server status API.

pub mod clients;
pub mod dto;
pub mod services;

pub use clients::{build_http_client, HttpOAuthProvider, McSrvStatProvider};
pub use services::{
    AuthService, ResolvedTags, ServerService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, TagService, UserService, VoteService,
};

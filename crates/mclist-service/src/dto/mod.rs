//! Data transfer objects for mutation inputs and results
//!
//! This module provides:
//! - Request DTOs with validation for mutation inputs
//! - Response DTOs and the conversions from domain entities

pub mod requests;
pub mod responses;

pub use requests::{
    first_message, AddTagsRequest, RemoveTagsRequest, ServerInput, UpdateContentRequest,
    UpdateCoverRequest, UpdateTitleRequest, ValidateInOrder, TAGS_TO_ADD_MESSAGE,
    TAGS_TO_REMOVE_MESSAGE,
};

pub use responses::{
    AuthResponse, HealthChecks, HealthResponse, OutcomeResponse, ReadinessResponse,
    ServerResponse, ServerWithDetails, TagResponse, UserResponse, VersionResponse,
};

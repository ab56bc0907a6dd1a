//! Request DTOs for mutations
//!
//! All request DTOs implement `Validate`. Only the first violation is reported,
//! in the field order given by [`ValidateInOrder::FIELD_ORDER`].

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::services::{ServiceError, ServiceResult};

const TITLE_MIN: usize = 10;
const TITLE_MAX: usize = 280;
const CONTENT_MIN: usize = 280;
const CONTENT_MAX: usize = 10_000;

pub const TAGS_TO_ADD_MESSAGE: &str = "You need to specify at least one tag to add.";
pub const TAGS_TO_REMOVE_MESSAGE: &str = "You need to specify at least one tag to remove.";

static IMAGE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[/.](gif|jpg|jpeg|tiff|png)$").expect("Invalid regex pattern for cover images")
});

// ============================================================================
// Field validators
// ============================================================================

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if len < TITLE_MIN {
        return Err(failure("title", "Title must be at least 10 characters long."));
    }
    if len > TITLE_MAX {
        return Err(failure("title", "Title must be less than 280 characters long."));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), ValidationError> {
    let len = content.chars().count();
    if len < CONTENT_MIN {
        return Err(failure("content", "Content must be at least 280 characters long."));
    }
    if len > CONTENT_MAX {
        return Err(failure("content", "Content must be less than 10000 characters long."));
    }
    Ok(())
}

/// An empty cover is not a malformed url, it fails the image check
fn validate_cover(cover: &str) -> Result<(), ValidationError> {
    if !cover.is_empty() && !cover.validate_url() {
        return Err(failure("cover", "Cover needs to be an url."));
    }
    if !IMAGE_PATH.is_match(cover) {
        return Err(failure("cover", "Cover needs to be an image."));
    }
    Ok(())
}

// ============================================================================
// First-error reporting
// ============================================================================

/// Validation that surfaces a single message, checking fields in a fixed order
pub trait ValidateInOrder: Validate {
    /// Field names in the order their violations take precedence
    const FIELD_ORDER: &'static [&'static str];

    /// Validate and convert the first violation into a service error
    fn validate_in_order(&self) -> ServiceResult<()> {
        self.validate()
            .map_err(|errors| ServiceError::validation(first_message(&errors, Self::FIELD_ORDER)))
    }
}

/// Message of the first failing field in `order`, falling back to any failure
pub fn first_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .chain(field_errors.values())
        .flat_map(|errors| errors.iter())
        .next()
        .map_or_else(
            || "Invalid input.".to_string(),
            |error| {
                error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string)
            },
        )
}

// ============================================================================
// Server Requests
// ============================================================================

/// Full listing input used by `createServer` and `updateServer`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerInput {
    #[validate(custom(function = "validate_title"))]
    pub title: String,

    #[validate(custom(function = "validate_content"))]
    pub content: Option<String>,

    #[validate(custom(function = "validate_cover"))]
    pub cover: Option<String>,

    #[validate(length(min = 1, message = "You need to specify at least one tag to add."))]
    pub tags: Vec<String>,

    /// Address looked up on the status API
    pub ip: String,
}

impl ValidateInOrder for ServerInput {
    const FIELD_ORDER: &'static [&'static str] = &["title", "content", "cover", "tags"];
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTitleRequest {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
}

impl ValidateInOrder for UpdateTitleRequest {
    const FIELD_ORDER: &'static [&'static str] = &["title"];
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateContentRequest {
    #[validate(custom(function = "validate_content"))]
    pub content: String,
}

impl ValidateInOrder for UpdateContentRequest {
    const FIELD_ORDER: &'static [&'static str] = &["content"];
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCoverRequest {
    #[validate(custom(function = "validate_cover"))]
    pub cover: String,
}

impl ValidateInOrder for UpdateCoverRequest {
    const FIELD_ORDER: &'static [&'static str] = &["cover"];
}

/// Tags to link to a listing
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddTagsRequest {
    #[validate(length(min = 1, message = "You need to specify at least one tag to add."))]
    pub tags: Vec<String>,
}

impl ValidateInOrder for AddTagsRequest {
    const FIELD_ORDER: &'static [&'static str] = &["tags"];
}

/// Tags to unlink from a listing
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RemoveTagsRequest {
    #[validate(length(min = 1, message = "You need to specify at least one tag to remove."))]
    pub tags: Vec<String>,
}

impl ValidateInOrder for RemoveTagsRequest {
    const FIELD_ORDER: &'static [&'static str] = &["tags"];
}

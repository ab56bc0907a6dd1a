//! Mapping service failures onto GraphQL results
//!
//! Mutations return failures as the `MutationError` union member. Queries,
//! which have no union, return a GraphQL error carrying the same code.

use async_graphql::{Context, ErrorExtensions};
use mclist_service::dto::{AuthResponse, OutcomeResponse, ServerResponse, UserResponse};
use mclist_service::{ServiceError, ServiceResult};
use tracing::{error, warn};

use super::types::{
    AuthPayload, AuthResult, MutationError, Outcome, OutcomeResult, ServerPayload, ServerResult,
    UserObject, UserPayload, UserResult,
};

const INTERNAL_MESSAGE: &str = "Something went wrong. Please try again later.";

impl From<&ServiceError> for MutationError {
    fn from(err: &ServiceError) -> Self {
        let code = err.error_code();
        let message = match code {
            "DATABASE_ERROR" | "INTERNAL_ERROR" => INTERNAL_MESSAGE.to_string(),
            _ => err.to_string(),
        };

        Self {
            code: code.to_string(),
            message,
        }
    }
}

/// Log a failure against the field that produced it
fn log_failure(field: &str, err: &ServiceError) {
    if err.is_server_error() {
        error!(field, code = err.error_code(), error = %err, "Resolver failed");
    } else {
        warn!(field, code = err.error_code(), error = %err, "Resolver rejected request");
    }
}

pub fn mutation_error(ctx: &Context<'_>, err: &ServiceError) -> MutationError {
    log_failure(ctx.field().name(), err);
    MutationError::from(err)
}

/// GraphQL error with the failure's code in `extensions.code`
pub fn query_error(ctx: &Context<'_>, err: &ServiceError) -> async_graphql::Error {
    log_failure(ctx.field().name(), err);
    let MutationError { code, message } = MutationError::from(err);
    async_graphql::Error::new(message).extend_with(|_, extensions| extensions.set("code", code))
}

impl AuthResult {
    pub fn from_service(ctx: &Context<'_>, result: ServiceResult<AuthResponse>) -> Self {
        match result {
            Ok(auth) => Self::AuthPayload(AuthPayload {
                user: UserObject::from(auth.user),
            }),
            Err(err) => Self::MutationError(mutation_error(ctx, &err)),
        }
    }
}

impl UserResult {
    pub fn from_service(ctx: &Context<'_>, result: ServiceResult<UserResponse>) -> Self {
        match result {
            Ok(user) => Self::UserPayload(UserPayload::from(user)),
            Err(err) => Self::MutationError(mutation_error(ctx, &err)),
        }
    }
}

impl ServerResult {
    pub fn from_service(ctx: &Context<'_>, result: ServiceResult<ServerResponse>) -> Self {
        match result {
            Ok(server) => Self::ServerPayload(ServerPayload::from(server)),
            Err(err) => Self::MutationError(mutation_error(ctx, &err)),
        }
    }
}

impl OutcomeResult {
    pub fn from_service(ctx: &Context<'_>, result: ServiceResult<OutcomeResponse>) -> Self {
        match result {
            Ok(outcome) => Self::Outcome(Outcome::from(outcome)),
            Err(err) => Self::MutationError(mutation_error(ctx, &err)),
        }
    }
}

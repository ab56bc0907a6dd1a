//! GraphQL schema: query and mutation roots, object types and error mapping

pub mod context;
pub mod error;
pub mod mutations;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use mclist_service::ServiceContext;

use crate::cookies::CookiePolicy;

pub use mutations::Mutation;
pub use query::Query;
pub use types::{
    AuthPayload, AuthResult, MutationError, Outcome, OutcomeResult, ServerObject, ServerPayload,
    ServerResult, TagObject, UserObject, UserPayload, UserResult, VersionObject,
};

pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the schema with the shared service context attached
///
/// Per-request token cookies are attached to each request as
/// [`RequestCookies`](crate::cookies::RequestCookies).
pub fn build_schema(
    service_context: Arc<ServiceContext>,
    cookie_policy: CookiePolicy,
) -> AppSchema {
    Schema::build(Query, Mutation::default(), EmptySubscription)
        .data(service_context)
        .data(cookie_policy)
        .finish()
}

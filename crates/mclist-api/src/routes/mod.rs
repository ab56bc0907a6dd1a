//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{graphql, health};
use crate::state::AppState;

/// GraphQL routes. The playground is only served outside production.
pub fn create_router(is_production: bool) -> Router<AppState> {
    let graphql_route = if is_production {
        post(graphql::graphql_handler)
    } else {
        get(graphql::graphiql).post(graphql::graphql_handler)
    };

    Router::new().route("/graphql", graphql_route)
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

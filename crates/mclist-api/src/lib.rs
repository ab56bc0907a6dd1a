//! # mclist-api
//!
//! GraphQL API server built with Axum and async-graphql.

pub mod cookies;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;

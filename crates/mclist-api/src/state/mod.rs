//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the configuration, the built GraphQL schema and the database pool.

use std::sync::Arc;

use mclist_common::AppConfig;
use mclist_db::PgPool;
use mclist_service::ServiceContext;

use crate::cookies::CookiePolicy;
use crate::graphql::{build_schema, AppSchema};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Schema with the service context attached
    schema: AppSchema,
    /// Pool used by the readiness probe
    pool: PgPool,
}

impl AppState {
    /// Create a new AppState and build the schema around the service context
    pub fn new(service_context: ServiceContext, config: AppConfig, pool: PgPool) -> Self {
        let service_context = Arc::new(service_context);
        let schema = build_schema(
            Arc::clone(&service_context),
            CookiePolicy::for_environment(config.app.env),
        );

        Self {
            service_context,
            config: Arc::new(config),
            schema,
            pool,
        }
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn schema(&self) -> &AppSchema {
        &self.schema
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("env", &self.config.app.env)
            .finish_non_exhaustive()
    }
}

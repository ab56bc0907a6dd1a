//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use mclist_common::{AppConfig, AppError, AppResult, TokenService};
use mclist_db::{
    create_pool, run_migrations, PgServerRepository, PgTagRepository, PgUserRepository,
    PgVersionRepository, PgVoteRepository, PoolConfig,
};
use mclist_service::{
    build_http_client, HttpOAuthProvider, McSrvStatProvider, ServiceContextBuilder,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes get the base stack only, so probes are never rate limited.
pub fn create_app(state: AppState) -> AppResult<Router> {
    let config = state.config();
    let is_production = config.app.env.is_production();

    let api = apply_middleware_with_config(
        create_router(is_production),
        &config.rate_limit,
        &config.cors,
        is_production,
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(format!("migration failed: {e}")))?;

    // Outbound HTTP
    let http_client = build_http_client(&config.http_client)?;
    let oauth = Arc::new(HttpOAuthProvider::new(
        http_client.clone(),
        config.oauth.clone(),
    ));
    let status = Arc::new(McSrvStatProvider::new(http_client, &config.status.base_url)?);

    // Create token service
    let token_service = Arc::new(TokenService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .server_repo(Arc::new(PgServerRepository::new(pool.clone())))
        .tag_repo(Arc::new(PgTagRepository::new(pool.clone())))
        .version_repo(Arc::new(PgVersionRepository::new(pool.clone())))
        .vote_repo(Arc::new(PgVoteRepository::new(pool.clone())))
        .oauth(oauth)
        .status(status)
        .token_service(token_service)
        .build()?;

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("failed to bind to {addr}: {e}")))?;

    let local_addr: SocketAddr = listener.local_addr().map_err(AppError::internal)?;
    info!("Server listening on http://{}/graphql", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state)?;

    // Run server
    run_server(app, &addr).await
}

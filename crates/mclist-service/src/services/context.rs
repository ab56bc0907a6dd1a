//! Service context - dependency container for services
//!
//! Holds all repositories, external providers, and the token service.

use std::sync::Arc;

use mclist_common::auth::TokenService;
use mclist_core::traits::{
    OAuthProvider, ServerRepository, ServerStatusProvider, TagRepository, UserRepository,
    VersionRepository, VoteRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories (PostgreSQL in production, in-memory in tests)
/// - The OAuth provider and server status API clients
/// - The token service for signing and verifying JWTs
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    server_repo: Arc<dyn ServerRepository>,
    tag_repo: Arc<dyn TagRepository>,
    version_repo: Arc<dyn VersionRepository>,
    vote_repo: Arc<dyn VoteRepository>,

    // External providers
    oauth: Arc<dyn OAuthProvider>,
    status: Arc<dyn ServerStatusProvider>,

    // Services
    token_service: Arc<TokenService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        server_repo: Arc<dyn ServerRepository>,
        tag_repo: Arc<dyn TagRepository>,
        version_repo: Arc<dyn VersionRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        oauth: Arc<dyn OAuthProvider>,
        status: Arc<dyn ServerStatusProvider>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repo,
            server_repo,
            tag_repo,
            version_repo,
            vote_repo,
            oauth,
            status,
            token_service,
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn server_repo(&self) -> &dyn ServerRepository {
        self.server_repo.as_ref()
    }

    pub fn tag_repo(&self) -> &dyn TagRepository {
        self.tag_repo.as_ref()
    }

    pub fn version_repo(&self) -> &dyn VersionRepository {
        self.version_repo.as_ref()
    }

    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    // === External providers ===

    /// Get the OAuth provider client
    pub fn oauth(&self) -> &dyn OAuthProvider {
        self.oauth.as_ref()
    }

    /// Get the server status API client
    pub fn status(&self) -> &dyn ServerStatusProvider {
        self.status.as_ref()
    }

    // === Services ===

    /// Get the token service
    pub fn token_service(&self) -> &TokenService {
        self.token_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("providers", &"...")
            .field("token_service", &self.token_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    server_repo: Option<Arc<dyn ServerRepository>>,
    tag_repo: Option<Arc<dyn TagRepository>>,
    version_repo: Option<Arc<dyn VersionRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    oauth: Option<Arc<dyn OAuthProvider>>,
    status: Option<Arc<dyn ServerStatusProvider>>,
    token_service: Option<Arc<TokenService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn server_repo(mut self, repo: Arc<dyn ServerRepository>) -> Self {
        self.server_repo = Some(repo);
        self
    }

    pub fn tag_repo(mut self, repo: Arc<dyn TagRepository>) -> Self {
        self.tag_repo = Some(repo);
        self
    }

    pub fn version_repo(mut self, repo: Arc<dyn VersionRepository>) -> Self {
        self.version_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn oauth(mut self, provider: Arc<dyn OAuthProvider>) -> Self {
        self.oauth = Some(provider);
        self
    }

    pub fn status(mut self, provider: Arc<dyn ServerStatusProvider>) -> Self {
        self.status = Some(provider);
        self
    }

    pub fn token_service(mut self, service: Arc<TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
            self.server_repo.ok_or_else(|| missing("server_repo"))?,
            self.tag_repo.ok_or_else(|| missing("tag_repo"))?,
            self.version_repo.ok_or_else(|| missing("version_repo"))?,
            self.vote_repo.ok_or_else(|| missing("vote_repo"))?,
            self.oauth.ok_or_else(|| missing("oauth"))?,
            self.status.ok_or_else(|| missing("status"))?,
            self.token_service.ok_or_else(|| missing("token_service"))?,
        ))
    }
}

fn missing(dependency: &str) -> ServiceError {
    ServiceError::internal(format!("{dependency} is required"))
}

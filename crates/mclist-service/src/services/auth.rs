//! Authentication service
//!
//! Handles OAuth login, token refresh, logout, and resolving the caller from
//! an access token.

use mclist_common::AppError;
use mclist_core::entities::User;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, OutcomeResponse, UserResponse};

use super::access::{ensure_active, ensure_admin};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub const LOGGED_OUT: &str = "You've been logged out.";

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Exchange an OAuth authorization code, mirror the profile locally and
    /// issue a token pair
    #[instrument(skip(self, code))]
    pub async fn oauth_login(&self, code: &str) -> ServiceResult<AuthResponse> {
        let token = self.ctx.oauth().exchange_code(code).await.map_err(|e| {
            warn!(error = %e, "OAuth code exchange failed");
            ServiceError::from(e)
        })?;

        let profile = self.ctx.oauth().fetch_profile(&token).await.map_err(|e| {
            warn!(error = %e, "OAuth profile fetch failed");
            ServiceError::from(e)
        })?;

        let user = self.ctx.user_repo().upsert_from_profile(&profile).await?;
        let tokens = self.ctx.token_service().issue(&user)?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthResponse {
            user: UserResponse::from(&user),
            tokens,
        })
    }

    /// Re-issue both tokens from a valid refresh token
    ///
    /// The user is reloaded so the new access token carries the current role
    /// and ban flag.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: Option<&str>) -> ServiceResult<AuthResponse> {
        let token = refresh_token
            .filter(|token| !token.is_empty())
            .ok_or(AppError::MissingAuth)?;
        let claims = self.ctx.token_service().verify_refresh(token)?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;
        let tokens = self.ctx.token_service().issue(&user)?;

        info!(user_id = %user.id, "Tokens refreshed");

        Ok(AuthResponse {
            user: UserResponse::from(&user),
            tokens,
        })
    }

    /// Logout. Tokens are stateless, so the caller only clears its cookies.
    pub fn logout(&self) -> OutcomeResponse {
        OutcomeResponse::new(LOGGED_OUT)
    }

    /// The user identified by an access token, or `None` when the token is
    /// missing, invalid, or names an unknown user
    #[instrument(skip(self, access_token))]
    pub async fn current_user(
        &self,
        access_token: Option<&str>,
    ) -> ServiceResult<Option<UserResponse>> {
        Ok(self
            .viewer(access_token)
            .await?
            .map(|user| UserResponse::from(&user)))
    }

    /// Like [`authenticate`](Self::authenticate), but an anonymous caller is
    /// `None` instead of an error
    pub async fn viewer(&self, access_token: Option<&str>) -> ServiceResult<Option<User>> {
        match self.authenticate(access_token).await {
            Ok(user) => Ok(Some(user)),
            Err(ServiceError::App(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Resolve the caller from an access token
    ///
    /// Role and ban state come from the user row, not from the token claims.
    pub async fn authenticate(&self, access_token: Option<&str>) -> ServiceResult<User> {
        let token = access_token
            .filter(|token| !token.is_empty())
            .ok_or(AppError::MissingAuth)?;
        let claims = self.ctx.token_service().verify_access(token)?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        Ok(user)
    }

    /// Resolve the caller and reject banned users
    pub async fn authenticate_active(&self, access_token: Option<&str>) -> ServiceResult<User> {
        let user = self.authenticate(access_token).await?;
        ensure_active(&user).inspect_err(|_| {
            warn!(user_id = %user.id, "Banned user attempted a mutation");
        })?;
        Ok(user)
    }

    /// Resolve the caller and require the admin role
    pub async fn authenticate_admin(&self, access_token: Option<&str>) -> ServiceResult<User> {
        let user = self.authenticate(access_token).await?;
        ensure_admin(&user).inspect_err(|_| {
            warn!(user_id = %user.id, "Non-admin attempted an admin mutation");
        })?;
        Ok(user)
    }
}

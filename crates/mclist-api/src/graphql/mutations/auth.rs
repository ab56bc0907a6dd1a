//! Login, token refresh and logout. Tokens travel as HTTP-only cookies.

use async_graphql::{Context, Object, Result};
use mclist_service::AuthService;

use crate::graphql::context::{cookie_policy, cookies, services, set_cookies};
use crate::graphql::types::{AuthResult, OutcomeResult};

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Log in with an authorization code from the forum's OAuth flow
    #[graphql(name = "oAuthLogin")]
    async fn oauth_login(&self, ctx: &Context<'_>, code: String) -> Result<AuthResult> {
        let services = services(ctx)?;
        let policy = cookie_policy(ctx)?;

        let result = AuthService::new(services).oauth_login(&code).await;
        if let Ok(auth) = &result {
            set_cookies(ctx, policy.token_cookies(&auth.tokens));
        }

        Ok(AuthResult::from_service(ctx, result))
    }

    /// Re-issue both token cookies from the refresh cookie
    async fn refresh(&self, ctx: &Context<'_>) -> Result<AuthResult> {
        let services = services(ctx)?;
        let policy = cookie_policy(ctx)?;

        let result = AuthService::new(services)
            .refresh(cookies(ctx).refresh_token())
            .await;
        if let Ok(auth) = &result {
            set_cookies(ctx, policy.token_cookies(&auth.tokens));
        }

        Ok(AuthResult::from_service(ctx, result))
    }

    /// Clear both token cookies
    async fn logout(&self, ctx: &Context<'_>) -> Result<OutcomeResult> {
        let services = services(ctx)?;
        let policy = cookie_policy(ctx)?;

        set_cookies(ctx, policy.cleared_cookies());
        Ok(OutcomeResult::from_service(
            ctx,
            Ok(AuthService::new(services).logout()),
        ))
    }
}

//! Token cookies
//!
//! Access and refresh tokens travel as HTTP-only cookies. Issuing sets both
//! with a `Max-Age` equal to the token lifetime; logging out re-sends both
//! names with empty values and an expiry in the past.

use axum_extra::extract::CookieJar;
use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use mclist_common::{Environment, IssuedTokens};

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Token cookies sent with a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCookies {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl RequestCookies {
    /// Pick the token cookies out of the request's cookie jar
    pub fn from_jar(jar: &CookieJar) -> Self {
        let value = |name: &str| {
            jar.get(name)
                .map(|cookie| cookie.value().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            access_token: value(ACCESS_TOKEN_COOKIE),
            refresh_token: value(REFRESH_TOKEN_COOKIE),
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

/// Attributes shared by every token cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    secure: bool,
}

impl CookiePolicy {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// `Secure` is only set in production so local HTTP keeps working
    pub fn for_environment(env: Environment) -> Self {
        Self::new(env.is_production())
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Cookies carrying a freshly issued token pair
    pub fn token_cookies(&self, tokens: &IssuedTokens) -> [Cookie<'static>; 2] {
        [
            self.build(
                ACCESS_TOKEN_COOKIE,
                tokens.access_token.clone(),
                tokens.access_expires_in,
            ),
            self.build(
                REFRESH_TOKEN_COOKIE,
                tokens.refresh_token.clone(),
                tokens.refresh_expires_in,
            ),
        ]
    }

    /// Cookies that make the browser drop both tokens
    pub fn cleared_cookies(&self) -> [Cookie<'static>; 2] {
        [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE].map(|name| {
            let mut cookie = self.build(name, String::new(), 0);
            cookie.make_removal();
            cookie
        })
    }

    fn build(&self, name: &'static str, value: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::seconds(max_age_secs))
            .build()
    }
}

//! Accessors for the data attached to the schema and to each request

use std::sync::Arc;

use async_graphql::{Context, Result};
use cookie::Cookie;
use mclist_service::ServiceContext;

use crate::cookies::{CookiePolicy, RequestCookies};

static NO_COOKIES: RequestCookies = RequestCookies {
    access_token: None,
    refresh_token: None,
};

pub fn services<'a>(ctx: &Context<'a>) -> Result<&'a ServiceContext> {
    Ok(ctx.data::<Arc<ServiceContext>>()?.as_ref())
}

pub fn cookie_policy<'a>(ctx: &Context<'a>) -> Result<&'a CookiePolicy> {
    ctx.data::<CookiePolicy>()
}

/// Token cookies of the current request; empty when none were sent
pub fn cookies<'a>(ctx: &Context<'a>) -> &'a RequestCookies {
    ctx.data_opt::<RequestCookies>().unwrap_or(&NO_COOKIES)
}

/// Queue `Set-Cookie` headers on the HTTP response
pub fn set_cookies<const N: usize>(ctx: &Context<'_>, cookies: [Cookie<'static>; N]) {
    for cookie in cookies {
        ctx.append_http_header("set-cookie", cookie.to_string());
    }
}

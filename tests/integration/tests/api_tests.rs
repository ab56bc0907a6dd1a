//! HTTP integration tests
//!
//! Serves the full axum application on an ephemeral port. The database pool
//! points at a closed port, so only the readiness probe ever touches it.

use mclist_integration_tests::*;
use reqwest::header::{CONTENT_TYPE, SET_COOKIE};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready_without_database() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");

    let body: Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["database"], "unhealthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();

    let id = response.headers().get("x-request-id").expect("request id");
    assert!(!id.is_empty());
}

// ============================================================================
// GraphQL Tests
// ============================================================================

#[tokio::test]
async fn test_playground_served_in_development() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/graphql").await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"), "{content_type}");
}

#[tokio::test]
async fn test_login_over_http_sets_cookies() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .graphql(
            &mutation("$code: String!", "oAuthLogin(code: $code)", AUTH_SELECTION),
            json!({ "code": code_for(PLAYER_ID) }),
            None,
        )
        .await
        .unwrap();

    let set_cookies: Vec<String> = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(String::from)
        .collect();
    let cookies = cookies_from_set_cookie(set_cookies.iter().map(String::as_str));
    assert!(cookies.access_token.is_some(), "{set_cookies:?}");
    assert!(cookies.refresh_token.is_some(), "{set_cookies:?}");

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"]["oAuthLogin"]["user"]["id"], PLAYER_ID);

    // The cookies authenticate the next request
    let me = server
        .graphql("{ me { id } }", json!({}), Some(&cookie_header(&cookies)))
        .await
        .unwrap();
    let body: Value = assert_json(me, StatusCode::OK).await.unwrap();
    assert_eq!(body["data"]["me"]["id"], PLAYER_ID);
}

#[tokio::test]
async fn test_mutation_failure_is_data_not_error() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .graphql(
            &mutation("", "refresh", AUTH_SELECTION),
            json!({}),
            None,
        )
        .await
        .unwrap();

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.get("errors").is_none(), "{body}");
    assert_eq!(body["data"]["refresh"]["code"], "MISSING_AUTH");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/servers").await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

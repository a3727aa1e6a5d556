mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::DateTime;
use shorturl::api::handlers::stats_handler;
use shorturl::prelude::*;

fn stats_app(state: AppState) -> Router {
    Router::new()
        .route("/api/stats/{code}", get(stats_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_stats_success() {
    let (state, store) = common::create_test_state();
    common::seed_link(&store, "abc123", "https://example.com/path?a=1").await;
    store.increment_clicks("abc123").await.unwrap();

    let server = TestServer::new(stats_app(state)).unwrap();

    let response = server.get("/api/stats/abc123").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["url"], "https://example.com/path?a=1");
    assert_eq!(body["clicks"], 1);

    let created_at = body["created_at"].as_str().unwrap();
    assert!(
        DateTime::parse_from_rfc3339(created_at).is_ok(),
        "created_at not RFC 3339: {created_at}"
    );
}

#[tokio::test]
async fn test_stats_does_not_count_as_click() {
    let (state, store) = common::create_test_state();
    common::seed_link(&store, "abc123", "https://example.com").await;

    let server = TestServer::new(stats_app(state)).unwrap();

    server.get("/api/stats/abc123").await.assert_status_ok();
    server.get("/api/stats/abc123").await.assert_status_ok();

    let body = server
        .get("/api/stats/abc123")
        .await
        .json::<serde_json::Value>();
    assert_eq!(body["clicks"], 0);
}

#[tokio::test]
async fn test_stats_unknown_code_returns_error_payload() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(stats_app(state)).unwrap();

    let response = server.get("/api/stats/doesnotexist").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert!(body["error"]["message"].is_string());
}

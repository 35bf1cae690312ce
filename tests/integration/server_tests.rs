//! HTTP surface tests.
//!
//! Tests verify:
//! - Route wiring and JSON bodies for /search, /artist, /health
//! - Error responses carry the upstream's status and a generic body
//! - Static front-end routes

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use artsy_relay::server::{create_router, RouterConfig};

use super::test_utils::{catalog, picasso_entry, search_body, MockUpstream};

fn router_over(upstream: Arc<MockUpstream>) -> axum::Router {
    create_router(catalog(upstream), RouterConfig::new().with_tracing(false))
}

#[tokio::test]
async fn test_search_endpoint() {
    let upstream = Arc::new(
        MockUpstream::new().with_search_response(200, search_body(vec![picasso_entry()])),
    );
    let router = router_over(upstream);

    let request = Request::builder()
        .uri("/search?keyword=picasso")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        json!({
            "artists": [{
                "id": "4d8b928b4eb68a1b2c0001f2",
                "name": "Pablo Picasso",
                "image": "https://img.example.test/picasso/square.jpg"
            }]
        })
    );
}

#[tokio::test]
async fn test_search_with_no_matches_returns_empty_array() {
    let upstream = Arc::new(MockUpstream::new());
    let router = router_over(upstream);

    let request = Request::builder()
        .uri("/search?keyword=nobody")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({"artists": []}));
}

#[tokio::test]
async fn test_search_missing_keyword_is_bad_request() {
    let upstream = Arc::new(MockUpstream::new());
    let router = router_over(upstream);

    let request = Request::builder()
        .uri("/search")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_artist_endpoint_passthrough() {
    let record = json!({"id": "abc123", "name": "Frida Kahlo", "nationality": "Mexican"});
    let upstream = Arc::new(MockUpstream::new().with_artist("abc123", 200, record.clone()));
    let router = router_over(Arc::clone(&upstream));

    // Seed the token cache first; the detail path does not generate one
    let seed = Request::builder()
        .uri("/search?keyword=kahlo")
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(seed).await.unwrap();

    let request = Request::builder()
        .uri("/artist/abc123")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, record);
}

#[tokio::test]
async fn test_artist_not_found_propagates_status() {
    let upstream = Arc::new(MockUpstream::new());
    let router = router_over(upstream);

    let request = Request::builder()
        .uri("/artist/4d8b928b4eb68a1b2c0001f2")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["error"], "upstream_error");
    assert_eq!(error["status"], 404);
}

#[tokio::test]
async fn test_token_rejection_propagates_status() {
    let upstream = Arc::new(MockUpstream::new().with_token_status(401));
    let router = router_over(upstream);

    let request = Request::builder()
        .uri("/search?keyword=picasso")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["error"], "auth_error");
}

#[tokio::test]
async fn test_health_endpoint() {
    let upstream = Arc::new(MockUpstream::new());
    let router = router_over(upstream);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_index_route_serves_configured_file() {
    let dir = std::env::temp_dir().join(format!("artsy-relay-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let index = dir.join("index.html");
    std::fs::write(&index, "<!doctype html><title>relay</title>").unwrap();

    let upstream = Arc::new(MockUpstream::new());
    let config = RouterConfig::new()
        .with_tracing(false)
        .with_frontend(index.to_str().unwrap(), dir.to_str().unwrap());
    let router = create_router(catalog(upstream), config);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(std::str::from_utf8(&body).unwrap().contains("relay"));

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_missing_index_is_not_found() {
    let upstream = Arc::new(MockUpstream::new());
    let config = RouterConfig::new()
        .with_tracing(false)
        .with_frontend("does-not-exist.html", "no-such-dir");
    let router = create_router(catalog(upstream), config);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

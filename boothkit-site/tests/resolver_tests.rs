//! Integration tests for content fetching and resolution
//!
//! Runs a stub content API on a loopback port and drives the real
//! client against it: merged overrides, server errors, malformed
//! bodies, and the headers every request must carry.

use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use boothkit_common::{defaults, ContentView, SiteContent};
use boothkit_site::client::{ContentClient, FetchError};
use boothkit_site::resolver::ContentResolver;

/// Serve a router on an ephemeral loopback port, returning its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn content_route(body: Value) -> Router {
    Router::new().route(
        "/api/content",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    )
}

#[tokio::test]
async fn test_fetched_overrides_merge_over_defaults() {
    let base = spawn_server(content_route(json!({
        "hero": { "titleLine1": "Stubbed", "tagline": "" },
        "stats": [{ "id": "s", "icon": "star", "label": "Events", "value": "7" }]
    })))
    .await;

    let resolver = ContentResolver::new(ContentClient::new(base));
    let site = resolver.site().await;

    assert_eq!(site.hero.title_line1, "Stubbed");
    // Blank fetched text falls back to the default.
    assert_eq!(site.hero.tagline, defaults().hero.tagline);
    assert_eq!(site.stats.len(), 1);
    assert_eq!(site.stats[0].value, "7");
    // Untouched sections are pure defaults.
    assert_eq!(site.testimonials, defaults().testimonials);
}

#[tokio::test]
async fn test_server_error_collapses_to_defaults() {
    let router = Router::new().route(
        "/api/content",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_server(router).await;
    let client = ContentClient::new(base);

    match client.try_fetch_document().await {
        Err(FetchError::Status(500)) => {}
        other => panic!("expected Status(500), got {:?}", other),
    }

    let resolver = ContentResolver::new(client);
    let site = resolver.site().await;
    assert_eq!(site, SiteContent::fallback(defaults()));
}

#[tokio::test]
async fn test_malformed_body_collapses_to_defaults() {
    let router = Router::new().route("/api/content", get(|| async { "this is not json" }));
    let base = spawn_server(router).await;
    let client = ContentClient::new(base);

    assert!(matches!(
        client.try_fetch_document().await,
        Err(FetchError::Malformed(_))
    ));

    let resolver = ContentResolver::new(client);
    let site = resolver.site().await;
    assert_eq!(site, SiteContent::fallback(defaults()));
}

#[tokio::test]
async fn test_non_object_body_is_malformed() {
    let base = spawn_server(content_route(json!([1, 2, 3]))).await;
    let client = ContentClient::new(base);

    assert!(matches!(
        client.try_fetch_document().await,
        Err(FetchError::Malformed(_))
    ));
}

#[tokio::test]
async fn test_unreachable_api_resolves_to_defaults() {
    // Nothing listens on port 1.
    let client = ContentClient::new("http://127.0.0.1:1");
    assert!(matches!(
        client.try_fetch_document().await,
        Err(FetchError::Network(_))
    ));

    let resolver = ContentResolver::new(client);
    let site = resolver.site().await;
    assert_eq!(site, SiteContent::fallback(defaults()));
}

#[tokio::test]
async fn test_requests_carry_no_store_headers() {
    let captured: Arc<Mutex<Option<HeaderMap>>> = Arc::new(Mutex::new(None));
    let capture = Arc::clone(&captured);
    let router = Router::new().route(
        "/api/content",
        get(move |headers: HeaderMap| {
            let capture = Arc::clone(&capture);
            async move {
                *capture.lock().unwrap() = Some(headers);
                Json(json!({}))
            }
        }),
    );
    let base = spawn_server(router).await;

    ContentClient::new(base).fetch_document().await;

    let headers = captured.lock().unwrap().take().unwrap();
    assert_eq!(headers.get("cache-control").unwrap(), "no-store");
    assert_eq!(headers.get("pragma").unwrap(), "no-cache");
}

#[tokio::test]
async fn test_empty_object_body_serves_full_defaults() {
    let base = spawn_server(content_route(json!({}))).await;
    let resolver = ContentResolver::new(ContentClient::new(base));

    let site = resolver.site().await;
    assert_eq!(site, SiteContent::fallback(defaults()));
    assert_eq!(site.photo_booths.len(), 4);
    assert_eq!(site.faq_categories.len(), 6);
}

//! Integration tests for the stateful content consumer
//!
//! Walks the load lifecycle against stub servers: Idle through Ready,
//! failure handling, shared state across clones, and discarding a slow
//! load that was superseded by a newer one.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use boothkit_common::{defaults, ContentView, SiteContent};
use boothkit_site::client::ContentClient;
use boothkit_site::consumer::{ContentConsumer, LoadPhase};
use boothkit_site::resolver::ContentResolver;

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn consumer_for(base: String) -> ContentConsumer<SiteContent> {
    ContentConsumer::new(ContentResolver::new(ContentClient::new(base)))
}

#[tokio::test]
async fn test_load_success_reaches_ready() {
    let router = Router::new().route(
        "/api/content",
        get(|| async { Json(json!({ "hero": { "titleLine1": "Loaded" } })) }),
    );
    let base = spawn_server(router).await;
    let consumer = consumer_for(base);

    assert_eq!(consumer.phase(), LoadPhase::Idle);

    let snapshot = consumer.load().await;
    assert_eq!(snapshot.phase, LoadPhase::Ready);
    assert_eq!(snapshot.model.hero.title_line1, "Loaded");
    assert_eq!(snapshot.error, None);
    assert_eq!(consumer.phase(), LoadPhase::Ready);
}

#[tokio::test]
async fn test_load_failure_keeps_fallback_and_records_error() {
    let router = Router::new().route(
        "/api/content",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = spawn_server(router).await;
    let consumer = consumer_for(base);

    let snapshot = consumer.load().await;
    assert_eq!(snapshot.phase, LoadPhase::Failed);
    assert_eq!(snapshot.model, SiteContent::fallback(defaults()));
    let error = snapshot.error.unwrap();
    assert!(error.contains("503"), "unexpected error: {error}");
}

#[tokio::test]
async fn test_failure_after_success_resets_to_fallback() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let router = Router::new().route(
        "/api/content",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Json(json!({ "hero": { "titleLine1": "First" } })).into_response()
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }
        }),
    );
    let base = spawn_server(router).await;
    let consumer = consumer_for(base);

    let first = consumer.load().await;
    assert_eq!(first.phase, LoadPhase::Ready);
    assert_eq!(first.model.hero.title_line1, "First");

    let second = consumer.load().await;
    assert_eq!(second.phase, LoadPhase::Failed);
    assert_eq!(second.model, SiteContent::fallback(defaults()));
    assert!(second.error.is_some());
}

#[tokio::test]
async fn test_clones_observe_loads_from_either_handle() {
    let router = Router::new().route(
        "/api/content",
        get(|| async { Json(json!({ "hero": { "titleLine1": "Shared" } })) }),
    );
    let base = spawn_server(router).await;
    let consumer = consumer_for(base);
    let observer = consumer.clone();

    consumer.load().await;

    assert_eq!(observer.phase(), LoadPhase::Ready);
    assert_eq!(observer.model().hero.title_line1, "Shared");
}

#[tokio::test]
async fn test_superseded_slow_load_is_discarded() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let router = Router::new().route(
        "/api/content",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    // First request dawdles long enough to be superseded.
                    tokio::time::sleep(Duration::from_millis(400)).await;
                    Json(json!({ "hero": { "titleLine1": "Stale" } }))
                } else {
                    Json(json!({ "hero": { "titleLine1": "Current" } }))
                }
            }
        }),
    );
    let base = spawn_server(router).await;
    let consumer = consumer_for(base);

    let slow = {
        let consumer = consumer.clone();
        tokio::spawn(async move { consumer.load().await })
    };
    // Let the slow load issue its request before starting the newer one.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let newer = consumer.load().await;
    assert_eq!(newer.phase, LoadPhase::Ready);
    assert_eq!(newer.model.hero.title_line1, "Current");

    // The slow load finishes last but must not publish its result.
    let stale = slow.await.unwrap();
    assert_eq!(stale.model.hero.title_line1, "Current");
    assert_eq!(consumer.model().hero.title_line1, "Current");
    assert_eq!(consumer.phase(), LoadPhase::Ready);
}

//! Integration tests for contact form delivery
//!
//! Posts real messages at a stub send-email endpoint and checks the
//! wire body, acceptance, and both rejection paths.

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use boothkit_site::email::{ContactMessage, EmailClient, EmailError};

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ava Lane".into(),
        email: "ava@example.com".into(),
        phone: None,
        subject: "Mirror booth quote".into(),
        message: "Looking for a mirror booth for a reception in October.".into(),
    }
}

#[tokio::test]
async fn test_send_success_posts_expected_body() {
    let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let capture = Arc::clone(&captured);
    let router = Router::new().route(
        "/api/send-email",
        post(move |Json(body): Json<Value>| {
            let capture = Arc::clone(&capture);
            async move {
                *capture.lock().unwrap() = Some(body);
                StatusCode::OK
            }
        }),
    );
    let base = spawn_server(router).await;

    let client = EmailClient::new(base);
    client.send(&message()).await.unwrap();

    let body = captured.lock().unwrap().take().unwrap();
    assert_eq!(body["name"], "Ava Lane");
    assert_eq!(body["email"], "ava@example.com");
    assert_eq!(body["subject"], "Mirror booth quote");
    // No phone was given, so the field is absent rather than null.
    assert!(body.get("phone").is_none());
}

#[tokio::test]
async fn test_send_includes_phone_when_present() {
    let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let capture = Arc::clone(&captured);
    let router = Router::new().route(
        "/api/send-email",
        post(move |Json(body): Json<Value>| {
            let capture = Arc::clone(&capture);
            async move {
                *capture.lock().unwrap() = Some(body);
                StatusCode::OK
            }
        }),
    );
    let base = spawn_server(router).await;

    let mut with_phone = message();
    with_phone.phone = Some("(555) 010-2000".into());
    EmailClient::new(base).send(&with_phone).await.unwrap();

    let body = captured.lock().unwrap().take().unwrap();
    assert_eq!(body["phone"], "(555) 010-2000");
}

#[tokio::test]
async fn test_rejection_carries_server_error_detail() {
    let router = Router::new().route(
        "/api/send-email",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "email required" }))) }),
    );
    let base = spawn_server(router).await;

    let result = EmailClient::new(base).send(&message()).await;
    match result {
        Err(EmailError::Rejected(detail)) => assert_eq!(detail, "email required"),
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rejection_falls_back_to_http_status() {
    let router = Router::new().route(
        "/api/send-email",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
    );
    let base = spawn_server(router).await;

    let result = EmailClient::new(base).send(&message()).await;
    match result {
        Err(EmailError::Rejected(detail)) => assert_eq!(detail, "HTTP status 503"),
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = EmailClient::new("http://127.0.0.1:1");
    assert!(matches!(
        client.send(&message()).await,
        Err(EmailError::Network(_))
    ));
}

//! HTTP tests for the registration API.
//!
//! The router is driven in-process with in-memory collaborators, so no
//! database or job storage is required.

mod common;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use registration_api::api::{create_router, AppState};
use registration_api::domain::NotificationJob;

use common::{InMemoryUserStore, RecordingQueue};

// =============================================================================
// Test Helpers
// =============================================================================

fn app() -> (Router, Arc<InMemoryUserStore>, Arc<RecordingQueue>) {
    let (registrar, store, queue) = common::registrar();
    let state = AppState::new(Arc::new(registrar), store.clone());
    (create_router(state), store, queue)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn ana() -> Value {
    json!({ "name": "Ana", "email": "ana@example.com", "password": "Secret123!" })
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_returns_created_user_summary() {
    let (app, _store, _queue) = app();

    let (status, body) = post_json(&app, "/register", ana()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "User registered successfully. A welcome email has been sent."
    );
    assert_eq!(body["data"]["user"]["name"], "Ana");
    assert_eq!(body["data"]["user"]["email"], "ana@example.com");
    assert!(body["data"]["user"]["id"].is_i64());
    assert!(body["data"]["user"]["created_at"].is_string());
}

#[tokio::test]
async fn test_register_response_never_contains_password() {
    let (app, _store, _queue) = app();

    let (_, body) = post_json(&app, "/register", ana()).await;
    let raw = body.to_string();

    assert!(!raw.contains("Secret123!"));
    assert!(!raw.contains("password"));
    assert!(!raw.contains("argon2"));
    let user = body["data"]["user"].as_object().unwrap();
    let mut keys: Vec<_> = user.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["created_at", "email", "id", "name"]);
}

#[tokio::test]
async fn test_register_enqueues_one_welcome_job() {
    let (app, _store, queue) = app();

    let (_, body) = post_json(&app, "/register", ana()).await;
    let id = body["data"]["user"]["id"].as_i64().unwrap();

    assert_eq!(queue.jobs(), vec![NotificationJob::welcome(id)]);
}

#[tokio::test]
async fn test_repeated_registration_fails() {
    let (app, store, queue) = app();

    let (first, _) = post_json(&app, "/register", ana()).await;
    let (second, body) = post_json(&app, "/register", ana()).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Registration failed");
    assert!(body["error"].as_str().unwrap().contains("users_email_key"));
    assert_eq!(store.count_with_email("ana@example.com"), 1);
    assert_eq!(queue.jobs().len(), 1);
}

#[tokio::test]
async fn test_store_unavailable_returns_failure() {
    let (app, store, queue) = app();
    store.set_unavailable(true);

    let (status, body) = post_json(&app, "/register", ana()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Registration failed");
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Database error"));
    assert!(error.contains("connection refused"));
    store.set_unavailable(false);
    assert!(store.users().is_empty());
    assert!(queue.jobs().is_empty());
}

#[tokio::test]
async fn test_queue_failure_uses_same_failure_message() {
    let (app, _store, queue) = app();
    queue.set_failing(true);

    let (status, body) = post_json(&app, "/register", ana()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Registration failed");
    assert_eq!(body["error"], "Queue error: job storage unavailable");
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_invalid_email_is_rejected_before_store() {
    let (app, store, _queue) = app();

    let (status, body) = post_json(
        &app,
        "/register",
        json!({ "name": "Ana", "email": "not-an-email", "password": "Secret123!" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "The given data was invalid.");
    assert!(body["error"].as_str().unwrap().contains("valid email"));
    assert!(store.users().is_empty());
}

#[tokio::test]
async fn test_blank_name_is_rejected() {
    let (app, store, queue) = app();

    let (status, body) = post_json(
        &app,
        "/register",
        json!({ "name": "   ", "email": "ana@example.com", "password": "Secret123!" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "The given data was invalid.");
    assert!(body["error"].as_str().unwrap().contains("name"));
    assert!(store.users().is_empty());
    assert!(queue.jobs().is_empty());
}

#[tokio::test]
async fn test_short_password_is_rejected() {
    let (app, store, _queue) = app();

    let (status, body) = post_json(
        &app,
        "/register",
        json!({ "name": "Ana", "email": "ana@example.com", "password": "short" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("at least 8 characters"));
    assert!(store.users().is_empty());
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let (app, _store, queue) = app();

    let (status, body) = post_json(
        &app,
        "/register",
        json!({ "email": "ana@example.com", "password": "Secret123!" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert!(queue.jobs().is_empty());
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_store_status() {
    let (app, store, _queue) = app();

    let request = || Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(&app, request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    store.set_unavailable(true);
    let (status, body) = send(&app, request()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["database"]["status"], "unhealthy");
}

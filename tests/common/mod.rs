// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use debate_arena::config::Config;
use debate_arena::db::RecordStore;
use debate_arena::routes::create_router;
use debate_arena::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create a test app backed by a fresh in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_store(RecordStore::in_memory())
}

/// Create a test app around an existing store.
#[allow(dead_code)]
pub fn create_test_app_with_store(store: RecordStore) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default(), store));
    (create_router(state.clone()), state)
}

/// Send a request and decode the JSON response body (`Value::Null` if empty).
#[allow(dead_code)]
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    send_request(app, request).await
}

/// Send a prepared request and decode the JSON response body.
#[allow(dead_code)]
pub async fn send_request(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

/// Create a debate over HTTP and return its JSON.
#[allow(dead_code)]
pub async fn create_debate(app: &axum::Router, created_by: &str) -> Value {
    let (status, debate) = send(
        app,
        "POST",
        "/debates",
        Some(serde_json::json!({
            "title": "X vs Y",
            "description": "Which one wins?",
            "createdBy": created_by,
            "option1": "X",
            "option2": "Y",
            "durationHours": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", debate);
    debate
}

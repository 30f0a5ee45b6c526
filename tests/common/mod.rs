// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use prosport_tracker::config::Config;
use prosport_tracker::db::{MemoryStorage, Storage};
use prosport_tracker::models::{Activity, ActivityType, Duration};
use prosport_tracker::routes::create_router;
use prosport_tracker::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by in-memory storage.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with(Config::test_default(), Arc::new(MemoryStorage::new()))
}

#[allow(dead_code)]
pub fn create_test_app_with(
    config: Config,
    storage: Arc<dyn Storage>,
) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config, storage).expect("Failed to build state"));
    (create_router(state.clone()), state)
}

#[allow(dead_code)]
pub fn activity(id: &str, date: &str, activity_type: ActivityType) -> Activity {
    Activity {
        id: id.to_string(),
        date: date.to_string(),
        activity_type,
        duration: Duration::new(1, 0, 0),
        distance: Some(10.0),
        comments: None,
    }
}

/// Send a request and decode the JSON response body.
#[allow(dead_code)]
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

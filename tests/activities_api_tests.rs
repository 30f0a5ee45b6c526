// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity list/create/update API tests.

use axum::http::StatusCode;
use prosport_tracker::config::Config;
use prosport_tracker::db::{MemoryStorage, Storage, StorageError};
use prosport_tracker::models::ActivityType;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod common;

#[tokio::test]
async fn test_create_and_fetch_activity() {
    let (app, _state) = common::create_test_app();

    let (status, created) = common::send_json(
        &app,
        "POST",
        "/api/activities",
        Some(json!({
            "date": "2024-03-10",
            "type": "Swim",
            "duration": { "hours": 0, "minutes": 45, "seconds": 0 },
            "distance": 2.0,
            "comments": "Pool"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["type"], "Swim");

    let (status, fetched) =
        common::send_json(&app, "GET", &format!("/api/activities/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_uses_entry_defaults() {
    let (app, _state) = common::create_test_app();

    let (status, created) =
        common::send_json(&app, "POST", "/api/activities", Some(json!({}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "Run");
    assert_eq!(created["duration"], json!({ "hours": 0, "minutes": 59, "seconds": 59 }));
    assert_eq!(
        created["date"],
        prosport_tracker::time_utils::today_iso().as_str()
    );
    assert!(created.get("distance").is_none());
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send_json(
        &app,
        "POST",
        "/api/activities",
        Some(json!({ "date": "10/03/2024" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");

    let (status, _) = common::send_json(
        &app,
        "POST",
        "/api/activities",
        Some(json!({ "distance": -1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let (app, state) = common::create_test_app();
    state
        .store
        .save(&[
            common::activity("a", "2024-01-01", ActivityType::Run),
            common::activity("b", "2024-01-02", ActivityType::Hyrox),
        ])
        .unwrap();

    let (status, updated) = common::send_json(
        &app,
        "PUT",
        "/api/activities/a",
        Some(json!({
            "date": "2024-01-05",
            "type": "Cycling",
            "duration": { "hours": 2, "minutes": 0, "seconds": 0 }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], "a");
    assert_eq!(updated["type"], "Cycling");
    assert!(updated.get("distance").is_none());

    let stored = state.store.load();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, "a");
    assert_eq!(stored[0].activity_type, ActivityType::Cycling);
    assert_eq!(stored[0].distance, None);
}

#[tokio::test]
async fn test_missing_activity_is_404() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send_json(&app, "GET", "/api/activities/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = common::send_json(
        &app,
        "PUT",
        "/api/activities/missing",
        Some(json!({ "date": "2024-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_filters_sorts_and_counts() {
    let (app, state) = common::create_test_app();
    state
        .store
        .save(&[
            common::activity("old", "2023-12-31", ActivityType::Run),
            common::activity("r1", "2024-02-01", ActivityType::Run),
            common::activity("c1", "2024-03-01", ActivityType::Cycling),
            common::activity("r2", "2024-04-01", ActivityType::Run),
        ])
        .unwrap();

    let (status, body) = common::send_json(
        &app,
        "GET",
        "/api/activities?type=Run&start=2024-01-01&end=2024-12-31",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["r2", "r1"]);
    assert_eq!(body["total"], 2);

    let counts = body["counts"].as_array().unwrap();
    assert_eq!(counts.len(), 6);
    assert_eq!(counts[0]["type"], "Run");
    assert_eq!(counts[0]["code"], "R");
    assert_eq!(counts[0]["count"], 2);
    assert!(counts[1..].iter().all(|c| c["count"] == 0));

    assert_eq!(body["filters"]["type"], "Run");
    assert_eq!(body["filters"]["start_date"], "2024-01-01");
}

#[tokio::test]
async fn test_list_includes_display_fields() {
    let (app, state) = common::create_test_app();
    let mut a = common::activity("a", "2024-06-01", ActivityType::Run);
    a.comments = Some("Long run along the coast".to_string());
    state.store.save(&[a]).unwrap();

    let (_, body) = common::send_json(
        &app,
        "GET",
        "/api/activities?start=2024-01-01&end=2024-12-31",
        None,
    )
    .await;

    let view = &body["activities"][0];
    assert_eq!(view["type_code"], "R");
    assert_eq!(view["duration_display"], "1:00:00");
    assert_eq!(view["distance_display"], "10.0");
    assert_eq!(view["speed_kmh"], "10.0");
    assert_eq!(view["comment_preview"], "Long run a...");
}

#[tokio::test]
async fn test_list_rejects_bad_filters() {
    let (app, _state) = common::create_test_app();

    let (status, _) = common::send_json(&app, "GET", "/api/activities?type=Yoga", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        common::send_json(&app, "GET", "/api/activities?start=2024-13-01", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inverted_range_is_empty_not_error() {
    let (app, state) = common::create_test_app();
    state
        .store
        .save(&[common::activity("a", "2024-06-01", ActivityType::Run)])
        .unwrap();

    let (status, body) = common::send_json(
        &app,
        "GET",
        "/api/activities?start=2024-12-31&end=2024-01-01",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert!(body["activities"].as_array().unwrap().is_empty());
}

/// Memory storage whose reads fail while `fail_reads` is set.
#[derive(Default)]
struct UnreadableStorage {
    inner: MemoryStorage,
    fail_reads: AtomicBool,
}

impl Storage for UnreadableStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::other("simulated EIO"),
            });
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }
}

#[tokio::test]
async fn test_create_after_read_error_keeps_existing_data() {
    let storage = Arc::new(UnreadableStorage::default());
    let (app, state) = common::create_test_app_with(Config::test_default(), storage.clone());
    state
        .store
        .save(&[
            common::activity("a", "2024-01-01", ActivityType::Run),
            common::activity("b", "2024-01-02", ActivityType::Swim),
        ])
        .unwrap();

    storage.fail_reads.store(true, Ordering::SeqCst);
    let (status, body) = common::send_json(
        &app,
        "POST",
        "/api/activities",
        Some(json!({ "date": "2024-02-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "storage_error");

    let (status, _) = common::send_json(&app, "POST", "/api/cloud/backup", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    storage.fail_reads.store(false, Ordering::SeqCst);
    assert_eq!(state.store.load().len(), 2);
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cloud backup and restore routes.

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/cloud/backup", post(backup))
        .route("/api/cloud/restore", post(restore))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BackupResponse {
    pub success: bool,
    pub count: usize,
    pub created_at: String,
}

/// Upload the full local collection.
async fn backup(State(state): State<Arc<AppState>>) -> Result<Json<BackupResponse>> {
    let activities = state.store.try_load()?;
    let receipt = state.cloud.backup(&activities).await?;

    Ok(Json(BackupResponse {
        success: true,
        count: receipt.count,
        created_at: receipt.created_at,
    }))
}

#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RestoreRequest {
    /// Must be true; restoring overwrites all local data
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RestoreResponse {
    pub restored: bool,
    pub count: usize,
    pub message: String,
}

/// Replace the local collection with the cloud snapshot.
///
/// Local data is only written once the snapshot has been fetched and
/// verified.
async fn restore(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RestoreRequest>,
) -> Result<Json<RestoreResponse>> {
    if !req.confirm {
        tracing::info!("Restore declined");
        return Ok(Json(RestoreResponse {
            restored: false,
            count: 0,
            message: "Restore cancelled. Local data unchanged.".to_string(),
        }));
    }

    let activities = state
        .cloud
        .restore()
        .await?
        .ok_or_else(|| AppError::NotFound("No cloud backup found.".to_string()))?;

    state.store.replace_all(&activities)?;

    Ok(Json(RestoreResponse {
        restored: true,
        count: activities.len(),
        message: "Data restored from cloud.".to_string(),
    }))
}

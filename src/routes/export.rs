// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spreadsheet export download.

use crate::error::{AppError, Result};
use crate::routes::api::FilterParams;
use crate::services::export::{export_csv, export_filename, ExportScope, CSV_CONTENT_TYPE};
use crate::services::query::filter_activities;
use crate::time_utils;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/export", get(export))
}

#[derive(Debug, Deserialize)]
struct ExportQuery {
    /// `full` or `filtered`; defaults to the configured scope
    scope: Option<String>,
    #[serde(flatten)]
    filters: FilterParams,
}

/// Download activities as a CSV document.
async fn export(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportQuery>,
) -> Result<impl IntoResponse> {
    let scope = match params.scope.as_deref() {
        Some(raw) => raw.parse::<ExportScope>().map_err(AppError::BadRequest)?,
        None => state.config.export_scope,
    };

    let all = state.store.try_load()?;
    let selected = match scope {
        ExportScope::Full => all,
        ExportScope::Filtered => filter_activities(&all, &params.filters.resolve()?),
    };

    if selected.is_empty() {
        return Err(AppError::NothingToExport);
    }

    let document = export_csv(&selected)?;
    let filename = export_filename(time_utils::today());

    tracing::info!(
        count = selected.len(),
        scope = ?scope,
        filename = %filename,
        "Exporting activities"
    );

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        document,
    ))
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity API routes: list with filters, fetch, create, update.

use crate::error::{AppError, Result};
use crate::models::duration::{calculate_speed, format_duration, format_one_decimal};
use crate::models::{
    Activity, ActivityFilters, ActivityInput, ActivityType, Duration, TypeFilter,
};
use crate::services::query::query_activities;
use crate::time_utils::is_iso_date;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Characters of a comment shown in the list before truncation.
const COMMENT_PREVIEW_CHARS: usize = 10;

/// Activity API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/activities",
            get(list_activities).post(create_activity),
        )
        .route(
            "/api/activities/{id}",
            get(get_activity).put(update_activity),
        )
}

// ─── Filter Parameters ───────────────────────────────────────

/// Filter criteria as query parameters. Missing values fall back to the
/// current calendar year and every type.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    /// Inclusive start date (YYYY-MM-DD)
    pub start: Option<String>,
    /// Inclusive end date (YYYY-MM-DD)
    pub end: Option<String>,
}

impl FilterParams {
    /// Resolve into concrete filters, rejecting malformed values.
    pub fn resolve(&self) -> Result<ActivityFilters> {
        let mut filters = ActivityFilters::current_year();

        if let Some(raw) = self.activity_type.as_deref() {
            filters.activity_type = raw
                .parse::<TypeFilter>()
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
        }
        if let Some(start) = &self.start {
            filters.start_date = parse_date_param("start", start)?;
        }
        if let Some(end) = &self.end {
            filters.end_date = parse_date_param("end", end)?;
        }

        Ok(filters)
    }
}

fn parse_date_param(name: &str, value: &str) -> Result<String> {
    if is_iso_date(value) {
        Ok(value.to_string())
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid '{}' parameter: must be YYYY-MM-DD",
            name
        )))
    }
}

// ─── Activity List ───────────────────────────────────────────

/// Activity as shown in the list, with display fields precomputed.
#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityView {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub type_code: String,
    pub duration: Duration,
    pub duration_display: String,
    pub distance: Option<f64>,
    pub distance_display: String,
    /// Average speed in km/h, when distance and time allow it
    pub speed_kmh: Option<String>,
    pub comments: Option<String>,
    pub comment_preview: Option<String>,
}

impl From<Activity> for ActivityView {
    fn from(a: Activity) -> Self {
        let comment_preview = a.comments.as_deref().map(comment_preview);
        Self {
            type_code: a.activity_type.code().to_string(),
            duration_display: format_duration(&a.duration),
            distance_display: format_one_decimal(a.distance.unwrap_or(0.0)),
            speed_kmh: calculate_speed(a.distance, &a.duration),
            comment_preview,
            id: a.id,
            date: a.date,
            activity_type: a.activity_type,
            duration: a.duration,
            distance: a.distance,
            comments: a.comments,
        }
    }
}

/// First few characters of a comment, with `...` when cut short.
fn comment_preview(comment: &str) -> String {
    let mut chars = comment.chars();
    let head: String = chars.by_ref().take(COMMENT_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Count for one activity type.
#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub code: String,
    pub count: u32,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    /// Matching activities, most recent first
    pub activities: Vec<ActivityView>,
    /// One entry per activity type, in display order
    pub counts: Vec<TypeCount>,
    pub total: u32,
    /// Filters actually applied
    pub filters: ActivityFilters,
}

/// List activities matching the filters, with per-type counts.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<ActivitiesResponse>> {
    let filters = params.resolve()?;

    tracing::debug!(
        activity_type = %filters.activity_type,
        start = %filters.start_date,
        end = %filters.end_date,
        "Listing activities"
    );

    let all = state.store.load();
    let result = query_activities(&all, &filters);

    let counts = ActivityType::ALL
        .into_iter()
        .map(|t| TypeCount {
            activity_type: t,
            code: t.code().to_string(),
            count: result.counts.get(t),
        })
        .collect();

    Ok(Json(ActivitiesResponse {
        total: result.total(),
        counts,
        activities: result.activities.into_iter().map(ActivityView::from).collect(),
        filters,
    }))
}

// ─── Single Activity ─────────────────────────────────────────

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Activity>> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))
}

/// Record a new activity.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ActivityInput>,
) -> Result<(StatusCode, Json<Activity>)> {
    input.validate()?;
    let activity = state.store.create(input)?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// Replace every field of an existing activity.
async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<ActivityInput>,
) -> Result<Json<Activity>> {
    input.validate()?;
    let activity = state.store.update(&id, input)?;
    Ok(Json(activity))
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logged workout model for storage and API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::duration::{Duration, DEFAULT_ENTRY_DURATION};
use crate::time_utils;

/// Kind of workout. The set is closed; declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityType {
    Run,
    Cycling,
    Bodypump,
    Hyrox,
    Swim,
    Other,
}

impl ActivityType {
    /// Every activity type, in display order.
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Run,
        ActivityType::Cycling,
        ActivityType::Bodypump,
        ActivityType::Hyrox,
        ActivityType::Swim,
        ActivityType::Other,
    ];

    /// Label used in storage, API payloads and exports.
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::Run => "Run",
            ActivityType::Cycling => "Cycling",
            ActivityType::Bodypump => "Bodypump",
            ActivityType::Hyrox => "Hyrox",
            ActivityType::Swim => "Swim",
            ActivityType::Other => "Other",
        }
    }

    /// One-letter badge shown next to list entries and counts.
    pub fn code(self) -> &'static str {
        match self {
            ActivityType::Run => "R",
            ActivityType::Cycling => "C",
            ActivityType::Bodypump => "B",
            ActivityType::Hyrox => "H",
            ActivityType::Swim => "S",
            ActivityType::Other => "O",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityType {
    type Err = UnknownActivityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownActivityType(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown activity type: {0}")]
pub struct UnknownActivityType(pub String);

/// Stored activity record.
///
/// Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Opaque identifier, fixed at creation
    pub id: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub duration: Duration,
    /// Distance in kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Generate a fresh activity identifier.
pub fn new_activity_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Form payload for creating or replacing an activity.
///
/// Omitted fields fall back to the values a blank entry form starts with.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ActivityInput {
    #[serde(default = "time_utils::today_iso")]
    #[validate(custom(function = "validate_iso_date"))]
    pub date: String,
    #[serde(rename = "type", default = "default_activity_type")]
    pub activity_type: ActivityType,
    #[serde(default = "default_duration")]
    pub duration: Duration,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub comments: Option<String>,
}

fn default_activity_type() -> ActivityType {
    ActivityType::Run
}

fn default_duration() -> Duration {
    DEFAULT_ENTRY_DURATION
}

fn validate_iso_date(date: &str) -> Result<(), ValidationError> {
    if time_utils::is_iso_date(date) {
        Ok(())
    } else {
        Err(ValidationError::new("iso_date").with_message("date must be YYYY-MM-DD".into()))
    }
}

impl ActivityInput {
    /// Build the full record for `id`. Blank comments are stored as absent.
    pub fn into_activity(self, id: String) -> Activity {
        Activity {
            id,
            date: self.date,
            activity_type: self.activity_type,
            duration: self.duration,
            distance: self.distance,
            comments: self.comments.filter(|c| !c.is_empty()),
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Criteria for narrowing the activity list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::activity::{ActivityType, UnknownActivityType};
use crate::time_utils;

/// Wildcard label accepted for "every type".
pub const ALL_TYPES: &str = "All";

/// Type criterion: a single activity type or every type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeFilter {
    #[default]
    All,
    Only(ActivityType),
}

impl TypeFilter {
    pub fn matches(self, activity_type: ActivityType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => t == activity_type,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str(ALL_TYPES),
            TypeFilter::Only(t) => f.write_str(t.label()),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = UnknownActivityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_TYPES {
            Ok(TypeFilter::All)
        } else {
            s.parse().map(TypeFilter::Only)
        }
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = UnknownActivityType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeFilter> for String {
    fn from(filter: TypeFilter) -> Self {
        filter.to_string()
    }
}

/// Selected type plus an inclusive `[start_date, end_date]` range of ISO dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityFilters {
    #[serde(rename = "type")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub activity_type: TypeFilter,
    pub start_date: String,
    pub end_date: String,
}

impl ActivityFilters {
    /// All types over the calendar year containing `today`.
    pub fn for_year_of(today: NaiveDate) -> Self {
        let (start_date, end_date) = time_utils::year_range(today);
        Self {
            activity_type: TypeFilter::All,
            start_date,
            end_date,
        }
    }

    /// Filters a freshly opened list view starts with.
    pub fn current_year() -> Self {
        Self::for_year_of(time_utils::today())
    }
}

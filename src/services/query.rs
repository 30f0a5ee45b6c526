// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity query engine: filter, order and tally the collection.
//!
//! All functions are pure; inputs are never mutated.

use crate::models::{Activity, ActivityCounts, ActivityFilters};

/// Filtered, ordered activities with their tallies.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Matching activities, most recent first
    pub activities: Vec<Activity>,
    pub counts: ActivityCounts,
}

impl QueryResult {
    pub fn total(&self) -> u32 {
        self.counts.total
    }
}

/// Whether an activity satisfies the type and inclusive date criteria.
///
/// Dates are fixed-width ISO strings, so string comparison orders them.
pub fn matches(activity: &Activity, filters: &ActivityFilters) -> bool {
    filters.activity_type.matches(activity.activity_type)
        && filters.start_date.as_str() <= activity.date.as_str()
        && activity.date.as_str() <= filters.end_date.as_str()
}

/// Activities matching `filters`, in input order.
pub fn filter_activities(activities: &[Activity], filters: &ActivityFilters) -> Vec<Activity> {
    activities
        .iter()
        .filter(|a| matches(a, filters))
        .cloned()
        .collect()
}

/// Copy of `activities` ordered by date, most recent first.
///
/// The sort is stable: activities sharing a date keep their input order.
pub fn sorted_by_date_desc(activities: &[Activity]) -> Vec<Activity> {
    let mut sorted = activities.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Run the full query: filter, order by date descending, tally.
pub fn query_activities(activities: &[Activity], filters: &ActivityFilters) -> QueryResult {
    let filtered = filter_activities(activities, filters);
    let counts = ActivityCounts::from_activities(&filtered);
    QueryResult {
        activities: sorted_by_date_desc(&filtered),
        counts,
    }
}

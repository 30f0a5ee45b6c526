//! Per-type tallies over a set of activities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::activity::{Activity, ActivityType};

/// Activity counts by type plus the grand total.
///
/// Every activity type is always present, with zero when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityCounts {
    pub by_type: BTreeMap<ActivityType, u32>,
    pub total: u32,
}

impl Default for ActivityCounts {
    fn default() -> Self {
        Self {
            by_type: ActivityType::ALL.into_iter().map(|t| (t, 0)).collect(),
            total: 0,
        }
    }
}

impl ActivityCounts {
    /// Tally a set of activities.
    pub fn from_activities(activities: &[Activity]) -> Self {
        let mut counts = Self::default();
        for activity in activities {
            counts.record(activity.activity_type);
        }
        counts
    }

    fn record(&mut self, activity_type: ActivityType) {
        *self.by_type.entry(activity_type).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn get(&self, activity_type: ActivityType) -> u32 {
        self.by_type.get(&activity_type).copied().unwrap_or(0)
    }
}

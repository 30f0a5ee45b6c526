// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod duration;
pub mod filter;
pub mod snapshot;
pub mod stats;

pub use activity::{Activity, ActivityInput, ActivityType};
pub use duration::Duration;
pub use filter::{ActivityFilters, TypeFilter};
pub use snapshot::{CloudSnapshot, StoredSnapshot};
pub use stats::ActivityCounts;

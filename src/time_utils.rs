// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current UTC calendar date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    format_iso_date(today())
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// First and last day of the year containing `date`, as ISO strings.
pub fn year_range(date: NaiveDate) -> (String, String) {
    let year = date.year();
    (format!("{:04}-01-01", year), format!("{:04}-12-31", year))
}

/// Whether `value` is a real calendar date written exactly as `YYYY-MM-DD`.
///
/// The fixed width is what makes plain string comparison order dates.
pub fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

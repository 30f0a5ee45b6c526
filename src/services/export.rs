// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spreadsheet export as quoted, BOM-prefixed CSV.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::models::duration::{format_duration, format_one_decimal};
use crate::models::Activity;
use crate::services::query::sorted_by_date_desc;
use crate::time_utils::format_iso_date;

/// UTF-8 byte-order mark so spreadsheet software picks the right encoding.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// MIME type of the export document.
pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

/// Prefix of the downloaded file name.
pub const EXPORT_FILE_PREFIX: &str = "ProSport_Export";

/// Column titles, in column order.
pub const EXPORT_HEADERS: [&str; 5] = [
    "Date (YYYY/MM/DD)",
    "Activity Type",
    "Duration",
    "Distance (km)",
    "Comments",
];

/// Which activities an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportScope {
    /// The whole stored collection
    #[default]
    Full,
    /// Only activities matching the current filters
    Filtered,
}

impl std::str::FromStr for ExportScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(ExportScope::Full),
            "filtered" => Ok(ExportScope::Filtered),
            other => Err(format!("unknown export scope '{}'", other)),
        }
    }
}

/// Errors from building the export document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush CSV: {0}")]
    Flush(String),
}

/// Render activities as a CSV document.
///
/// Rows are re-sorted by date, most recent first, whatever the input order.
/// Every cell is quoted with embedded quotes doubled. An empty input yields
/// a header-only document; callers decide whether that is worth exporting.
pub fn export_csv(activities: &[Activity]) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(EXPORT_HEADERS)?;
    for activity in sorted_by_date_desc(activities) {
        writer.write_record(export_row(&activity))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))
}

/// Cells of one activity row, in column order.
pub fn export_row(activity: &Activity) -> [String; 5] {
    [
        activity.date.replace('-', "/"),
        activity.activity_type.label().to_string(),
        format_duration(&activity.duration),
        format_one_decimal(activity.distance.unwrap_or(0.0)),
        activity.comments.clone().unwrap_or_default(),
    ]
}

/// Download file name for an export made on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("{}_{}.csv", EXPORT_FILE_PREFIX, format_iso_date(date))
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod acknowledge;
pub mod cloud;
pub mod export;
pub mod query;

pub use acknowledge::BackupAcknowledger;
pub use cloud::{BackupReceipt, CloudBackupService};
pub use export::{export_csv, ExportScope};
pub use query::{query_activities, QueryResult};

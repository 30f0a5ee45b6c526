// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! ProSport Tracker: a personal workout log
//!
//! This crate provides the backend API for recording workouts, browsing a
//! filtered history with per-type counts, exporting to spreadsheet CSV and
//! keeping a simulated cloud backup.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::{ActivityStore, Storage};
use services::{BackupAcknowledger, CloudBackupService};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: ActivityStore,
    pub cloud: CloudBackupService,
}

impl AppState {
    /// Wire the local store and the cloud service onto one storage backend.
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> anyhow::Result<Self> {
        let store = ActivityStore::new(storage.clone());

        let mut cloud = CloudBackupService::new(storage, config.backup_delay, config.restore_delay);
        if let Some(url) = &config.ack_url {
            cloud = cloud.with_acknowledger(BackupAcknowledger::new(url.clone())?);
        }

        Ok(Self {
            config,
            store,
            cloud,
        })
    }
}

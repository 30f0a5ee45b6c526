// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Simulated cloud backup of the activity collection.
//!
//! Snapshots are kept in a separate storage slot standing in for a remote
//! store. Both directions wait a configurable delay to mimic network latency.
//! Neither operation touches the local collection; the caller decides what to
//! do with a restored snapshot.

use crate::db::{keys, Storage};
use crate::error::{AppError, Result};
use crate::models::{Activity, CloudSnapshot, StoredSnapshot};
use crate::services::acknowledge::BackupAcknowledger;
use crate::time_utils::format_utc_rfc3339;
use std::sync::Arc;
use std::time::Duration;

/// Outcome of a successful backup.
#[derive(Debug, Clone)]
pub struct BackupReceipt {
    pub count: usize,
    pub created_at: String,
}

/// Backup/restore against the simulated remote slot.
pub struct CloudBackupService {
    storage: Arc<dyn Storage>,
    backup_delay: Duration,
    restore_delay: Duration,
    acknowledger: Option<BackupAcknowledger>,
}

impl CloudBackupService {
    pub fn new(storage: Arc<dyn Storage>, backup_delay: Duration, restore_delay: Duration) -> Self {
        Self {
            storage,
            backup_delay,
            restore_delay,
            acknowledger: None,
        }
    }

    /// Request an acknowledgement after every successful backup.
    pub fn with_acknowledger(mut self, acknowledger: BackupAcknowledger) -> Self {
        self.acknowledger = Some(acknowledger);
        self
    }

    /// Store a snapshot of `activities`, replacing any previous backup.
    pub async fn backup(&self, activities: &[Activity]) -> Result<BackupReceipt> {
        tokio::time::sleep(self.backup_delay).await;

        let created_at = format_utc_rfc3339(chrono::Utc::now());
        let snapshot = CloudSnapshot::new(activities.to_vec(), created_at.clone())
            .map_err(|e| AppError::Backup(format!("Failed to encode snapshot: {}", e)))?;
        let json = serde_json::to_string(&snapshot)
            .map_err(|e| AppError::Backup(format!("Failed to encode snapshot: {}", e)))?;

        self.storage
            .set(keys::CLOUD_BACKUP, &json)
            .map_err(|e| AppError::Backup(e.to_string()))?;

        tracing::info!(count = snapshot.count, "Cloud backup stored");

        if let Some(acknowledger) = &self.acknowledger {
            acknowledger.spawn_acknowledge(snapshot.count);
        }

        Ok(BackupReceipt {
            count: snapshot.count,
            created_at,
        })
    }

    /// Fetch the stored snapshot.
    ///
    /// Returns `None` when no backup exists. A snapshot that cannot be read
    /// or fails its checksum is an error.
    pub async fn restore(&self) -> Result<Option<Vec<Activity>>> {
        tokio::time::sleep(self.restore_delay).await;

        let Some(raw) = self
            .storage
            .get(keys::CLOUD_BACKUP)
            .map_err(|e| AppError::Backup(e.to_string()))?
        else {
            tracing::info!("No cloud backup found");
            return Ok(None);
        };

        let stored: StoredSnapshot = serde_json::from_str(&raw)
            .map_err(|e| AppError::Backup(format!("Unreadable backup: {}", e)))?;

        let activities = match stored {
            StoredSnapshot::Envelope(snapshot) => {
                let valid = snapshot
                    .verify()
                    .map_err(|e| AppError::Backup(format!("Failed to verify backup: {}", e)))?;
                if !valid {
                    return Err(AppError::Backup(
                        "Backup checksum mismatch".to_string(),
                    ));
                }
                tracing::info!(
                    count = snapshot.count,
                    created_at = %snapshot.created_at,
                    "Cloud backup restored"
                );
                snapshot.activities
            }
            StoredSnapshot::Legacy(activities) => {
                tracing::info!(count = activities.len(), "Legacy cloud backup restored");
                activities
            }
        };

        Ok(Some(activities))
    }
}

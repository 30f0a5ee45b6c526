// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted activity collection.
//!
//! The whole collection lives as one JSON array under a single storage key.
//! Every mutation loads the collection, changes it and writes it back under
//! a process-wide lock, so concurrent requests cannot lose each other's
//! writes.

use crate::db::{keys, Storage, StorageError};
use crate::error::{AppError, Result};
use crate::models::activity::new_activity_id;
use crate::models::{Activity, ActivityInput};
use std::sync::{Arc, Mutex};

/// Load/save access to the local activity collection.
pub struct ActivityStore {
    storage: Arc<dyn Storage>,
    key: String,
    write_lock: Mutex<()>,
}

impl ActivityStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_key(storage, keys::ACTIVITIES)
    }

    pub fn with_key(storage: Arc<dyn Storage>, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
            write_lock: Mutex::new(()),
        }
    }

    /// Load the collection for display.
    ///
    /// Missing, unreadable or malformed data all yield an empty collection.
    pub fn load(&self) -> Vec<Activity> {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, error = %e, "Failed to read activities");
            Vec::new()
        })
    }

    /// Load the collection, failing if storage cannot be read.
    ///
    /// Missing or malformed data still yields an empty collection. Anything
    /// that writes the collection back must use this rather than `load`.
    pub fn try_load(&self) -> std::result::Result<Vec<Activity>, StorageError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(activities) => Ok(activities),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to parse activities");
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the stored collection.
    pub fn save(&self, activities: &[Activity]) -> std::result::Result<(), StorageError> {
        let json = serde_json::to_string(activities).map_err(|source| StorageError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.storage.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, count = activities.len(), "Saved activities");
        Ok(())
    }

    /// Look up one activity by id.
    pub fn get(&self, id: &str) -> Option<Activity> {
        self.load().into_iter().find(|a| a.id == id)
    }

    /// Append a new activity with a freshly generated id.
    pub fn create(&self, input: ActivityInput) -> Result<Activity> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut activities = self.try_load()?;
        let activity = input.into_activity(new_activity_id());
        activities.push(activity.clone());
        self.save(&activities)?;

        tracing::info!(id = %activity.id, activity_type = %activity.activity_type, "Activity created");
        Ok(activity)
    }

    /// Replace every field of an existing activity, keeping its id and position.
    pub fn update(&self, id: &str, input: ActivityInput) -> Result<Activity> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut activities = self.try_load()?;
        let slot = activities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

        let updated = input.into_activity(id.to_string());
        *slot = updated.clone();
        self.save(&activities)?;

        tracing::info!(id, "Activity updated");
        Ok(updated)
    }

    /// Replace the whole collection (restore from backup).
    pub fn replace_all(&self, activities: &[Activity]) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.save(activities)?;
        tracing::info!(count = activities.len(), "Activity collection replaced");
        Ok(())
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cloud snapshot envelope.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::models::Activity;

/// A stored backup of the full activity collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudSnapshot {
    /// When the backup was taken (RFC3339)
    pub created_at: String,
    /// Number of activities in the snapshot
    pub count: usize,
    /// Hex SHA-256 of the serialized `activities` array
    pub checksum: String,
    pub activities: Vec<Activity>,
}

impl CloudSnapshot {
    pub fn new(activities: Vec<Activity>, created_at: String) -> Result<Self, serde_json::Error> {
        let checksum = checksum_of(&activities)?;
        Ok(Self {
            created_at,
            count: activities.len(),
            checksum,
            activities,
        })
    }

    /// Whether the stored checksum and count still describe the activities.
    pub fn verify(&self) -> Result<bool, serde_json::Error> {
        Ok(self.count == self.activities.len() && checksum_of(&self.activities)? == self.checksum)
    }
}

/// Snapshot as found in the backup slot.
///
/// Older backups hold a bare JSON array of activities with no envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoredSnapshot {
    Envelope(CloudSnapshot),
    Legacy(Vec<Activity>),
}

fn checksum_of(activities: &[Activity]) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(activities)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityType, Duration};

    fn sample() -> Vec<Activity> {
        vec![Activity {
            id: "a".to_string(),
            date: "2024-03-02".to_string(),
            activity_type: ActivityType::Swim,
            duration: Duration::new(0, 40, 0),
            distance: Some(1.5),
            comments: Some("pool".to_string()),
        }]
    }

    #[test]
    fn test_new_snapshot_verifies() {
        let snapshot = CloudSnapshot::new(sample(), "2024-03-02T10:00:00Z".to_string()).unwrap();
        assert_eq!(snapshot.count, 1);
        assert_eq!(snapshot.checksum.len(), 64);
        assert!(snapshot.verify().unwrap());
    }

    #[test]
    fn test_tampered_snapshot_fails_verification() {
        let mut snapshot =
            CloudSnapshot::new(sample(), "2024-03-02T10:00:00Z".to_string()).unwrap();
        snapshot.activities[0].comments = Some("edited".to_string());
        assert!(!snapshot.verify().unwrap());
    }

    #[test]
    fn test_stored_snapshot_accepts_legacy_array() {
        let raw = serde_json::to_string(&sample()).unwrap();
        let stored: StoredSnapshot = serde_json::from_str(&raw).unwrap();
        assert!(matches!(stored, StoredSnapshot::Legacy(ref a) if a.len() == 1));
    }

    #[test]
    fn test_stored_snapshot_accepts_envelope() {
        let snapshot = CloudSnapshot::new(sample(), "2024-03-02T10:00:00Z".to_string()).unwrap();
        let raw = serde_json::to_string(&snapshot).unwrap();
        let stored: StoredSnapshot = serde_json::from_str(&raw).unwrap();
        assert!(matches!(stored, StoredSnapshot::Envelope(_)));
    }

    #[test]
    fn test_snapshot_with_full_precision_distance_verifies_after_reload() {
        let mut activities = sample();
        activities[0].distance = Some(19.380598938059702);
        let snapshot = CloudSnapshot::new(activities, "2024-03-02T10:00:00Z".to_string()).unwrap();

        let raw = serde_json::to_string(&snapshot).unwrap();
        let stored: StoredSnapshot = serde_json::from_str(&raw).unwrap();
        let StoredSnapshot::Envelope(reloaded) = stored else {
            panic!("expected envelope");
        };
        assert_eq!(reloaded.activities[0].distance, Some(19.380598938059702));
        assert!(reloaded.verify().unwrap());
    }
}

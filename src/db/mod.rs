//! Storage layer (key-value slots holding JSON documents).

pub mod activity_store;
pub mod storage;

pub use activity_store::ActivityStore;
pub use storage::{FileStorage, MemoryStorage};

/// Storage keys as constants.
pub mod keys {
    /// Local activity collection
    pub const ACTIVITIES: &str = "pro_sport_tracker_data";
    /// Simulated remote backup slot
    pub const CLOUD_BACKUP: &str = "pro_sport_tracker_cloud_sim";
}

/// A key-value store of text documents.
pub trait Storage: Send + Sync {
    /// Read the document stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the document stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

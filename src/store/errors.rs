//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A lock guarding a table set was poisoned by a panicking writer
    #[error("store lock poisoned")]
    LockPoisoned,

    /// A row could not be serialized for condition matching
    #[error("row serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

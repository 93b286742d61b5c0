//! Storage error types.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
///
/// No variant is retried locally; the hosting platform's redelivery policy
/// decides what happens next. `is_retryable` marks the transient ones.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("List failed: {0}")]
    ListFailed(String),

    #[error("ACL update failed for {key}: {message}")]
    AclFailed { key: String, message: String },

    #[error("Publish failed: {0}")]
    PublishFailed(String),
}

impl StorageError {
    pub fn acl_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AclFailed {
            key: key.into(),
            message: message.into(),
        }
    }

    /// All storage failures are transient from this component's view.
    pub fn is_retryable(&self) -> bool {
        true
    }
}

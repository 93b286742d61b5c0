//! Handler error types.

use thiserror::Error;

/// Result type for handler operations.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Errors that can surface at the invocation boundary.
///
/// Nothing here is caught internally; the error reaches the platform,
/// which decides whether to redeliver the notification.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid notification: {0}")]
    InvalidNotification(String),

    #[error("Storage error: {0}")]
    Storage(#[from] lesscast_storage::StorageError),

    #[error("Transcoder error: {0}")]
    Transcoder(#[from] lesscast_transcoder::TranscoderError),

    #[error("Feed error: {0}")]
    Feed(#[from] lesscast_feed::FeedError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HandlerError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_notification(msg: impl Into<String>) -> Self {
        Self::InvalidNotification(msg.into())
    }

    /// Whether redelivering the triggering notification could succeed.
    ///
    /// Malformed notifications and missing configuration fail the same way
    /// every time; external-call failures are worth a redelivery.
    pub fn is_retryable(&self) -> bool {
        match self {
            HandlerError::Storage(e) => e.is_retryable(),
            HandlerError::Transcoder(e) => e.is_retryable(),
            HandlerError::ConfigError(_)
            | HandlerError::InvalidNotification(_)
            | HandlerError::Feed(_)
            | HandlerError::Io(_) => false,
        }
    }
}

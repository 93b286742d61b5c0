//! Transcoder error types.

use thiserror::Error;

/// Result type for transcoder operations.
pub type TranscoderResult<T> = Result<T, TranscoderError>;

/// Errors that can occur while submitting a transcode job.
#[derive(Debug, Error)]
pub enum TranscoderError {
    #[error("Job submission failed: {0}")]
    SubmitFailed(String),

    #[error("Service accepted the job but returned no job id")]
    MissingJobId,
}

impl TranscoderError {
    /// Whether redelivering the triggering event could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TranscoderError::SubmitFailed(_))
    }
}

//! Elastic Transcoder job submission client.
//!
//! Submission is fire-and-forget: the service assigns a job id, the id is
//! logged, and nothing here polls for completion. The transcoder drops its
//! output back into the media bucket, which re-enters the pipeline as a
//! fresh storage notification.

pub mod client;
pub mod error;

pub use client::TranscoderClient;
pub use error::{TranscoderError, TranscoderResult};

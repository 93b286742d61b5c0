//! Shared data models for the Lesscast pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Storage change events and their classification
//! - Transcode job specifications
//! - Bucket object summaries consumed by the feed builder
//!
//! Everything in here is pure and AWS-free so the routing and
//! job-construction logic can be unit tested without a live service.

pub mod classify;
pub mod event;
pub mod job;
pub mod key;
pub mod object;

// Re-export common types
pub use classify::{classify, MediaKind};
pub use event::{ChangeKind, StorageEvent};
pub use job::{JobId, TranscodeJobSpec, TranscodeOutput};
pub use key::{base_name, extension};
pub use object::ObjectSummary;

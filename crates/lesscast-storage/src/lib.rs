//! S3 storage client for the Lesscast pipeline.
//!
//! Thin wrapper over `aws-sdk-s3` exposing exactly the operations the
//! pipeline consumes: full paginated listing, public-read ACL updates and
//! public-read puts. Failures map onto a narrow error taxonomy so the
//! invocation boundary can tell retryable conditions apart.

pub mod client;
pub mod error;

pub use client::MediaStore;
pub use error::{StorageError, StorageResult};

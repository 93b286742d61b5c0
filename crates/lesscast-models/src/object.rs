//! Bucket object summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the feed builder needs to know about a stored object.
///
/// Produced by a bucket listing; the feed document is a pure function of a
/// `Vec<ObjectSummary>` snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    /// Object key
    pub key: String,
    /// Last-modified timestamp reported by the listing
    pub last_modified: DateTime<Utc>,
}

impl ObjectSummary {
    pub fn new(key: impl Into<String>, last_modified: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            last_modified,
        }
    }
}

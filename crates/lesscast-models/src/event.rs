//! Storage change events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of change a storage notification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// An object was created or overwritten
    Created,
    /// An object was removed
    Removed,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Created => write!(f, "created"),
            ChangeKind::Removed => write!(f, "removed"),
        }
    }
}

/// A single object-storage change, as delivered by the hosting platform.
///
/// Immutable per invocation and never persisted; every derived artifact is
/// recomputed from live bucket state instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEvent {
    /// Bucket the change happened in
    pub bucket: String,
    /// Object key, already URL-decoded
    pub key: String,
    /// Created vs removed
    pub change: ChangeKind,
}

impl StorageEvent {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, change: ChangeKind) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            change,
        }
    }

    /// Whether this event describes a removal.
    pub fn is_removal(&self) -> bool {
        self.change == ChangeKind::Removed
    }
}

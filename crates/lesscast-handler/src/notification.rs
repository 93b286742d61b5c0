//! S3 event-notification parsing.
//!
//! A notification may carry several records; each becomes its own
//! `StorageEvent` and is handled independently, including the
//! removal short-circuit in the transcode path.

use serde::Deserialize;
use tracing::warn;

use lesscast_models::{ChangeKind, StorageEvent};

use crate::error::{HandlerError, HandlerResult};

#[derive(Debug, Deserialize)]
struct S3EventNotification {
    #[serde(rename = "Records", default)]
    records: Vec<S3EventRecord>,
}

#[derive(Debug, Deserialize)]
struct S3EventRecord {
    #[serde(rename = "eventName")]
    event_name: String,
    s3: S3Entity,
}

#[derive(Debug, Deserialize)]
struct S3Entity {
    bucket: S3BucketEntity,
    object: S3ObjectEntity,
}

#[derive(Debug, Deserialize)]
struct S3BucketEntity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct S3ObjectEntity {
    key: String,
}

/// Parse a raw notification document into storage events.
///
/// Records with event names outside the created/removed families are
/// skipped with a warning; a structurally malformed document is fatal for
/// the whole invocation.
pub fn parse_notification(payload: &str) -> HandlerResult<Vec<StorageEvent>> {
    let notification: S3EventNotification = serde_json::from_str(payload)
        .map_err(|e| HandlerError::invalid_notification(e.to_string()))?;

    let mut events = Vec::with_capacity(notification.records.len());
    for record in notification.records {
        let change = if record.event_name.starts_with("ObjectCreated") {
            ChangeKind::Created
        } else if record.event_name.starts_with("ObjectRemoved") {
            ChangeKind::Removed
        } else {
            warn!(event_name = %record.event_name, "Skipping record with unhandled event name");
            continue;
        };

        let key = decode_key(&record.s3.object.key)?;
        events.push(StorageEvent::new(record.s3.bucket.name, key, change));
    }

    Ok(events)
}

/// Decode an S3 object key as delivered in a notification.
///
/// Keys arrive URL-encoded with spaces as '+'.
fn decode_key(raw: &str) -> HandlerResult<String> {
    let plus_decoded = raw.replace('+', " ");
    let decoded = urlencoding::decode(&plus_decoded)
        .map_err(|e| HandlerError::invalid_notification(format!("Undecodable key {raw:?}: {e}")))?;
    Ok(decoded.into_owned())
}

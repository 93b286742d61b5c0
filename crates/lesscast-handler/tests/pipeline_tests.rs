//! End-to-end pipeline tests over the pure planning layers.
//!
//! The async shells (S3 listing, ACL puts, job submission) are thin
//! adapters over these plans, so the scenarios from the original system
//! are asserted here without a live AWS account.

use chrono::{TimeZone, Utc};

use lesscast_feed::{plan_rebuild, render, FEED_OBJECT_KEY};
use lesscast_handler::parse_notification;
use lesscast_handler::HandlerError;
use lesscast_models::{classify, ChangeKind, MediaKind, ObjectSummary};

fn upload_notification(bucket: &str, key: &str) -> String {
    format!(
        r#"{{"Records":[{{"eventName":"ObjectCreated:Put","s3":{{"bucket":{{"name":"{bucket}"}},"object":{{"key":"{key}"}}}}}}]}}"#
    )
}

#[test]
fn test_audio_upload_routes_to_feed_rebuild() {
    let events = parse_notification(&upload_notification("lesscast-media", "new.m4a")).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(classify(&events[0].key), MediaKind::Audio);
}

#[test]
fn test_video_upload_routes_to_transcode() {
    let events =
        parse_notification(&upload_notification("lesscast-media", "talks/ep1.mp4")).unwrap();

    assert_eq!(classify(&events[0].key), MediaKind::VideoLike);
    assert_eq!(events[0].change, ChangeKind::Created);
}

#[test]
fn test_unrelated_upload_is_ignored() {
    let events = parse_notification(&upload_notification("lesscast-media", "notes.txt")).unwrap();

    assert_eq!(classify(&events[0].key), MediaKind::Ignored);
}

#[test]
fn test_audio_upload_rebuild_scenario() {
    // Bucket contains [old.mp3, new.m4a] once the triggering upload landed
    let snapshot = vec![
        ObjectSummary::new("old.mp3", Utc.timestamp_opt(1_000, 0).unwrap()),
        ObjectSummary::new("new.m4a", Utc.timestamp_opt(2_000, 0).unwrap()),
    ];

    let plan = plan_rebuild(&snapshot, "lesscast-media", "lesscast-web");

    // Exactly two entries, ordered by last-modified
    assert_eq!(plan.document.entries.len(), 2);
    assert_eq!(
        plan.document.entries[0].url,
        "https://s3.amazonaws.com/lesscast-media/old.mp3"
    );
    assert_eq!(
        plan.document.entries[1].url,
        "https://s3.amazonaws.com/lesscast-media/new.m4a"
    );

    // Both must be made publicly accessible as part of the same rebuild
    assert_eq!(plan.acl_targets, vec!["old.mp3", "new.m4a"]);

    // Published at rss.xml in the destination bucket; a second run over the
    // same snapshot would overwrite it with identical bytes
    assert_eq!(FEED_OBJECT_KEY, "rss.xml");
    let first = render(&plan.document).unwrap();
    let second = render(&plan_rebuild(&snapshot, "lesscast-media", "lesscast-web").document).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_rebuild_after_removal_drops_the_entry() {
    let before = vec![
        ObjectSummary::new("keep.mp3", Utc.timestamp_opt(1_000, 0).unwrap()),
        ObjectSummary::new("gone.mp3", Utc.timestamp_opt(2_000, 0).unwrap()),
    ];
    let after: Vec<ObjectSummary> = before
        .iter()
        .filter(|o| o.key != "gone.mp3")
        .cloned()
        .collect();

    let plan = plan_rebuild(&after, "lesscast-media", "lesscast-web");
    let xml = String::from_utf8(render(&plan.document).unwrap()).unwrap();

    assert_eq!(plan.document.entries.len(), 1);
    assert!(xml.contains("keep.mp3"));
    assert!(!xml.contains("gone.mp3"));
}

#[test]
fn test_garbage_notification_is_a_fatal_non_retryable_error() {
    let err = parse_notification("not json at all").unwrap_err();

    assert!(matches!(err, HandlerError::InvalidNotification(_)));
    assert!(!err.is_retryable());
}

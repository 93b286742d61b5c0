//! Rebuild planning.
//!
//! `plan_rebuild` turns a bucket-listing snapshot into everything the
//! publisher needs: which objects must be made publicly readable and the
//! exact document to serialize. It performs no I/O, so every content rule
//! (filtering, ordering, titles, URLs) is asserted here in unit tests and
//! the async orchestration stays a thin shell around it.

use lesscast_models::key::file_name;
use lesscast_models::ObjectSummary;

use crate::document::{FeedDocument, FeedEntry, FEED_OBJECT_KEY};

/// Channel title of the published feed.
const FEED_TITLE: &str = "Lesscast Uploads";

/// Channel description of the published feed.
const FEED_DESCRIPTION: &str = "Created by lesscast";

/// Fixed description attached to every entry.
const ENTRY_DESCRIPTION: &str = "added by lesscast";

/// Key suffixes that qualify an object for the feed. Case-sensitive.
const AUDIO_SUFFIXES: [&str; 2] = [".mp3", ".m4a"];

/// Everything a feed rebuild has to do once the bucket has been listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuildPlan {
    /// Keys that must be set to public-read, in entry order. A feed entry
    /// the public cannot fetch is a correctness violation, so this set is
    /// exactly the entry set.
    pub acl_targets: Vec<String>,
    /// The document to serialize and publish
    pub document: FeedDocument,
}

/// Public URL of an object, as served by S3's path-style endpoint.
pub fn public_url(bucket: &str, key: &str) -> String {
    format!("https://s3.amazonaws.com/{}/{}", bucket, key)
}

/// Compute the full rebuild plan from a listing snapshot.
///
/// Filters the snapshot to audio objects, orders them ascending by
/// last-modified with the key as tie-break, and derives one entry per
/// object. Deterministic: the same snapshot always yields the same plan.
pub fn plan_rebuild(
    objects: &[ObjectSummary],
    source_bucket: &str,
    web_bucket: &str,
) -> RebuildPlan {
    let mut audio: Vec<&ObjectSummary> = objects
        .iter()
        .filter(|obj| AUDIO_SUFFIXES.iter().any(|sfx| obj.key.ends_with(sfx)))
        .collect();
    audio.sort_by(|a, b| {
        a.last_modified
            .cmp(&b.last_modified)
            .then_with(|| a.key.cmp(&b.key))
    });

    let acl_targets: Vec<String> = audio.iter().map(|obj| obj.key.clone()).collect();
    let entries: Vec<FeedEntry> = audio
        .iter()
        .map(|obj| FeedEntry {
            url: public_url(source_bucket, &obj.key),
            title: entry_title(&obj.key),
            description: ENTRY_DESCRIPTION.to_string(),
        })
        .collect();

    RebuildPlan {
        acl_targets,
        document: FeedDocument {
            title: FEED_TITLE.to_string(),
            description: FEED_DESCRIPTION.to_string(),
            self_link: public_url(web_bucket, FEED_OBJECT_KEY),
            category: ("Technology".to_string(), "Podcasting".to_string()),
            entries,
        },
    }
}

/// Entry title for an object key.
///
/// The directory prefix is dropped and a trailing ".mp3" is stripped;
/// ".m4a" stays in the title. The asymmetry is inherited from the original
/// feed and kept for output parity.
fn entry_title(key: &str) -> String {
    let name = file_name(key);
    name.strip_suffix(".mp3").unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn obj(key: &str, secs: i64) -> ObjectSummary {
        ObjectSummary::new(key, Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn entry_keys(plan: &RebuildPlan) -> Vec<String> {
        plan.document
            .entries
            .iter()
            .map(|e| e.url.rsplit('/').next().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_non_audio_objects_never_appear() {
        let objects = vec![
            obj("video.mp4", 10),
            obj("notes.txt", 20),
            obj("ep1.mp3", 30),
            obj("cover.png", 40),
        ];
        let plan = plan_rebuild(&objects, "media", "web");

        assert_eq!(entry_keys(&plan), vec!["ep1.mp3"]);
        assert_eq!(plan.acl_targets, vec!["ep1.mp3"]);
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        let objects = vec![obj("ep1.MP3", 10), obj("ep2.M4A", 20)];
        let plan = plan_rebuild(&objects, "media", "web");

        assert!(plan.document.entries.is_empty());
        assert!(plan.acl_targets.is_empty());
    }

    #[test]
    fn test_order_ascending_by_last_modified_then_key() {
        // a.mp3 and c.mp3 share a timestamp; the key breaks the tie
        let objects = vec![obj("c.mp3", 100), obj("a.mp3", 100), obj("b.m4a", 50)];
        let plan = plan_rebuild(&objects, "media", "web");

        assert_eq!(entry_keys(&plan), vec!["b.m4a", "a.mp3", "c.mp3"]);
    }

    #[test]
    fn test_plan_is_deterministic() {
        let objects = vec![obj("x.mp3", 5), obj("y.m4a", 5), obj("z.mp3", 1)];

        let first = plan_rebuild(&objects, "media", "web");
        let second = plan_rebuild(&objects, "media", "web");
        assert_eq!(first, second);
    }

    #[test]
    fn test_acl_targets_match_entry_set_and_order() {
        let objects = vec![obj("b.mp3", 2), obj("a.m4a", 1), obj("skip.mp4", 0)];
        let plan = plan_rebuild(&objects, "media", "web");

        assert_eq!(plan.acl_targets, vec!["a.m4a", "b.mp3"]);
        assert_eq!(entry_keys(&plan), plan.acl_targets);
    }

    #[test]
    fn test_entry_urls_point_at_source_bucket() {
        let objects = vec![obj("shows/ep1.mp3", 1)];
        let plan = plan_rebuild(&objects, "lesscast-media", "lesscast-web");

        let entry = &plan.document.entries[0];
        assert_eq!(
            entry.url,
            "https://s3.amazonaws.com/lesscast-media/shows/ep1.mp3"
        );
        assert_eq!(
            plan.document.self_link,
            "https://s3.amazonaws.com/lesscast-web/rss.xml"
        );
    }

    #[test]
    fn test_title_strips_mp3_but_not_m4a() {
        let objects = vec![obj("shows/ep1.mp3", 1), obj("shows/ep2.m4a", 2)];
        let plan = plan_rebuild(&objects, "media", "web");

        assert_eq!(plan.document.entries[0].title, "ep1");
        assert_eq!(plan.document.entries[1].title, "ep2.m4a");
    }

    #[test]
    fn test_empty_bucket_yields_empty_feed() {
        let plan = plan_rebuild(&[], "media", "web");

        assert!(plan.document.entries.is_empty());
        assert!(plan.acl_targets.is_empty());
        assert_eq!(plan.document.title, "Lesscast Uploads");
    }
}

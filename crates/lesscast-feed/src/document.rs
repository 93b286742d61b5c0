//! Feed document model.
//!
//! A `FeedDocument` is the in-memory form of the published artifact. Entry
//! order is significant and fixed at construction time; rendering never
//! reorders or timestamps anything, so identical documents render to
//! identical bytes.

use serde::{Deserialize, Serialize};

/// Key the serialized feed is published under in the web bucket.
pub const FEED_OBJECT_KEY: &str = "rss.xml";

/// Content type of the published feed object.
pub const FEED_CONTENT_TYPE: &str = "application/rss+xml";

/// MIME type advertised for every enclosure, regardless of container.
pub const ENCLOSURE_TYPE: &str = "audio/mpeg";

/// Enclosure length sentinel; object sizes are not computed.
pub const ENCLOSURE_LENGTH: u64 = 0;

/// One audio object's appearance in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Public URL of the object, doubling as the entry's guid and link
    pub url: String,
    /// Display title derived from the object key
    pub title: String,
    /// Fixed per-entry description
    pub description: String,
}

/// The complete publishable feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedDocument {
    /// Channel title
    pub title: String,
    /// Channel description
    pub description: String,
    /// Public URL of the published feed itself
    pub self_link: String,
    /// iTunes category, as (category, subcategory)
    pub category: (String, String),
    /// Entries in publication order
    pub entries: Vec<FeedEntry>,
}

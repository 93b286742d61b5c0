//! Deterministic podcast feed construction.
//!
//! The feed is never patched incrementally: every rebuild takes a full
//! snapshot of the media bucket listing and recomputes the document from
//! scratch. `plan_rebuild` is a pure function of that snapshot, which keeps
//! the ordering and content rules trivially testable and makes concurrent
//! rebuilds converge on the same output.

pub mod builder;
pub mod document;
pub mod error;
pub mod render;

pub use builder::{plan_rebuild, public_url, RebuildPlan};
pub use document::{FeedDocument, FeedEntry, FEED_CONTENT_TYPE, FEED_OBJECT_KEY};
pub use error::{FeedError, FeedResult};
pub use render::render;

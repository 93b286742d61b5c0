//! Feed rebuild orchestration.
//!
//! The thin async shell around `lesscast_feed::plan_rebuild`: enumerate the
//! live bucket, apply the plan's ACL updates, render, publish. Any failure
//! propagates before the publish put, so the previously published feed is
//! at worst stale, never partial.

use tracing::info;

use lesscast_feed::{plan_rebuild, render, FEED_CONTENT_TYPE, FEED_OBJECT_KEY};
use lesscast_storage::MediaStore;

use crate::config::HandlerConfig;
use crate::error::HandlerResult;

/// Rebuild and publish the feed from current bucket contents.
///
/// Runs for every audio event, created and removed alike; a removal simply
/// results in a listing without the removed object.
pub async fn rebuild_feed(store: &MediaStore, config: &HandlerConfig) -> HandlerResult<()> {
    let objects = store.list_all_objects(&config.bucket).await?;
    let plan = plan_rebuild(&objects, &config.bucket, &config.web_bucket);

    // Every listed entry must be publicly fetchable before the feed that
    // references it goes live.
    for key in &plan.acl_targets {
        info!(key = %key, "Adding object to feed");
        store.set_public_read(&config.bucket, key).await?;
    }

    let body = render(&plan.document)?;
    store
        .put_object_public(&config.web_bucket, FEED_OBJECT_KEY, body, FEED_CONTENT_TYPE)
        .await?;

    info!(entries = plan.document.entries.len(), "Feed rebuild complete");
    Ok(())
}

//! Feed error types.

use thiserror::Error;

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while building or rendering the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to render feed markup: {0}")]
    Render(#[from] rss::Error),
}

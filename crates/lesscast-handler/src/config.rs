//! Handler configuration.

use crate::error::{HandlerError, HandlerResult};

/// Default web-facing bucket the feed is published to.
const DEFAULT_WEB_BUCKET: &str = "lesscast-web";

/// Default Elastic Transcoder system preset: 160k AAC.
const DEFAULT_PRESET_ID: &str = "1351620000001-100120";

/// Environment-supplied handler configuration.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Source media bucket the notifications fire for
    pub bucket: String,
    /// Destination bucket the feed is published to
    pub web_bucket: String,
    /// Transcoding pipeline id; only required once a video shows up
    pub pipeline_id: Option<String>,
    /// Audio output preset id
    pub preset_id: String,
}

impl HandlerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> HandlerResult<Self> {
        Ok(Self {
            bucket: std::env::var("LESSCAST_BUCKET")
                .map_err(|_| HandlerError::config_error("LESSCAST_BUCKET not set"))?,
            web_bucket: std::env::var("LESSCAST_WEB_BUCKET")
                .unwrap_or_else(|_| DEFAULT_WEB_BUCKET.to_string()),
            pipeline_id: std::env::var("LESSCAST_PIPELINE_ID").ok(),
            preset_id: std::env::var("LESSCAST_PRESET_ID")
                .unwrap_or_else(|_| DEFAULT_PRESET_ID.to_string()),
        })
    }

    /// Pipeline id, or a config error if none was supplied.
    pub fn pipeline_id(&self) -> HandlerResult<&str> {
        self.pipeline_id
            .as_deref()
            .ok_or_else(|| HandlerError::config_error("LESSCAST_PIPELINE_ID not set"))
    }
}

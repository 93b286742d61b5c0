//! Event routing.

use aws_config::BehaviorVersion;
use tracing::{debug, info};

use lesscast_models::{classify, MediaKind, StorageEvent};
use lesscast_storage::MediaStore;
use lesscast_transcoder::TranscoderClient;

use crate::config::HandlerConfig;
use crate::dispatch::dispatch;
use crate::error::HandlerResult;
use crate::notification::parse_notification;
use crate::rebuild::rebuild_feed;

/// One handler instance per invocation; holds no mutable state.
#[derive(Clone)]
pub struct EventHandler {
    config: HandlerConfig,
    store: MediaStore,
    transcoder: TranscoderClient,
}

impl EventHandler {
    pub fn new(config: HandlerConfig, store: MediaStore, transcoder: TranscoderClient) -> Self {
        Self {
            config,
            store,
            transcoder,
        }
    }

    /// Build a handler from environment configuration, sharing one loaded
    /// SDK configuration across both service clients.
    pub async fn from_env() -> HandlerResult<Self> {
        let config = HandlerConfig::from_env()?;
        let aws = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Ok(Self::new(
            config,
            MediaStore::new(&aws),
            TranscoderClient::new(&aws),
        ))
    }

    /// Handle a raw notification document: every record is classified and
    /// handled independently.
    pub async fn handle_notification(&self, payload: &str) -> HandlerResult<()> {
        let events = parse_notification(payload)?;
        debug!("Notification carries {} event(s)", events.len());

        for event in &events {
            self.handle_event(event).await?;
        }
        Ok(())
    }

    /// Route a single storage event to its pipeline.
    pub async fn handle_event(&self, event: &StorageEvent) -> HandlerResult<()> {
        match classify(&event.key) {
            MediaKind::Audio => {
                info!(key = %event.key, change = %event.change, "Audio change, rebuilding feed");
                rebuild_feed(&self.store, &self.config).await
            }
            MediaKind::VideoLike => {
                dispatch(event, &self.config, &self.transcoder).await?;
                Ok(())
            }
            MediaKind::Ignored => {
                debug!(key = %event.key, "Ignoring object with unhandled extension");
                Ok(())
            }
        }
    }
}

//! Event classification.
//!
//! Every incoming storage event is routed by the extension of its object
//! key. The mapping is closed and case-sensitive: anything outside it is
//! silently ignored, which is how uploads of cover art, notes and other
//! non-media files stay invisible to the pipeline.

use serde::{Deserialize, Serialize};

use crate::key::extension;

/// How a storage event should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Audio object; triggers a feed rebuild
    Audio,
    /// Video object; triggers an audio-extraction transcode
    VideoLike,
    /// Anything else; dropped without error
    Ignored,
}

/// Classify an object key by its extension.
///
/// `.mp3` / `.m4a` are audio, `.mkv` / `.webm` / `.mp4` are video-like,
/// everything else (including missing or uppercase extensions) is ignored.
pub fn classify(key: &str) -> MediaKind {
    match extension(key) {
        Some(".mp3") | Some(".m4a") => MediaKind::Audio,
        Some(".mkv") | Some(".webm") | Some(".mp4") => MediaKind::VideoLike,
        _ => MediaKind::Ignored,
    }
}

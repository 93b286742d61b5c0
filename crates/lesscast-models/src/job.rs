//! Transcode job specifications.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::key::base_name;

/// Frame-rate hint passed through to the transcoding service.
const FRAME_RATE_AUTO: &str = "auto";

/// Identifier assigned to a submitted job by the transcoding service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One output rendition of a transcode job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeOutput {
    /// Key the rendition is written under, relative to the pipeline's
    /// output bucket
    pub output_key: String,
    /// Named encoding profile of the transcoding service
    pub preset_id: String,
}

/// A complete job description for the transcoding service.
///
/// Built fresh per video event and submitted exactly once; no retry state
/// is kept on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeJobSpec {
    /// Source object key in the media bucket
    pub input_key: String,
    /// Frame-rate hint, always "auto"
    pub frame_rate: String,
    /// Output renditions, in submission order
    pub outputs: Vec<TranscodeOutput>,
}

impl TranscodeJobSpec {
    /// Build the audio-extraction job for an uploaded video.
    ///
    /// The single output lands under `audio/` with the video's base name
    /// and an `.m4a` suffix, so its completion re-enters the pipeline as a
    /// fresh audio-upload notification.
    pub fn audio_extraction(input_key: &str, preset_id: &str) -> Self {
        let output_key = format!("audio/{}.m4a", base_name(input_key));
        Self {
            input_key: input_key.to_string(),
            frame_rate: FRAME_RATE_AUTO.to_string(),
            outputs: vec![TranscodeOutput {
                output_key,
                preset_id: preset_id.to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESET: &str = "1351620000001-100120";

    #[test]
    fn test_audio_extraction_spec() {
        let spec = TranscodeJobSpec::audio_extraction("talks/ep1.mp4", PRESET);

        assert_eq!(spec.input_key, "talks/ep1.mp4");
        assert_eq!(spec.frame_rate, "auto");
        assert_eq!(spec.outputs.len(), 1);
        assert_eq!(spec.outputs[0].output_key, "audio/ep1.m4a");
        assert_eq!(spec.outputs[0].preset_id, PRESET);
    }

    #[test]
    fn test_audio_extraction_strips_nested_prefix() {
        let spec = TranscodeJobSpec::audio_extraction("a/b/c/ep2.webm", PRESET);
        assert_eq!(spec.outputs[0].output_key, "audio/ep2.m4a");
    }

    #[test]
    fn test_audio_extraction_top_level_key() {
        let spec = TranscodeJobSpec::audio_extraction("ep3.mkv", PRESET);
        assert_eq!(spec.input_key, "ep3.mkv");
        assert_eq!(spec.outputs[0].output_key, "audio/ep3.m4a");
    }
}

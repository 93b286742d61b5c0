//! Transcode dispatch for video uploads.

use tracing::info;

use lesscast_models::{JobId, StorageEvent, TranscodeJobSpec};
use lesscast_transcoder::TranscoderClient;

use crate::config::HandlerConfig;
use crate::error::HandlerResult;

/// Decide what, if anything, to submit for a video event.
///
/// A removal yields `None`: a deleted source has nothing to transcode and
/// must not cause any external call.
pub fn plan_dispatch(event: &StorageEvent, preset_id: &str) -> Option<TranscodeJobSpec> {
    if event.is_removal() {
        return None;
    }
    Some(TranscodeJobSpec::audio_extraction(&event.key, preset_id))
}

/// Submit the audio-extraction job for a video upload.
///
/// Fire-and-forget: the job id is logged and nothing polls for completion.
/// The transcoded output lands back in the media bucket and re-enters the
/// pipeline through its own notification.
pub async fn dispatch(
    event: &StorageEvent,
    config: &HandlerConfig,
    transcoder: &TranscoderClient,
) -> HandlerResult<Option<JobId>> {
    let Some(spec) = plan_dispatch(event, &config.preset_id) else {
        info!(key = %event.key, "Video deleted. Nothing to do");
        return Ok(None);
    };

    info!(key = %event.key, "Processing video");
    let job_id = transcoder.submit_job(config.pipeline_id()?, &spec).await?;
    Ok(Some(job_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesscast_models::ChangeKind;

    const PRESET: &str = "1351620000001-100120";

    #[test]
    fn test_removal_plans_nothing() {
        let event = StorageEvent::new("media", "talks/ep1.mp4", ChangeKind::Removed);
        assert_eq!(plan_dispatch(&event, PRESET), None);
    }

    #[test]
    fn test_upload_plans_audio_extraction() {
        let event = StorageEvent::new("media", "talks/ep1.mp4", ChangeKind::Created);
        let spec = plan_dispatch(&event, PRESET).unwrap();

        assert_eq!(spec.input_key, "talks/ep1.mp4");
        assert_eq!(spec.frame_rate, "auto");
        assert_eq!(spec.outputs.len(), 1);
        assert_eq!(spec.outputs[0].output_key, "audio/ep1.m4a");
        assert_eq!(spec.outputs[0].preset_id, PRESET);
    }
}

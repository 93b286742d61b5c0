//! Elastic Transcoder client wrapper.

use aws_config::BehaviorVersion;
use aws_sdk_elastictranscoder::types::{CreateJobOutput, JobInput};
use aws_sdk_elastictranscoder::Client;
use tracing::{debug, info};

use lesscast_models::{JobId, TranscodeJobSpec};

use crate::error::{TranscoderError, TranscoderResult};

/// Client for the managed transcoding service.
#[derive(Clone)]
pub struct TranscoderClient {
    client: Client,
}

impl TranscoderClient {
    /// Create a client from a loaded SDK configuration.
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }

    /// Create a client from ambient AWS environment configuration.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(&config)
    }

    /// Submit a job against a pipeline and return the assigned job id.
    ///
    /// Single attempt, no local retry; a failed submission propagates so
    /// the platform can redeliver the triggering event.
    pub async fn submit_job(
        &self,
        pipeline_id: &str,
        spec: &TranscodeJobSpec,
    ) -> TranscoderResult<JobId> {
        debug!(input_key = %spec.input_key, pipeline_id, "Submitting transcode job");

        let input = JobInput::builder()
            .key(&spec.input_key)
            .frame_rate(&spec.frame_rate)
            .build();

        let mut request = self
            .client
            .create_job()
            .pipeline_id(pipeline_id)
            .input(input);
        for output in &spec.outputs {
            request = request.outputs(
                CreateJobOutput::builder()
                    .key(&output.output_key)
                    .preset_id(&output.preset_id)
                    .build(),
            );
        }

        let response = request
            .send()
            .await
            .map_err(|e| TranscoderError::SubmitFailed(e.to_string()))?;

        let job_id = response
            .job()
            .and_then(|job| job.id())
            .map(JobId::from_string)
            .ok_or(TranscoderError::MissingJobId)?;

        info!(%job_id, input_key = %spec.input_key, "Started transcode job");
        Ok(job_id)
    }
}

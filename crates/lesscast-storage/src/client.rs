//! S3 client wrapper.

use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use chrono::{TimeZone, Utc};
use tracing::{debug, info, warn};

use lesscast_models::ObjectSummary;

use crate::error::{StorageError, StorageResult};

/// S3 client shared by the transcode and feed pipelines.
///
/// Bucket names are passed per call because the pipeline spans two buckets:
/// the media bucket it lists and the web bucket it publishes to.
#[derive(Clone)]
pub struct MediaStore {
    client: Client,
}

impl MediaStore {
    /// Create a store from a loaded SDK configuration.
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }

    /// Create a store from ambient AWS environment configuration.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(&config)
    }

    /// List every object in a bucket.
    ///
    /// Follows continuation tokens until the listing is exhausted, so the
    /// caller always sees the complete bucket, never a truncated page.
    pub async fn list_all_objects(&self, bucket: &str) -> StorageResult<Vec<ObjectSummary>> {
        debug!("Listing all objects in {}", bucket);

        let mut objects = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let mut request = self.client.list_objects_v2().bucket(bucket);

            if let Some(token) = continuation_token {
                request = request.continuation_token(token);
            }

            let response = request
                .send()
                .await
                .map_err(|e| StorageError::ListFailed(e.to_string()))?;

            if let Some(ref contents) = response.contents {
                for obj in contents {
                    let Some(key) = obj.key.clone() else {
                        warn!("Skipping listing entry without a key");
                        continue;
                    };
                    let Some(last_modified) = obj
                        .last_modified
                        .as_ref()
                        .and_then(|t| t.to_millis().ok())
                        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
                    else {
                        warn!(key = %key, "Skipping listing entry without a last-modified timestamp");
                        continue;
                    };
                    objects.push(ObjectSummary::new(key, last_modified));
                }
            }

            if response.is_truncated() == Some(true) {
                continuation_token = response.next_continuation_token;
            } else {
                break;
            }
        }

        debug!("Listed {} objects in {}", objects.len(), bucket);
        Ok(objects)
    }

    /// Set an object's ACL to public-read.
    pub async fn set_public_read(&self, bucket: &str, key: &str) -> StorageResult<()> {
        debug!("Setting public-read ACL on {}/{}", bucket, key);

        self.client
            .put_object_acl()
            .bucket(bucket)
            .key(key)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| StorageError::acl_failed(key, e.to_string()))?;

        Ok(())
    }

    /// Put an object with a public-read ACL, overwriting any prior content.
    pub async fn put_object_public(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<()> {
        debug!("Publishing {} bytes to {}/{}", body.len(), bucket, key);

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .acl(ObjectCannedAcl::PublicRead)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StorageError::PublishFailed(e.to_string()))?;

        info!("Published {}/{}", bucket, key);
        Ok(())
    }
}

//! S3 document access.
//!
//! The handler talks to storage through the [`DocumentStore`] trait so tests
//! can substitute an in-memory stub. The S3 implementation distinguishes
//! "object absent" from transport failures instead of collapsing both to an
//! empty result; the handler owns the policy of what each becomes.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::primitives::ByteStream;
use chrono::NaiveTime;
use tracing::debug;

use crate::core::config::AppConfig;
use crate::errors::{QaError, Result};

/// Key-addressed text object storage.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch an object and decode it as UTF-8 text.
    async fn fetch(&self, bucket: &str, key: &str) -> Result<String>;

    /// Write a text object.
    async fn store(&self, bucket: &str, key: &str, body: String) -> Result<()>;
}

/// Answer object key for a given wall-clock time: `<prefix>/<HHMMSS>.txt`,
/// zero-padded 24-hour time, no date component. Keys collide across days and
/// within the same second across concurrent writers; the later write wins.
#[must_use]
pub fn output_key(prefix: &str, at: NaiveTime) -> String {
    format!("{}/{}.txt", prefix.trim_end_matches('/'), at.format("%H%M%S"))
}

/// [`DocumentStore`] backed by S3.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    /// Build an S3 client from the default credential/region chain.
    ///
    /// Store calls get no explicit timeout; the SDK transport defaults apply.
    pub async fn new(config: &AppConfig) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()))
            .load()
            .await;

        Self {
            client: aws_sdk_s3::Client::new(&aws_config),
        }
    }
}

#[async_trait]
impl DocumentStore for S3ObjectStore {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<String> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                if let SdkError::ServiceError(ref context) = e {
                    if context.err().is_no_such_key() {
                        return QaError::NotFound(format!("s3://{bucket}/{key}"));
                    }
                }
                QaError::AwsError(format!("reading s3://{bucket}/{key}: {e}"))
            })?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| QaError::AwsError(format!("reading s3://{bucket}/{key} body: {e}")))?
            .into_bytes();

        debug!(bucket, key, size = bytes.len(), "Fetched object");

        String::from_utf8(bytes.to_vec())
            .map_err(|e| QaError::AwsError(format!("s3://{bucket}/{key} is not UTF-8: {e}")))
    }

    async fn store(&self, bucket: &str, key: &str, body: String) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body.into_bytes()))
            .send()
            .await
            .map_err(|e| QaError::AwsError(format!("writing s3://{bucket}/{key}: {e}")))?;

        Ok(())
    }
}

//! S3 transfer client
//!
//! Thin boundary over the AWS SDK: computes destination keys and uploads
//! one local file at a time. Credentials are resolved before each upload
//! so a misconfigured AWS environment surfaces as a distinct
//! [`TransferError::MissingCredentials`] rather than a generic service
//! failure, matching the two failure modes the orchestrator reports.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::config::ProvideCredentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::path::Path;
use tracing::info;

use crate::adapters::traits::{ObjectStorage, TransferOutcome};
use crate::config::S3Config;
use crate::domain::errors::TransferError;

/// Compute the destination key for a local file
///
/// `prefix/basename` when a prefix is configured (any trailing slash on
/// the prefix is stripped), the bare basename otherwise.
pub fn object_key(local_path: &Path, prefix: Option<&str>) -> String {
    let name = local_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match prefix {
        Some(p) if !p.is_empty() => format!("{}/{}", p.trim_end_matches('/'), name),
        _ => name,
    }
}

/// Object storage backed by an S3 bucket
pub struct S3Transfer {
    client: Client,
    sdk_config: SdkConfig,
    bucket: String,
    prefix: Option<String>,
}

impl S3Transfer {
    /// Build a transfer client for the configured bucket and region
    ///
    /// Constructing the client performs no network I/O; credential
    /// problems surface on the first upload, after the export phase has
    /// already staged its files on disk.
    pub async fn new(config: &S3Config) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        let client = Client::new(&sdk_config);

        Self {
            client,
            sdk_config,
            bucket: config.bucket.clone(),
            prefix: config.prefix.clone(),
        }
    }

    /// Resolve credentials, mapping failure to the dedicated error variant
    async fn check_credentials(&self) -> Result<(), TransferError> {
        let provider = self.sdk_config.credentials_provider().ok_or_else(|| {
            TransferError::MissingCredentials("no credentials provider configured".to_string())
        })?;

        provider
            .provide_credentials()
            .await
            .map_err(|e| TransferError::MissingCredentials(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for S3Transfer {
    async fn upload(&self, local_path: &Path) -> Result<TransferOutcome, TransferError> {
        self.check_credentials().await?;

        let key = object_key(local_path, self.prefix.as_deref());

        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|e| TransferError::Service {
                bucket: self.bucket.clone(),
                key: key.clone(),
                message: e.to_string(),
            })?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(body)
            .send()
            .await
            .map_err(|e| TransferError::Service {
                bucket: self.bucket.clone(),
                key: key.clone(),
                message: format!("{}", DisplayErrorContext(e)),
            })?;

        info!(
            bucket = %self.bucket,
            key = %key,
            "Uploaded to s3://{}/{}", self.bucket, key
        );

        Ok(TransferOutcome {
            source: local_path.to_path_buf(),
            bucket: self.bucket.clone(),
            key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_key_with_prefix() {
        let path = PathBuf::from("/app/out/users_20240101T000000Z.ndjson");
        assert_eq!(
            object_key(&path, Some("backups/")),
            "backups/users_20240101T000000Z.ndjson"
        );
    }

    #[test]
    fn test_key_with_prefix_no_trailing_slash() {
        let path = PathBuf::from("/app/out/users_20240101T000000Z.ndjson");
        assert_eq!(
            object_key(&path, Some("backups")),
            "backups/users_20240101T000000Z.ndjson"
        );
    }

    #[test]
    fn test_key_without_prefix() {
        let path = PathBuf::from("/app/out/users_20240101T000000Z.ndjson");
        assert_eq!(object_key(&path, None), "users_20240101T000000Z.ndjson");
    }

    #[test]
    fn test_key_empty_prefix_behaves_like_none() {
        let path = PathBuf::from("orders.ndjson");
        assert_eq!(object_key(&path, Some("")), "orders.ndjson");
    }

    #[test]
    fn test_key_nested_prefix() {
        let path = PathBuf::from("orders.ndjson");
        assert_eq!(
            object_key(&path, Some("exports/daily/")),
            "exports/daily/orders.ndjson"
        );
    }
}

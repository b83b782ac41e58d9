//! DigitalOcean Spaces (S3-compatible) storage backend.

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use gifcamp_core::types::DbId;
use uuid::Uuid;

use crate::config::{non_blank, StorageConfig};
use crate::error::StorageError;
use crate::ImageStore;

/// Uploads blobs as public-read objects keyed `{owner_id}/{uuid}{ext}` and
/// stores only the bare object key, deferring URL construction to read
/// time (CDN or endpoint changes require no data migration).
pub struct SpacesStore {
    config: StorageConfig,
}

impl SpacesStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// The four values the upload path cannot work without. Missing any one
    /// is a configuration failure surfaced as a save failure.
    fn credentials(&self) -> Result<(&str, &str, &str, &str), StorageError> {
        match (
            non_blank(&self.config.spaces_endpoint),
            non_blank(&self.config.spaces_access_key),
            non_blank(&self.config.spaces_secret_key),
            non_blank(&self.config.spaces_bucket),
        ) {
            (Some(endpoint), Some(access_key), Some(secret_key), Some(bucket)) => {
                Ok((endpoint, access_key, secret_key, bucket))
            }
            _ => Err(StorageError::Config(
                "DigitalOcean Spaces configuration is incomplete".into(),
            )),
        }
    }

    fn client(&self, endpoint: &str, access_key: &str, secret_key: &str) -> Client {
        let region = non_blank(&self.config.spaces_region)
            .unwrap_or("us-east-1")
            .to_string();
        let conf = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region))
            .endpoint_url(endpoint)
            .credentials_provider(Credentials::from_keys(access_key, secret_key, None))
            .build();
        Client::from_conf(conf)
    }
}

#[async_trait]
impl ImageStore for SpacesStore {
    async fn save(
        &self,
        data: &[u8],
        owner_id: DbId,
        extension: &str,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let (endpoint, access_key, secret_key, bucket) = self.credentials().inspect_err(|_| {
            tracing::error!("DigitalOcean Spaces configuration is incomplete");
        })?;

        let client = self.client(endpoint, access_key, secret_key);
        let key = format!("{owner_id}/{}{extension}", Uuid::new_v4());

        client
            .put_object()
            .bucket(bucket)
            .key(&key)
            .body(ByteStream::from(data.to_vec()))
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to upload image blob to Spaces");
                StorageError::Provider(err.to_string())
            })?;

        tracing::info!(key = %key, "image blob uploaded to Spaces");
        Ok(key)
    }

    fn public_url(&self, locator: &str, _request_base: &str) -> String {
        if locator.is_empty() {
            return String::new();
        }

        if let Some(cdn_url) = non_blank(&self.config.spaces_cdn_url) {
            return format!("{}/{locator}", cdn_url.trim_end_matches('/'));
        }

        if let Some(endpoint) = non_blank(&self.config.spaces_endpoint) {
            let bucket = non_blank(&self.config.spaces_bucket).unwrap_or_default();
            return format!("{}/{bucket}/{locator}", endpoint.trim_end_matches('/'));
        }

        locator.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

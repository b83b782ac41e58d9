//! Local filesystem storage backend.

use std::path::Path;

use async_trait::async_trait;
use gifcamp_core::types::DbId;
use tokio::fs;
use uuid::Uuid;

use crate::error::StorageError;
use crate::ImageStore;

/// Stores blobs under `{root}/{owner_id}/{uuid}{ext}` and resolves public
/// URLs against the request-derived base URL.
pub struct LocalStore {
    root: String,
}

impl LocalStore {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageStore for LocalStore {
    async fn save(
        &self,
        data: &[u8],
        owner_id: DbId,
        extension: &str,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        let owner_dir = Path::new(&self.root).join(owner_id.to_string());
        fs::create_dir_all(&owner_dir).await?;

        let file_name = format!("{}{extension}", Uuid::new_v4());
        fs::write(owner_dir.join(&file_name), data).await?;

        let locator = format!("{}/{owner_id}/{file_name}", self.root);
        tracing::info!(locator = %locator, "image blob saved locally");
        Ok(locator)
    }

    fn public_url(&self, locator: &str, request_base: &str) -> String {
        if locator.is_empty() {
            return String::new();
        }
        // Locators carry the configured root, which may be an absolute
        // path; its leading slash must not double up with the base's.
        format!(
            "{}/{}",
            request_base.trim_end_matches('/'),
            locator.trim_start_matches('/')
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

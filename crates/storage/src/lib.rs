//! Image storage backends.
//!
//! Two implementations of [`ImageStore`]: a local filesystem store and an
//! S3-compatible object store (DigitalOcean Spaces). Both persist an
//! uploaded payload under a backend-relative **locator** -- never a full
//! URL -- and translate a locator into a public URL at read time, so the
//! database stays agnostic of deployment topology (domain or CDN changes
//! require no data migration).

pub mod config;
pub mod error;
pub mod local;
pub mod spaces;

use std::sync::Arc;

use async_trait::async_trait;
use gifcamp_core::types::DbId;

pub use config::StorageConfig;
pub use error::StorageError;
pub use local::LocalStore;
pub use spaces::SpacesStore;

/// A storage backend for uploaded image blobs.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `data` for `owner_id`, returning the locator to store in the
    /// image record. `extension` includes the leading dot and has already
    /// passed upload validation.
    async fn save(
        &self,
        data: &[u8],
        owner_id: DbId,
        extension: &str,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Translate a stored locator into a publicly fetchable URL.
    ///
    /// `request_base` is the scheme+host of the inbound request (with the
    /// configured base URL as fallback); only the local backend uses it.
    /// An empty locator resolves to an empty string.
    fn public_url(&self, locator: &str, request_base: &str) -> String;
}

/// Build the configured store. Dispatch on the provider string happens
/// exactly once, here.
pub fn from_config(config: &StorageConfig) -> Result<Arc<dyn ImageStore>, StorageError> {
    match config.provider.to_ascii_lowercase().as_str() {
        "local" => Ok(Arc::new(LocalStore::new(&config.local_root))),
        "digitalocean" => Ok(Arc::new(SpacesStore::new(config.clone()))),
        other => Err(StorageError::Config(format!(
            "Unknown storage provider '{other}'. Must be one of: local, digitalocean"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_local() {
        let config = StorageConfig {
            provider: "local".into(),
            ..StorageConfig::default()
        };
        assert!(from_config(&config).is_ok());
    }

    #[test]
    fn from_config_is_case_insensitive() {
        let config = StorageConfig {
            provider: "DigitalOcean".into(),
            ..StorageConfig::default()
        };
        assert!(from_config(&config).is_ok());
    }

    #[test]
    fn from_config_rejects_unknown_provider() {
        let config = StorageConfig {
            provider: "ftp".into(),
            ..StorageConfig::default()
        };
        assert!(from_config(&config).is_err());
    }
}

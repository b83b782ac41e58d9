//! Storage configuration value object.

/// Immutable storage configuration, constructed once at startup and passed
/// by reference to the components that need it. Never consulted through any
/// global lookup.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Active backend: `"local"` or `"digitalocean"`.
    pub provider: String,
    /// Root directory for the local backend (default `Content`), relative
    /// or absolute. The content root is served at `/{root}` with leading
    /// slashes stripped from the URL path.
    pub local_root: String,
    /// DigitalOcean Spaces endpoint, e.g. `https://fra1.digitaloceanspaces.com`.
    pub spaces_endpoint: Option<String>,
    /// Spaces access key.
    pub spaces_access_key: Option<String>,
    /// Spaces secret key.
    pub spaces_secret_key: Option<String>,
    /// Spaces bucket name.
    pub spaces_bucket: Option<String>,
    /// Spaces region (defaults to `us-east-1` for the S3 client handshake).
    pub spaces_region: Option<String>,
    /// Optional CDN base URL; preferred over the endpoint when resolving
    /// public URLs.
    pub spaces_cdn_url: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: "local".into(),
            local_root: "Content".into(),
            spaces_endpoint: None,
            spaces_access_key: None,
            spaces_secret_key: None,
            spaces_bucket: None,
            spaces_region: None,
            spaces_cdn_url: None,
        }
    }
}

/// Treat missing and whitespace-only values identically.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

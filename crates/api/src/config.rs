use gifcamp_storage::StorageConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Fallback base URL for resolving locally stored images when the
    /// inbound request carries no usable Host header.
    pub public_base_url: String,
    /// Storage backend configuration.
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3000`    |
    /// | `STORAGE_PROVIDER`     | `local`                    |
    /// | `LOCAL_STORAGE_ROOT`   | `Content`                  |
    /// | `SPACES_ENDPOINT`      | unset                      |
    /// | `SPACES_ACCESS_KEY`    | unset                      |
    /// | `SPACES_SECRET_KEY`    | unset                      |
    /// | `SPACES_BUCKET`        | unset                      |
    /// | `SPACES_REGION`        | unset                      |
    /// | `SPACES_CDN_URL`       | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_base_url =
            std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let storage = StorageConfig {
            provider: std::env::var("STORAGE_PROVIDER").unwrap_or_else(|_| "local".into()),
            local_root: std::env::var("LOCAL_STORAGE_ROOT").unwrap_or_else(|_| "Content".into()),
            spaces_endpoint: env_opt("SPACES_ENDPOINT"),
            spaces_access_key: env_opt("SPACES_ACCESS_KEY"),
            spaces_secret_key: env_opt("SPACES_SECRET_KEY"),
            spaces_bucket: env_opt("SPACES_BUCKET"),
            spaces_region: env_opt("SPACES_REGION"),
            spaces_cdn_url: env_opt("SPACES_CDN_URL"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_base_url,
            storage,
        }
    }
}

/// Read an optional variable, treating blank values as unset.
fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

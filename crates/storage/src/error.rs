/// Storage backend error type.
///
/// Handlers convert every variant into the generic upload-failure response;
/// the detail is only ever logged.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The active backend is missing required configuration.
    #[error("Storage configuration error: {0}")]
    Config(String),

    /// A local filesystem write failed (disk full, permissions, ...).
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The object storage provider rejected the upload.
    #[error("Object storage error: {0}")]
    Provider(String),
}

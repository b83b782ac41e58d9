use std::sync::Arc;

use gifcamp_storage::ImageStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Everything here
/// is read-only after startup; consistency is delegated to the database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gifcamp_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Active image storage backend, selected once at startup.
    pub store: Arc<dyn ImageStore>,
}

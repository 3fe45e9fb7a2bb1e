use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: comicshelf_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// On-disk store for uploaded cover images.
    pub images: Arc<ImageStore>,
}

impl AppState {
    /// Assemble the state from a pool and loaded configuration.
    pub fn new(pool: comicshelf_db::DbPool, config: ServerConfig) -> Self {
        let images = ImageStore::new(&config.static_dir);
        Self {
            pool,
            config: Arc::new(config),
            images: Arc::new(images),
        }
    }
}

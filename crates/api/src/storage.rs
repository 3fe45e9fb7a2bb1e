//! Local on-disk storage for uploaded cover images.
//!
//! Images are stored flat in `{static_dir}/images/` under their sanitised
//! client filename. A second upload with the same name overwrites the first.

use std::path::{Path, PathBuf};

use comicshelf_core::catalog::IMAGE_SUBDIR;

use crate::error::{AppError, AppResult};

/// Directory-backed image store.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Store images under `images/` inside the given static root.
    pub fn new(static_dir: &Path) -> Self {
        Self {
            dir: static_dir.join(IMAGE_SUBDIR),
        }
    }

    /// Directory images are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `data` as `filename`, replacing any existing file of that name.
    ///
    /// `filename` must already be sanitised (see
    /// [`comicshelf_core::upload::sanitize_filename`]).
    pub async fn save(&self, filename: &str, data: &[u8]) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let path = self.dir.join(filename);
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        tracing::info!(path = %path.display(), bytes = data.len(), "Stored cover image");
        Ok(path)
    }
}

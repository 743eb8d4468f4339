//! JSON file adapter for the [`DocumentStore`] port.
//!
//! The whole collection lives in one file as a single JSON array of
//! questions. Saves go to a hidden sibling temp file which is synced and
//! then renamed over the target, so readers see either the old or the new
//! collection and never a truncated one.

use async_trait::async_trait;
use responder_application::ports::document_store::{DocumentStore, StoreError};
use responder_domain::Collection;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Document store backed by a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the collection file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file that receives the new content before the rename
    pub(crate) fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "collection".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    fn unavailable(&self, action: &str, e: std::io::Error) -> StoreError {
        StoreError::Unavailable(format!(
            "could not {} {}: {}",
            action,
            self.path.display(),
            e
        ))
    }

    async fn write_temp(&self, temp_path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = tokio::fs::File::create(temp_path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<Collection, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.unavailable("read", e))?;

        let collection: Collection = serde_json::from_slice(&bytes).map_err(|e| {
            StoreError::Corrupt(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(
            "Loaded {} questions from {}",
            collection.len(),
            self.path.display()
        );
        Ok(collection)
    }

    async fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(collection).map_err(|e| {
            StoreError::Unavailable(format!("could not serialize collection: {}", e))
        })?;

        let temp_path = self.temp_path();
        if let Err(e) = self.write_temp(&temp_path, &bytes).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(self.unavailable("write", e));
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            warn!(
                "Failed to move {} into place: {}",
                temp_path.display(),
                e
            );
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(self.unavailable("replace", e));
        }

        debug!(
            "Saved {} questions to {} ({} bytes)",
            collection.len(),
            self.path.display(),
            bytes.len()
        );
        Ok(())
    }

    async fn ensure_initialized(&self) -> Result<(), StoreError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| self.unavailable("inspect", e))?;
        if exists {
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.unavailable("create parent directory of", e))?;
        }

        self.save(&Collection::new()).await?;
        info!("Initialized empty collection at {}", self.path.display());
        Ok(())
    }
}

//! File-based Snapshot Storage Adapter
//!
//! Stores the whole choice mapping in a single JSON or YAML file. Every save
//! rewrites the file through a temporary sibling and an atomic rename, so a
//! crash mid-write leaves the previous version intact.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::StorageFormat;
use crate::ports::{ChoiceMap, SnapshotStorage, StorageError};

use super::record::{from_document, to_document};

/// File-based storage for the choice mapping
#[derive(Debug, Clone)]
pub struct FileSnapshotStorage {
    path: PathBuf,
    format: StorageFormat,
}

impl FileSnapshotStorage {
    /// Create a file storage writing to `path`
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileSnapshotStorage::new("./data/choices.json", StorageFormat::Json);
    /// ```
    pub fn new<P: AsRef<Path>>(path: P, format: StorageFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    /// Sibling file the next snapshot is staged in before the rename
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Ensure the parent directory exists
    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(format!("Failed to create directory: {}", e))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SnapshotStorage for FileSnapshotStorage {
    async fn load(&self) -> Result<ChoiceMap, StorageError> {
        let document = match fs::read_to_string(&self.path).await {
            Ok(document) => document,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No choice file yet, starting empty");
                return Ok(ChoiceMap::new());
            }
            Err(e) => {
                return Err(StorageError::Io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if document.trim().is_empty() {
            tracing::warn!(path = %self.path.display(), "Choice file is empty, starting empty");
            return Ok(ChoiceMap::new());
        }

        let choices = from_document(&document, self.format)?;
        tracing::debug!("Loaded {} choices from {}", choices.len(), self.path.display());
        Ok(choices)
    }

    async fn save(&self, choices: &ChoiceMap) -> Result<(), StorageError> {
        let document = to_document(choices, self.format)?;

        self.ensure_parent_dir().await?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, document)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to write temporary file: {}", e)))?;

        // Rename to final location (atomic operation on Unix)
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to rename file: {}", e)))?;

        tracing::debug!("Saved {} choices to {}", choices.len(), self.path.display());
        Ok(())
    }
}

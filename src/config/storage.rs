//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where and how choices are persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// File holding the serialized choice mapping
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Serialization format of that file
    #[serde(default)]
    pub format: StorageFormat,
}

/// On-disk format of the choice file
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    #[default]
    Json,
    Yaml,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.path"));
        }
        if self.path.is_dir() {
            return Err(ValidationError::StoragePathIsDirectory);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            format: StorageFormat::default(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("data/choices.json")
}

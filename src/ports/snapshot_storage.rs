//! Snapshot Storage Port - Interface for persisting the whole choice mapping.
//!
//! The store keeps every choice in memory and hands the complete mapping to
//! this port after each mutation. Implementations replace whatever was
//! stored before; there are no partial updates.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::choice::Choice;
use crate::domain::foundation::ChoiceId;

/// Every known choice, keyed and ordered by identifier.
pub type ChoiceMap = BTreeMap<ChoiceId, Choice>;

/// Errors that can occur during snapshot storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage IO error: {0}")]
    Io(String),

    #[error("Failed to serialize choices: {0}")]
    Serialization(String),

    #[error("Stored choices are corrupt: {0}")]
    Corrupt(String),
}

/// Port for loading and saving the complete choice mapping
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    /// Load every stored choice
    ///
    /// # Returns
    /// An empty mapping when nothing has been stored yet
    ///
    /// # Errors
    /// Returns `StorageError::Corrupt` if stored data cannot be read back
    /// into valid choices, `StorageError::Io` if it cannot be read at all
    async fn load(&self) -> Result<ChoiceMap, StorageError>;

    /// Replace the stored mapping with `choices`
    ///
    /// # Errors
    /// Returns `StorageError` if the mapping was not durably written
    async fn save(&self, choices: &ChoiceMap) -> Result<(), StorageError>;
}

//! In-Memory Snapshot Storage Adapter
//!
//! Keeps the last saved mapping in memory.
//! Useful for testing and development; can be told to fail saves.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{ChoiceMap, SnapshotStorage, StorageError};

/// In-memory storage for the choice mapping
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStorage {
    saved: Arc<RwLock<ChoiceMap>>,
    save_count: Arc<AtomicUsize>,
    fail_saves: Arc<AtomicBool>,
}

impl InMemorySnapshotStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds `choices`
    pub fn with_choices(choices: ChoiceMap) -> Self {
        Self {
            saved: Arc::new(RwLock::new(choices)),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// The most recently saved mapping
    pub async fn saved(&self) -> ChoiceMap {
        self.saved.read().await.clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SnapshotStorage for InMemorySnapshotStorage {
    async fn load(&self) -> Result<ChoiceMap, StorageError> {
        Ok(self.saved.read().await.clone())
    }

    async fn save(&self, choices: &ChoiceMap) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Io("Simulated save failure".to_string()));
        }
        *self.saved.write().await = choices.clone();
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::choice::Choice;
    use crate::domain::foundation::ChoiceId;

    fn one_choice() -> ChoiceMap {
        let choice = Choice::create(ChoiceId::new(), None, ["A", "B"]).unwrap();
        let mut map = ChoiceMap::new();
        map.insert(choice.id(), choice);
        map
    }

    #[tokio::test]
    async fn test_in_memory_starts_empty() {
        let storage = InMemorySnapshotStorage::new();
        assert!(storage.load().await.unwrap().is_empty());
        assert_eq!(storage.save_count(), 0);
    }

    #[tokio::test]
    async fn test_in_memory_save_and_load() {
        let storage = InMemorySnapshotStorage::new();
        let choices = one_choice();

        storage.save(&choices).await.unwrap();

        assert_eq!(storage.load().await.unwrap(), choices);
        assert_eq!(storage.save_count(), 1);
    }

    #[tokio::test]
    async fn test_in_memory_preloaded() {
        let choices = one_choice();
        let storage = InMemorySnapshotStorage::with_choices(choices.clone());
        assert_eq!(storage.load().await.unwrap(), choices);
    }

    #[tokio::test]
    async fn test_in_memory_simulated_failure_keeps_previous() {
        let storage = InMemorySnapshotStorage::new();
        let first = one_choice();
        storage.save(&first).await.unwrap();

        storage.set_fail_saves(true);
        let result = storage.save(&one_choice()).await;

        assert!(matches!(result, Err(StorageError::Io(_))));
        assert_eq!(storage.saved().await, first);
        assert_eq!(storage.save_count(), 1);
    }
}

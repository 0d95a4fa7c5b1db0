//! ChoiceStore - the process-wide choice mapping.
//!
//! One instance is built at startup and shared by every handler. All reads
//! and writes go through a single async mutex, and the mutex stays held
//! while the snapshot is written, so mutations are fully serialized: two
//! concurrent random resolutions can never both see a choice as unresolved.
//!
//! The write and the swap into memory run on their own task. A caller that
//! gives up (request timeout, client gone) stops waiting, but the commit
//! still finishes, so memory always matches the last snapshot written.

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::choice::{Choice, ChoiceError};
use crate::domain::foundation::ChoiceId;
use crate::ports::{ChoiceMap, SnapshotStorage, StorageError};

pub struct ChoiceStore {
    choices: Arc<Mutex<ChoiceMap>>,
    storage: Arc<dyn SnapshotStorage>,
}

impl ChoiceStore {
    /// Loads every stored choice.
    ///
    /// # Errors
    ///
    /// Fails if the storage cannot be read or holds corrupt data. Callers
    /// should refuse to serve rather than start empty.
    pub async fn load(storage: Arc<dyn SnapshotStorage>) -> Result<Self, StorageError> {
        let choices = storage.load().await?;
        tracing::info!("Choice store loaded with {} choices", choices.len());
        Ok(Self {
            choices: Arc::new(Mutex::new(choices)),
            storage,
        })
    }

    /// Returns a copy of the choice.
    pub async fn get(&self, id: ChoiceId) -> Result<Choice, ChoiceError> {
        self.choices
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(ChoiceError::NotFound(id))
    }

    /// Adds a new choice and persists the mapping.
    ///
    /// If the write fails the choice is not added and the error is returned.
    pub async fn insert(&self, choice: Choice) -> Result<(), ChoiceError> {
        let id = choice.id();
        let choices = Arc::clone(&self.choices).lock_owned().await;
        if choices.contains_key(&id) {
            return Err(ChoiceError::DuplicateId(id));
        }

        let mut next = (*choices).clone();
        next.insert(id, choice);
        self.commit(choices, next, id).await
    }

    /// Applies `mutation` to a choice under the store lock.
    ///
    /// The mutation runs on a copy:
    /// - if it fails, nothing changes and its error is returned;
    /// - if it leaves the choice as it was, nothing is written;
    /// - otherwise the mapping with the copy in place is persisted and
    ///   becomes live. A failed write keeps the original.
    ///
    /// Returns the choice as it stands afterwards, plus the mutation's output.
    pub async fn modify<T, F>(&self, id: ChoiceId, mutation: F) -> Result<(Choice, T), ChoiceError>
    where
        F: FnOnce(&mut Choice) -> Result<T, ChoiceError>,
    {
        let choices = Arc::clone(&self.choices).lock_owned().await;
        let current = choices.get(&id).ok_or(ChoiceError::NotFound(id))?;

        let mut updated = current.clone();
        let output = mutation(&mut updated)?;
        if &updated == current {
            return Ok((updated, output));
        }

        let mut next = (*choices).clone();
        next.insert(id, updated.clone());
        self.commit(choices, next, id).await?;
        Ok((updated, output))
    }

    /// Writes `next` durably, then makes it the live mapping.
    ///
    /// The guard moves into a spawned task together with `next`, so the
    /// write and the swap complete as one even if this future is dropped.
    /// The lock is released only once both are done. A failed write leaves
    /// memory as it was.
    async fn commit(
        &self,
        mut live: OwnedMutexGuard<ChoiceMap>,
        next: ChoiceMap,
        id: ChoiceId,
    ) -> Result<(), ChoiceError> {
        let storage = Arc::clone(&self.storage);
        let task = tokio::spawn(async move {
            if let Err(e) = storage.save(&next).await {
                tracing::error!(choice_id = %id, error = %e, "Failed to persist choices");
                return Err(e);
            }
            *live = next;
            tracing::debug!(choice_id = %id, "Choices persisted");
            Ok(())
        });

        match task.await {
            Ok(result) => result.map_err(ChoiceError::from),
            Err(e) => {
                tracing::error!(choice_id = %id, error = %e, "Commit task failed");
                Err(StorageError::Io(format!("commit task failed: {}", e)).into())
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.choices.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.choices.lock().await.is_empty()
    }

    /// Copy of the full mapping.
    pub async fn snapshot(&self) -> ChoiceMap {
        self.choices.lock().await.clone()
    }
}

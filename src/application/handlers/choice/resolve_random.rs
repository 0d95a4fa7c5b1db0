//! ResolveRandomHandler - lets chance pick, once.

use std::sync::Arc;

use crate::application::ChoiceStore;
use crate::domain::choice::{ChoiceError, ChoiceStatusView, ResolutionOutcome};
use crate::domain::foundation::ChoiceId;
use crate::ports::OptionPicker;

/// Command to resolve a choice at random.
#[derive(Debug, Clone)]
pub struct ResolveRandomCommand {
    pub choice_id: ChoiceId,
}

/// Result of a random resolution.
#[derive(Debug, Clone)]
pub struct ResolveRandomResult {
    pub view: ChoiceStatusView,
    pub outcome: ResolutionOutcome,
}

/// Handler for random resolution.
///
/// Only the first call on an unresolved choice draws; later calls return
/// the existing pick untouched.
pub struct ResolveRandomHandler {
    store: Arc<ChoiceStore>,
    picker: Arc<dyn OptionPicker>,
}

impl ResolveRandomHandler {
    pub fn new(store: Arc<ChoiceStore>, picker: Arc<dyn OptionPicker>) -> Self {
        Self { store, picker }
    }

    pub async fn handle(&self, cmd: ResolveRandomCommand) -> Result<ResolveRandomResult, ChoiceError> {
        let picker = self.picker.as_ref();
        let (choice, outcome) = self
            .store
            .modify(cmd.choice_id, |choice| choice.resolve_random(picker))
            .await?;

        if outcome == ResolutionOutcome::Picked {
            tracing::info!(
                choice_id = %cmd.choice_id,
                picked = choice.picked().unwrap_or_default(),
                "Choice resolved at random"
            );
        }

        Ok(ResolveRandomResult {
            view: choice.status_view(),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::SeededPicker;
    use crate::adapters::storage::InMemorySnapshotStorage;
    use crate::domain::choice::{Choice, ChoiceStatus};

    async fn setup(options: &[&str]) -> (ResolveRandomHandler, Arc<ChoiceStore>, ChoiceId) {
        let storage = InMemorySnapshotStorage::new();
        let store = Arc::new(ChoiceStore::load(Arc::new(storage)).await.unwrap());
        let choice = Choice::create(ChoiceId::new(), None, options).unwrap();
        let id = choice.id();
        store.insert(choice).await.unwrap();
        let handler = ResolveRandomHandler::new(store.clone(), Arc::new(SeededPicker::new(5)));
        (handler, store, id)
    }

    #[tokio::test]
    async fn first_call_picks_an_option() {
        let (handler, _, id) = setup(&["A", "B"]).await;

        let result = handler.handle(ResolveRandomCommand { choice_id: id }).await.unwrap();

        assert_eq!(result.outcome, ResolutionOutcome::Picked);
        let picked = result.view.picked.clone().unwrap();
        assert!(picked == "A" || picked == "B");
        assert_eq!(result.view.history, vec![picked]);
        assert_eq!(result.view.count, 1);
        assert_eq!(result.view.status, ChoiceStatus::Resolved);
    }

    #[tokio::test]
    async fn second_call_is_idempotent() {
        let (handler, _, id) = setup(&["A", "B", "C"]).await;

        let first = handler.handle(ResolveRandomCommand { choice_id: id }).await.unwrap();
        let second = handler.handle(ResolveRandomCommand { choice_id: id }).await.unwrap();

        assert_eq!(second.outcome, ResolutionOutcome::AlreadyPicked);
        assert_eq!(second.view.picked, first.view.picked);
        assert_eq!(second.view.count, 1);
    }

    #[tokio::test]
    async fn manual_pick_wins_over_later_random() {
        let (handler, store, id) = setup(&["A", "B"]).await;
        store.modify(id, |c| c.resolve_manual("B")).await.unwrap();

        let result = handler.handle(ResolveRandomCommand { choice_id: id }).await.unwrap();

        assert_eq!(result.outcome, ResolutionOutcome::AlreadyPicked);
        assert_eq!(result.view.picked.as_deref(), Some("B"));
        assert_eq!(result.view.count, 1);
    }

    #[tokio::test]
    async fn unknown_choice_is_not_found() {
        let (handler, _, _) = setup(&["A", "B"]).await;
        let missing = ChoiceId::new();

        let err = handler
            .handle(ResolveRandomCommand { choice_id: missing })
            .await
            .unwrap_err();

        assert_eq!(err, ChoiceError::NotFound(missing));
    }
}

//! ResolveManualHandler - records a pick made by a person.

use std::sync::Arc;

use crate::application::ChoiceStore;
use crate::domain::choice::{ChoiceError, ChoiceStatusView};
use crate::domain::foundation::ChoiceId;

/// Command to record a manual pick.
#[derive(Debug, Clone)]
pub struct ResolveManualCommand {
    pub choice_id: ChoiceId,
    pub selected: String,
}

/// Handler for manual resolution.
///
/// Not idempotent: every valid selection is appended to the history.
pub struct ResolveManualHandler {
    store: Arc<ChoiceStore>,
}

impl ResolveManualHandler {
    pub fn new(store: Arc<ChoiceStore>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// `ChoiceError::InvalidSelection` if `selected` is not one of the
    /// options; the choice is left exactly as it was.
    pub async fn handle(&self, cmd: ResolveManualCommand) -> Result<ChoiceStatusView, ChoiceError> {
        let result = self
            .store
            .modify(cmd.choice_id, |choice| choice.resolve_manual(&cmd.selected))
            .await;

        match result {
            Ok((choice, ())) => {
                tracing::info!(
                    choice_id = %cmd.choice_id,
                    picked = %cmd.selected,
                    count = choice.history().len(),
                    "Choice resolved manually"
                );
                Ok(choice.status_view())
            }
            Err(e @ ChoiceError::InvalidSelection { .. }) => {
                tracing::warn!(choice_id = %cmd.choice_id, selected = %cmd.selected, "Ignoring invalid selection");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}

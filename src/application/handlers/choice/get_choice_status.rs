//! GetChoiceStatusHandler - Query handler for polling a choice.

use std::sync::Arc;

use crate::application::ChoiceStore;
use crate::domain::choice::{ChoiceError, ChoiceStatusView};
use crate::domain::foundation::ChoiceId;

/// Query to get a choice's current status.
#[derive(Debug, Clone)]
pub struct GetChoiceStatusQuery {
    pub choice_id: ChoiceId,
}

/// Handler for status queries. Never mutates.
pub struct GetChoiceStatusHandler {
    store: Arc<ChoiceStore>,
}

impl GetChoiceStatusHandler {
    pub fn new(store: Arc<ChoiceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetChoiceStatusQuery) -> Result<ChoiceStatusView, ChoiceError> {
        let choice = self.store.get(query.choice_id).await?;
        Ok(choice.status_view())
    }
}

//! CreateChoiceHandler - Command handler for creating new choices.

use std::sync::Arc;

use crate::application::ChoiceStore;
use crate::domain::choice::{Choice, ChoiceError};
use crate::domain::foundation::ChoiceId;

/// Command to create a new choice.
#[derive(Debug, Clone)]
pub struct CreateChoiceCommand {
    pub title: Option<String>,
    pub options: Vec<String>,
}

/// Result of successful choice creation.
#[derive(Debug, Clone)]
pub struct CreateChoiceResult {
    pub choice: Choice,
}

/// Handler for creating choices.
pub struct CreateChoiceHandler {
    store: Arc<ChoiceStore>,
}

impl CreateChoiceHandler {
    pub fn new(store: Arc<ChoiceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateChoiceCommand) -> Result<CreateChoiceResult, ChoiceError> {
        // 1. Build the aggregate (validates options)
        let choice = Choice::create(ChoiceId::new(), cmd.title.as_deref(), &cmd.options)?;

        // 2. Persist
        self.store.insert(choice.clone()).await?;

        tracing::info!(
            choice_id = %choice.id(),
            options = choice.options().len(),
            "Choice created"
        );

        Ok(CreateChoiceResult { choice })
    }
}

//! Choice-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ChoiceId, ErrorCode, ValidationError};
use crate::ports::StorageError;

/// Errors raised by choice lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// Fewer than two usable options were submitted.
    #[error("At least 2 options are required, got {found}")]
    TooFewOptions { found: usize },

    /// A manual pick named something that is not one of the options.
    #[error("'{selected}' is not one of the options")]
    InvalidSelection { selected: String },

    /// No choice exists with this identifier.
    #[error("Choice not found: {0}")]
    NotFound(ChoiceId),

    /// A freshly generated identifier is already taken.
    #[error("Choice already exists: {0}")]
    DuplicateId(ChoiceId),

    /// The aggregate refused a state change.
    #[error("Invalid state: {0}")]
    InvalidState(#[from] ValidationError),

    /// Durable storage failed; the operation did not take effect.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ChoiceError {
    pub fn invalid_selection(selected: impl Into<String>) -> Self {
        ChoiceError::InvalidSelection {
            selected: selected.into(),
        }
    }

    /// True for errors caused by the caller's input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ChoiceError::TooFewOptions { .. } | ChoiceError::InvalidSelection { .. }
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ChoiceError::TooFewOptions { .. } => ErrorCode::ValidationFailed,
            ChoiceError::InvalidSelection { .. } => ErrorCode::InvalidSelection,
            ChoiceError::NotFound(_) => ErrorCode::ChoiceNotFound,
            ChoiceError::DuplicateId(_) => ErrorCode::DuplicateId,
            ChoiceError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            ChoiceError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier, error types, and the state machine trait
//! that form the vocabulary of the ToccaATE domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use ids::ChoiceId;
pub use state_machine::StateMachine;

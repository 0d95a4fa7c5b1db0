//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations over the shared [`ChoiceStore`].
//! Following CQRS, it separates command handlers (write) from query handlers (read).

mod choice_store;
pub mod handlers;

pub use choice_store::ChoiceStore;
pub use handlers::{
    CreateChoiceCommand, CreateChoiceHandler, CreateChoiceResult, GetChoiceStatusHandler,
    GetChoiceStatusQuery, ResolveManualCommand, ResolveManualHandler, ResolveRandomCommand,
    ResolveRandomHandler, ResolveRandomResult,
};

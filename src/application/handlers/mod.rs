//! Command and query handlers, grouped by aggregate.

pub mod choice;

pub use choice::{
    CreateChoiceCommand, CreateChoiceHandler, CreateChoiceResult, GetChoiceStatusHandler,
    GetChoiceStatusQuery, ResolveManualCommand, ResolveManualHandler, ResolveRandomCommand,
    ResolveRandomHandler, ResolveRandomResult,
};

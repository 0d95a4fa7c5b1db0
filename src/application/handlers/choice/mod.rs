//! Choice command and query handlers.

mod create_choice;
mod get_choice_status;
mod resolve_manual;
mod resolve_random;

pub use create_choice::{CreateChoiceCommand, CreateChoiceHandler, CreateChoiceResult};
pub use get_choice_status::{GetChoiceStatusHandler, GetChoiceStatusQuery};
pub use resolve_manual::{ResolveManualCommand, ResolveManualHandler};
pub use resolve_random::{ResolveRandomCommand, ResolveRandomHandler, ResolveRandomResult};

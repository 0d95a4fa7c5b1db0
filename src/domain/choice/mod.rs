//! Choice domain module.
//!
//! Covers the lifecycle of a choice: creation from user-submitted options,
//! random first-wins resolution, repeatable manual resolution, and the
//! history of every pick.

mod aggregate;
mod errors;
mod options;
mod status;
mod view;

pub use aggregate::{Choice, ResolutionOutcome, DEFAULT_TITLE};
pub use errors::ChoiceError;
pub use options::{ChoiceOptions, MAX_OPTIONS, MIN_OPTIONS};
pub use status::ChoiceStatus;
pub use view::ChoiceStatusView;

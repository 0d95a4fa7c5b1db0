//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machine trait)
//! - `choice` - Choice aggregate and its resolution lifecycle

pub mod choice;
pub mod foundation;

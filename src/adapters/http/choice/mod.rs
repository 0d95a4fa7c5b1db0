//! HTTP adapter for the choice module.
//!
//! This module exposes choice operations via REST endpoints.
//!
//! # Endpoints
//!
//! - `POST /choices` - Create a choice from a title and 2 to 4 options
//! - `GET /choices/{id}/status` - Poll the current pick and history
//! - `GET /choices/{id}/resolve` - Let chance pick (first call wins)
//! - `POST /choices/{id}/resolve` - Pick an option by hand
//! - `GET /choices/{id}/share` - Links for the creator and the picker
//! - `GET /health` - Liveness and choice count

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::ChoiceAppState;
pub use routes::choice_router;

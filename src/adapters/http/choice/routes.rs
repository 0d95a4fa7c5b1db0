//! Route configuration for choice endpoints.
//!
//! Configures Axum router with choice-related routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_choice, get_choice_status, get_share_links, health, resolve_manual, resolve_random,
    ChoiceAppState,
};

/// Creates the choice router with all endpoints.
///
/// Routes:
/// - `POST /choices` - Create a choice
/// - `GET /choices/:id/status` - Poll a choice
/// - `GET /choices/:id/resolve` - Random pick (first call only)
/// - `POST /choices/:id/resolve` - Manual pick
/// - `GET /choices/:id/share` - Links for creator and picker
/// - `GET /health` - Liveness
pub fn choice_router() -> Router<ChoiceAppState> {
    Router::new()
        .route("/choices", post(create_choice))
        .route("/choices/:id/status", get(get_choice_status))
        .route("/choices/:id/resolve", get(resolve_random).post(resolve_manual))
        .route("/choices/:id/share", get(get_share_links))
        .route("/health", get(health))
}

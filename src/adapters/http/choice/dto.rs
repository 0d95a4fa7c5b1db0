//! HTTP DTOs (Data Transfer Objects) for choice endpoints.
//!
//! These types define the JSON request/response structure for the choice API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::choice::{ChoiceStatusView, ResolutionOutcome};
use crate::domain::foundation::{ChoiceId, ErrorCode};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a new choice.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChoiceRequest {
    /// Optional title; blank falls back to the default.
    #[serde(default)]
    pub title: Option<String>,
    /// Candidate options as typed by the creator.
    #[serde(default)]
    pub options: Vec<String>,
}

/// Request to pick an option by hand.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveManualRequest {
    pub selected: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Polling view of a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceStatusResponse {
    pub title: String,
    pub options: Vec<String>,
    pub picked: Option<String>,
    pub history: Vec<String>,
    pub count: usize,
}

impl From<ChoiceStatusView> for ChoiceStatusResponse {
    fn from(view: ChoiceStatusView) -> Self {
        Self {
            title: view.title,
            options: view.options,
            picked: view.picked,
            history: view.history,
            count: view.count,
        }
    }
}

/// What a resolve request did, as reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOutcomeDto {
    Picked,
    AlreadyPicked,
    /// The selection was not one of the options; nothing changed.
    Ignored,
}

impl From<ResolutionOutcome> for ResolutionOutcomeDto {
    fn from(outcome: ResolutionOutcome) -> Self {
        match outcome {
            ResolutionOutcome::Picked => ResolutionOutcomeDto::Picked,
            ResolutionOutcome::AlreadyPicked => ResolutionOutcomeDto::AlreadyPicked,
        }
    }
}

/// Status fields plus the outcome of a resolve request.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionResponse {
    #[serde(flatten)]
    pub status: ChoiceStatusResponse,
    pub outcome: ResolutionOutcomeDto,
}

impl ResolutionResponse {
    pub fn new(view: ChoiceStatusView, outcome: ResolutionOutcomeDto) -> Self {
        Self {
            status: view.into(),
            outcome,
        }
    }
}

/// Absolute links for the two parties of a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinksResponse {
    pub choice_id: String,
    /// Resolve endpoint handed to whoever makes the pick.
    pub share_url: String,
    /// Status endpoint the creator polls.
    pub status_url: String,
}

impl ShareLinksResponse {
    /// Builds links under `base_url`, which must not end with a slash.
    pub fn new(base_url: &str, id: ChoiceId) -> Self {
        Self {
            choice_id: id.to_string(),
            share_url: format!("{}/choices/{}/resolve", base_url, id),
            status_url: format!("{}/choices/{}/status", base_url, id),
        }
    }
}

/// Response for command operations that create choices.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceCommandResponse {
    pub choice_id: String,
    /// Success message.
    pub message: String,
    pub links: ShareLinksResponse,
}

/// Health check body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of choices currently held.
    pub choices: usize,
}

/// Error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

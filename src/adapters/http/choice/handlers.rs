//! HTTP handlers for choice endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::choice::{
    CreateChoiceCommand, CreateChoiceHandler, GetChoiceStatusHandler, GetChoiceStatusQuery,
    ResolveManualCommand, ResolveManualHandler, ResolveRandomCommand, ResolveRandomHandler,
};
use crate::application::ChoiceStore;
use crate::domain::choice::ChoiceError;
use crate::domain::foundation::{ChoiceId, ErrorCode};
use crate::ports::OptionPicker;

use super::dto::{
    ChoiceCommandResponse, ChoiceStatusResponse, CreateChoiceRequest, ErrorResponse,
    HealthResponse, ResolutionOutcomeDto, ResolutionResponse, ResolveManualRequest,
    ShareLinksResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct ChoiceAppState {
    pub store: Arc<ChoiceStore>,
    pub picker: Arc<dyn OptionPicker>,
    /// Public origin used for share links, without a trailing slash.
    pub base_url: Arc<str>,
    /// Expose storage error details to clients.
    pub verbose_errors: bool,
}

impl ChoiceAppState {
    pub fn new(
        store: Arc<ChoiceStore>,
        picker: Arc<dyn OptionPicker>,
        base_url: &str,
        verbose_errors: bool,
    ) -> Self {
        Self {
            store,
            picker,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            verbose_errors,
        }
    }

    pub fn create_choice_handler(&self) -> CreateChoiceHandler {
        CreateChoiceHandler::new(self.store.clone())
    }

    pub fn resolve_random_handler(&self) -> ResolveRandomHandler {
        ResolveRandomHandler::new(self.store.clone(), self.picker.clone())
    }

    pub fn resolve_manual_handler(&self) -> ResolveManualHandler {
        ResolveManualHandler::new(self.store.clone())
    }

    pub fn get_choice_status_handler(&self) -> GetChoiceStatusHandler {
        GetChoiceStatusHandler::new(self.store.clone())
    }

    fn share_links(&self, id: ChoiceId) -> ShareLinksResponse {
        ShareLinksResponse::new(&self.base_url, id)
    }

    /// Converts a domain error, hiding storage details unless configured not to.
    fn api_error(&self, err: ChoiceError) -> ChoiceApiError {
        match err {
            ChoiceError::Storage(e) => {
                let detail = self.verbose_errors.then(|| e.to_string());
                ChoiceApiError::Storage(detail)
            }
            other => other.into(),
        }
    }
}

fn parse_choice_id(raw: &str) -> Result<ChoiceId, ChoiceApiError> {
    raw.parse()
        .map_err(|_| ChoiceApiError::BadRequest(format!("Invalid choice ID format: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /choices - Create a new choice
pub async fn create_choice(
    State(state): State<ChoiceAppState>,
    Json(request): Json<CreateChoiceRequest>,
) -> Result<impl IntoResponse, ChoiceApiError> {
    let handler = state.create_choice_handler();
    let cmd = CreateChoiceCommand {
        title: request.title,
        options: request.options,
    };

    let result = handler.handle(cmd).await.map_err(|e| state.api_error(e))?;
    let id = result.choice.id();

    let response = ChoiceCommandResponse {
        choice_id: id.to_string(),
        message: format!("Choice created with {} options", result.choice.options().len()),
        links: state.share_links(id),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /choices/:id/resolve - Let chance pick, unless someone already did
pub async fn resolve_random(
    State(state): State<ChoiceAppState>,
    Path(choice_id): Path<String>,
) -> Result<impl IntoResponse, ChoiceApiError> {
    let choice_id = parse_choice_id(&choice_id)?;

    let result = state
        .resolve_random_handler()
        .handle(ResolveRandomCommand { choice_id })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(ResolutionResponse::new(result.view, result.outcome.into())))
}

/// POST /choices/:id/resolve - Record a pick made by hand
///
/// A selection that is not one of the options is ignored and answered with
/// the unchanged status.
pub async fn resolve_manual(
    State(state): State<ChoiceAppState>,
    Path(choice_id): Path<String>,
    Json(request): Json<ResolveManualRequest>,
) -> Result<impl IntoResponse, ChoiceApiError> {
    let choice_id = parse_choice_id(&choice_id)?;

    let cmd = ResolveManualCommand {
        choice_id,
        selected: request.selected,
    };

    let response = match state.resolve_manual_handler().handle(cmd).await {
        Ok(view) => ResolutionResponse::new(view, ResolutionOutcomeDto::Picked),
        Err(ChoiceError::InvalidSelection { .. }) => {
            let view = state
                .get_choice_status_handler()
                .handle(GetChoiceStatusQuery { choice_id })
                .await
                .map_err(|e| state.api_error(e))?;
            ResolutionResponse::new(view, ResolutionOutcomeDto::Ignored)
        }
        Err(e) => return Err(state.api_error(e)),
    };

    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /choices/:id/status - Poll a choice
pub async fn get_choice_status(
    State(state): State<ChoiceAppState>,
    Path(choice_id): Path<String>,
) -> Result<impl IntoResponse, ChoiceApiError> {
    let choice_id = parse_choice_id(&choice_id)?;

    let view = state
        .get_choice_status_handler()
        .handle(GetChoiceStatusQuery { choice_id })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(ChoiceStatusResponse::from(view)))
}

/// GET /choices/:id/share - Links for both parties
pub async fn get_share_links(
    State(state): State<ChoiceAppState>,
    Path(choice_id): Path<String>,
) -> Result<impl IntoResponse, ChoiceApiError> {
    let choice_id = parse_choice_id(&choice_id)?;

    // Only hand out links for choices that exist
    state
        .store
        .get(choice_id)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(state.share_links(choice_id)))
}

/// GET /health
pub async fn health(State(state): State<ChoiceAppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        choices: state.store.len().await,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ChoiceApiError {
    BadRequest(String),
    Validation { code: ErrorCode, message: String },
    NotFound(String),
    /// Storage failed; carries the detail only when it may be shown.
    Storage(Option<String>),
    Internal(String),
}

impl From<ChoiceError> for ChoiceApiError {
    fn from(err: ChoiceError) -> Self {
        match err {
            e if e.is_validation() => ChoiceApiError::Validation {
                code: e.code(),
                message: e.to_string(),
            },
            ChoiceError::NotFound(id) => ChoiceApiError::NotFound(id.to_string()),
            ChoiceError::Storage(_) => ChoiceApiError::Storage(None),
            e => ChoiceApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ChoiceApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ChoiceApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ChoiceApiError::Validation { code, message } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(code, message))
            }
            ChoiceApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(ErrorCode::ChoiceNotFound, format!("Choice not found: {}", id)),
            ),
            ChoiceApiError::Storage(detail) => {
                let error = ErrorResponse::new(ErrorCode::StorageError, "Failed to save choices");
                let error = match detail {
                    Some(detail) => error.with_details(serde_json::Value::String(detail)),
                    None => error,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, error)
            }
            ChoiceApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}

//! HTTP adapters - REST API implementations.
//!
//! The choice module exposes its endpoints here; [`build_router`] wraps them
//! in the middleware stack the binary serves.

pub mod choice;

// Re-export key types for convenience
pub use choice::choice_router;
pub use choice::ChoiceAppState;

use axum::Router;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ServerConfig};

/// Builds the application router with its middleware.
///
/// Layers, outermost first: request id assignment, request id propagation,
/// timeout, CORS (when origins are configured), request tracing (when enabled).
pub fn build_router(state: ChoiceAppState, config: &AppConfig) -> Router {
    let mut router = choice_router().with_state(state);

    if config.features.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }

    if let Some(cors) = cors_layer(&config.server) {
        router = router.layer(cors);
    }

    router
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// CORS restricted to the configured origins, or `None` if there are none.
fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::SeededPicker;
    use crate::adapters::storage::InMemorySnapshotStorage;
    use crate::application::ChoiceStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn test_state() -> ChoiceAppState {
        let store = ChoiceStore::load(Arc::new(InMemorySnapshotStorage::new()))
            .await
            .unwrap();
        ChoiceAppState::new(
            Arc::new(store),
            Arc::new(SeededPicker::new(5)),
            "http://localhost:8080",
            false,
        )
    }

    fn health_request() -> Request<Body> {
        Request::builder()
            .uri("/health")
            .header("origin", "https://friends.example")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = build_router(test_state().await, &AppConfig::default());

        let response = app.oneshot(health_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn incoming_request_id_is_kept() {
        let app = build_router(test_state().await, &AppConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let mut config = AppConfig::default();
        config.server.cors_origins = Some("https://friends.example".to_string());
        let app = build_router(test_state().await, &config);

        let response = app.oneshot(health_request()).await.unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "https://friends.example"
        );
    }

    #[tokio::test]
    async fn no_cors_headers_without_origins() {
        let app = build_router(test_state().await, &AppConfig::default());

        let response = app.oneshot(health_request()).await.unwrap();

        assert!(!response.headers().contains_key("access-control-allow-origin"));
    }

    #[test]
    fn cors_layer_skipped_for_blank_origins() {
        let server = ServerConfig {
            cors_origins: Some(" , ".to_string()),
            ..ServerConfig::default()
        };
        assert!(cors_layer(&server).is_none());
    }
}

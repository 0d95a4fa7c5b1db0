//! ToccaATE server binary.
//!
//! Loads configuration, restores the choice store from its snapshot file and
//! serves the HTTP API until Ctrl-C.

use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use toccaate::adapters::http::{build_router, ChoiceAppState};
use toccaate::adapters::random::ThreadRngPicker;
use toccaate::adapters::storage::FileSnapshotStorage;
use toccaate::application::ChoiceStore;
use toccaate::config::{AppConfig, ValidationError};
use toccaate::ports::StorageError;

#[derive(Debug, Error)]
enum StartupError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("Failed to load choices: {0}")]
    Storage(#[from] StorageError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not up yet
            eprintln!("toccaate: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            ExitCode::FAILURE
        }
    }
}

/// Installs the global subscriber: JSON in production, human-readable otherwise.
///
/// `RUST_LOG` takes precedence over the configured log level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn run(config: AppConfig) -> Result<(), StartupError> {
    config.validate()?;

    let storage = FileSnapshotStorage::new(&config.storage.path, config.storage.format);
    let store = ChoiceStore::load(Arc::new(storage)).await?;

    let state = ChoiceAppState::new(
        Arc::new(store),
        Arc::new(ThreadRngPicker::new()),
        config.server.base_url(),
        config.features.verbose_errors,
    );
    let app = build_router(state, &config);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        storage = %config.storage.path.display(),
        "ToccaATE listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

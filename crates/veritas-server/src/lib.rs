//! Veritas Evaluation Service
//!
//! HTTP front end for the placeholder evaluation pipeline.
//! Each request is evaluated independently; the only shared state is the
//! immutable evaluator built from configuration.

#![warn(missing_docs)]

pub mod config;
pub mod evaluator;
pub mod handlers;
pub mod placeholder;

use config::ServerConfig;
use evaluator::Evaluator;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application state described by `config`
pub fn build_state(config: &ServerConfig) -> AppState {
    AppState {
        evaluator: Arc::new(Evaluator::from_config(config)),
    }
}

/// Serve the evaluation API on an already-bound listener
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), ServerError> {
    let app = create_router(state);

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}

/// Start the evaluation HTTP server
///
/// Validates configuration, builds the evaluator, binds and serves until
/// the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    info!("Starting Veritas evaluation service");
    info!("Bind address: {}", config.bind_addr());
    info!("Explorer base URL: {}", config.explorer_base_url);
    if config.sources.is_empty() {
        info!("Using built-in source catalog");
    } else {
        info!("Configured source rules: {}", config.sources.len());
    }

    let state = build_state(&config);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Evaluation service listening on {}", config.bind_addr());

    serve(listener, state).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state() {
        let state = build_state(&ServerConfig::default());
        let response = state
            .evaluator
            .evaluate(&veritas_domain::EvaluationRequest::new("Is Paris the capital of France?"))
            .unwrap();
        assert!(response.answer);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected_before_bind() {
        let config = ServerConfig {
            explorer_base_url: "nope".to_string(),
            ..ServerConfig::default()
        };
        let result = start_server(config).await;
        assert!(matches!(result, Err(ServerError::Config(_))));
    }
}

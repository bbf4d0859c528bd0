//! HTTP request handlers for the evaluation service.
//!
//! Implements the evaluation and health check endpoints using axum.

use crate::evaluator::Evaluator;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};
use veritas_domain::{EvaluationError, EvaluationRequest, EvaluationResponse};

/// Message returned for blank or missing questions
pub const QUESTION_REQUIRED: &str = "Question is required";

/// Message returned for every unexpected failure
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Evaluation pipeline
    pub evaluator: Arc<Evaluator>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "ok" while the process serves requests
    pub status: String,
    /// Server crate version
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// User-correctable input problem
    Validation(String),
    /// Anything else; the detail is logged, never returned
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => {
                warn!(reason = %msg, "Rejected evaluation request");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Internal(detail) => {
                error!(detail = %detail, "Evaluation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<EvaluationError> for AppError {
    fn from(e: EvaluationError) -> Self {
        match e {
            EvaluationError::EmptyQuestion => AppError::Validation(QUESTION_REQUIRED.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Internal(rejection.body_text())
    }
}

/// POST /api/evaluate - Evaluate a question
///
/// Body decoding failures are treated as internal errors; only a missing or
/// blank question is a validation error.
async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let Json(request) = payload?;
    let response = state.evaluator.evaluate(&request)?;
    Ok(Json(response))
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/evaluate", post(evaluate))
        .route("/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState {
        AppState {
            evaluator: Arc::new(Evaluator::from_config(&ServerConfig::default())),
        }
    }

    async fn read_error(response: Response) -> ErrorResponse {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_evaluate() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .method("POST")
            .uri("/api/evaluate")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"question": "Is water wet?"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_whitespace_question_is_rejected() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .method("POST")
            .uri("/api/evaluate")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"question": "   "}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_error(response).await.error, QUESTION_REQUIRED);
    }

    #[tokio::test]
    async fn test_malformed_body_is_internal_error() {
        let app = create_router(create_test_state());

        let request = Request::builder()
            .method("POST")
            .uri("/api/evaluate")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_error(response).await.error, INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_evaluation_error_mapping() {
        assert!(matches!(
            AppError::from(EvaluationError::EmptyQuestion),
            AppError::Validation(_)
        ));
        assert!(matches!(
            AppError::from(EvaluationError::Verdict("x".to_string())),
            AppError::Internal(_)
        ));
    }
}

//! Veritas HTTP client implementation.

use crate::error::SdkError;
use serde::Deserialize;
use veritas_domain::{EvaluationRequest, EvaluationResponse};

/// Health information reported by the service
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Liveness status
    pub status: String,
    /// Service version
    pub version: String,
}

/// Error body returned by the service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Veritas SDK client
#[derive(Debug, Clone)]
pub struct VeritasClient {
    base_url: String,
    http: reqwest::Client,
}

impl VeritasClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a question for evaluation
    pub async fn evaluate(&self, question: &str) -> Result<EvaluationResponse, SdkError> {
        let url = format!("{}/api/evaluate", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&EvaluationRequest::new(question))
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Query the service health endpoint
    pub async fn health(&self) -> Result<HealthStatus, SdkError> {
        let url = format!("{}/health", self.base_url);

        let response = self.http.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Turn non-2xx responses into `SdkError::Service`
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SdkError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(SdkError::Service {
        status,
        message: error_message(&text),
    })
}

/// Extract the `error` field of a JSON error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}

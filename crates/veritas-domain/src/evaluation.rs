//! Evaluation module - the request/response contract of `POST /api/evaluate`

use crate::traits::EvaluationError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Body of an evaluation request
///
/// A missing question, or one that is `null`, `false` or `0`, deserializes to
/// an empty string so that the service answers it with a validation error
/// rather than a decode error. Any other non-string value fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Free-text question to evaluate
    #[serde(default, deserialize_with = "falsy_as_empty")]
    pub question: String,
}

impl EvaluationRequest {
    /// Create a request for the given question
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    /// Return the question if it carries any non-whitespace text
    ///
    /// # Examples
    ///
    /// ```
    /// use veritas_domain::EvaluationRequest;
    ///
    /// assert!(EvaluationRequest::new("Is water wet?").validated_question().is_ok());
    /// assert!(EvaluationRequest::new("   ").validated_question().is_err());
    /// ```
    pub fn validated_question(&self) -> Result<&str, EvaluationError> {
        if self.question.trim().is_empty() {
            return Err(EvaluationError::EmptyQuestion);
        }
        Ok(&self.question)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuestion {
    Text(String),
    Flag(bool),
    Number(f64),
}

fn falsy_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawQuestion>::deserialize(deserializer) {
        Ok(None) | Ok(Some(RawQuestion::Flag(false))) => Ok(String::new()),
        Ok(Some(RawQuestion::Number(n))) if n == 0.0 => Ok(String::new()),
        Ok(Some(RawQuestion::Text(text))) => Ok(text),
        Ok(Some(_)) | Err(_) => Err(D::Error::custom("question must be a string")),
    }
}

/// A citation accompanying a verdict
///
/// No uniqueness constraint: the same source may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Human-readable title
    pub title: String,

    /// Link to the cited material
    pub url: String,
}

impl Source {
    /// Create a new source
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Lifecycle status of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationStatus {
    /// Submitted but not yet evaluated
    Pending,

    /// Verdict computed
    Evaluated,

    /// Evaluation could not be completed
    Failed,
}

impl EvaluationStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationStatus::Pending => "pending",
            EvaluationStatus::Evaluated => "evaluated",
            EvaluationStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mock ledger transaction and the explorer link that points at it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReference {
    /// `0x`-prefixed transaction hash
    pub tx_hash: String,

    /// Block explorer URL for `tx_hash`
    pub explorer_url: String,
}

impl TransactionReference {
    /// Build a reference whose explorer URL is `explorer_base` followed by the hash
    pub fn new(tx_hash: impl Into<String>, explorer_base: &str) -> Self {
        let tx_hash = tx_hash.into();
        let explorer_url = format!("{}{}", explorer_base, tx_hash);
        Self {
            tx_hash,
            explorer_url,
        }
    }
}

/// Structured verdict returned by the evaluation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    /// The question as submitted
    pub question: String,

    /// Citations supporting the verdict (may be empty)
    pub sources: Vec<Source>,

    /// The verdict
    pub answer: bool,

    /// 64-char hex content hash of `question`
    pub hash: String,

    /// Evaluation status
    pub status: EvaluationStatus,

    /// Mock transaction hash
    pub tx_hash: String,

    /// Explorer link for the mock transaction
    pub explorer_url: String,
}

impl EvaluationResponse {
    /// Whether `explorer_url` points at `tx_hash`
    pub fn explorer_matches_tx(&self) -> bool {
        !self.tx_hash.is_empty() && self.explorer_url.contains(&self.tx_hash)
    }
}

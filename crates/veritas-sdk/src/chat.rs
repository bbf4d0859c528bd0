//! Chat session state.
//!
//! A `ChatSession` owns the append-only message log, the pending input and
//! the loading flag. Submitting drives one evaluation through an
//! [`EvaluationBackend`] and appends the resulting messages in order.

use crate::client::VeritasClient;
use crate::error::SdkError;
use std::future::Future;
use veritas_domain::{ChatMessage, EvaluationResponse, MessageContent};

/// Inline error shown when an evaluation fails for any reason
pub const EVALUATION_FAILED: &str = "Error: Failed to evaluate question";

/// Anything that can answer an evaluation request
pub trait EvaluationBackend {
    /// Evaluate `question`
    fn evaluate(
        &self,
        question: &str,
    ) -> impl Future<Output = Result<EvaluationResponse, SdkError>> + Send;
}

impl EvaluationBackend for VeritasClient {
    async fn evaluate(&self, question: &str) -> Result<EvaluationResponse, SdkError> {
        VeritasClient::evaluate(self, question).await
    }
}

/// Ordered, append-only message log
#[derive(Debug, Default, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return it
    pub fn append(&mut self, content: MessageContent) -> &ChatMessage {
        self.messages.push(ChatMessage::new(content));
        &self.messages[self.messages.len() - 1]
    }

    /// All messages in append order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Messages appended at or after position `start`
    pub fn since(&self, start: usize) -> &[ChatMessage] {
        self.messages.get(start..).unwrap_or(&[])
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Result of a submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blank input or a request already in flight; nothing was appended
    Ignored,
    /// Response and verification messages were appended
    Evaluated,
    /// An inline error message was appended
    Failed(SdkError),
}

/// Client-side chat state driven by an evaluation backend
pub struct ChatSession<B> {
    backend: B,
    log: ChatLog,
    input: String,
    loading: bool,
}

impl<B: EvaluationBackend> ChatSession<B> {
    /// Create an empty session
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            log: ChatLog::new(),
            input: String::new(),
            loading: false,
        }
    }

    /// Replace the pending input
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Pending input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether an evaluation is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether `submit` would send a request
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// The message log
    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    /// Submit the pending input
    ///
    /// Appends the question, awaits the backend, then appends either the
    /// response followed by its verification link, or a single inline
    /// error. Loading and input are cleared whatever the outcome.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::Ignored;
        }

        let question = self.input.clone();
        self.log.append(MessageContent::Question(question.clone()));
        self.loading = true;

        let outcome = match self.backend.evaluate(&question).await {
            Ok(result) => {
                let explorer_url = result.explorer_url.clone();
                self.log.append(MessageContent::Response(result));
                self.log.append(MessageContent::Verification(explorer_url));
                SubmitOutcome::Evaluated
            }
            Err(e) => {
                self.log
                    .append(MessageContent::Error(EVALUATION_FAILED.to_string()));
                SubmitOutcome::Failed(e)
            }
        };

        self.loading = false;
        self.input.clear();
        outcome
    }

    /// Set the input to `question` and submit it
    pub async fn ask(&mut self, question: &str) -> SubmitOutcome {
        self.set_input(question);
        self.submit().await
    }
}

//! Veritas Rust SDK
//!
//! Client library for the Veritas evaluation service, plus the chat session
//! state used by interactive front ends.
//!
//! # Example
//!
//! ```no_run
//! use veritas_sdk::{ChatSession, VeritasClient};
//!
//! # async fn demo() {
//! let client = VeritasClient::new("http://localhost:3000");
//! let mut session = ChatSession::new(client);
//! session.ask("Is Berlin the capital of Germany?").await;
//! assert_eq!(session.log().len(), 3);
//! # }
//! ```

#![warn(missing_docs)]

mod chat;
mod client;
mod error;

pub use chat::{ChatLog, ChatSession, EvaluationBackend, SubmitOutcome, EVALUATION_FAILED};
pub use client::{HealthStatus, VeritasClient};
pub use error::SdkError;

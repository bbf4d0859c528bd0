//! Veritas Domain Layer
//!
//! This crate holds the request/response contract of the evaluation service,
//! the client-side chat message model, and the trait seams behind which the
//! placeholder evaluation logic lives.
//!
//! ## Key Concepts
//!
//! - **Verdict**: the boolean answer produced for a question
//! - **Source**: a citation `{title, url}` accompanying a verdict
//! - **Content hash**: a 64-char hex fingerprint of the question text
//! - **Transaction reference**: a mock ledger transaction and its explorer link
//! - **Chat message**: a transient entry in the client's append-only log
//!
//! ## Architecture
//!
//! - Only serialization and identifier crates as dependencies
//! - No I/O; transport lives in `veritas-server` and `veritas-sdk`
//! - Trait definitions for every replaceable piece of evaluation logic

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod evaluation;
pub mod hash;
pub mod message;
pub mod traits;

// Re-exports for convenience
pub use entity::{EvaluationEntity, EvaluationWithSources, QuestionEntity, SourceEntity};
pub use evaluation::{
    EvaluationRequest, EvaluationResponse, EvaluationStatus, Source, TransactionReference,
};
pub use hash::{content_hash, ContentHash};
pub use message::{ChatMessage, MessageContent, MessageId, MessageKind};
pub use traits::{EvaluationError, ReferenceGenerator, SourceCatalog, VerdictStrategy};

//! Trait definitions for the replaceable parts of evaluation
//!
//! The service composes one implementation of each trait. The shipped
//! implementations are placeholders; a real reasoning engine, citation index
//! or ledger client plugs in here without touching the wire contract.

use crate::evaluation::{Source, TransactionReference};
use thiserror::Error;

/// Errors raised while evaluating a question
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The question was missing or blank
    #[error("Question is required")]
    EmptyQuestion,

    /// The verdict strategy could not decide
    #[error("Verdict strategy failed: {0}")]
    Verdict(String),

    /// The reference generator could not produce a transaction
    #[error("Reference generation failed: {0}")]
    Reference(String),
}

/// Decides the boolean verdict for a question
pub trait VerdictStrategy: Send + Sync {
    /// Compute the verdict for `question`
    fn verdict(&self, question: &str) -> Result<bool, EvaluationError>;
}

/// Looks up citations for a question
pub trait SourceCatalog: Send + Sync {
    /// Sources relevant to `question`, possibly empty
    fn sources_for(&self, question: &str) -> Vec<Source>;
}

/// Produces the transaction reference recorded for an evaluation
pub trait ReferenceGenerator: Send + Sync {
    /// Generate a transaction hash together with its explorer URL
    fn generate(&self) -> Result<TransactionReference, EvaluationError>;
}

//! Evaluation pipeline.
//!
//! Validates the request, then combines the verdict strategy, source
//! catalog, content hash and reference generator into one response.

use crate::config::ServerConfig;
use crate::placeholder::{KeywordSourceCatalog, KeywordVerdictStrategy, RandomReferenceGenerator};
use std::sync::Arc;
use tracing::{debug, info};
use veritas_domain::{
    content_hash, EvaluationError, EvaluationRequest, EvaluationResponse, EvaluationStatus,
    ReferenceGenerator, SourceCatalog, VerdictStrategy,
};

/// Stateless evaluator shared by all requests
#[derive(Clone)]
pub struct Evaluator {
    verdicts: Arc<dyn VerdictStrategy>,
    sources: Arc<dyn SourceCatalog>,
    references: Arc<dyn ReferenceGenerator>,
}

impl Evaluator {
    /// Compose an evaluator from explicit strategies
    pub fn new(
        verdicts: Arc<dyn VerdictStrategy>,
        sources: Arc<dyn SourceCatalog>,
        references: Arc<dyn ReferenceGenerator>,
    ) -> Self {
        Self {
            verdicts,
            sources,
            references,
        }
    }

    /// Build the placeholder evaluator described by `config`
    pub fn from_config(config: &ServerConfig) -> Self {
        let sources = if config.sources.is_empty() {
            KeywordSourceCatalog::builtin()
        } else {
            KeywordSourceCatalog::from_rules(&config.sources)
        };
        debug!(keywords = sources.keyword_count(), "Source catalog ready");

        Self::new(
            Arc::new(KeywordVerdictStrategy::new()),
            Arc::new(sources),
            Arc::new(RandomReferenceGenerator::new(
                config.explorer_base_url.clone(),
            )),
        )
    }

    /// Evaluate a request
    ///
    /// Blank questions are rejected before any strategy runs.
    pub fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResponse, EvaluationError> {
        let question = request.validated_question()?;

        let hash = content_hash(question);
        let answer = self.verdicts.verdict(question)?;
        let sources = self.sources.sources_for(question);
        let reference = self.references.generate()?;

        debug!(tx_hash = %reference.tx_hash, "Generated transaction reference");
        info!(
            hash = %hash,
            answer,
            sources = sources.len(),
            "Evaluated question"
        );

        Ok(EvaluationResponse {
            question: question.to_string(),
            sources,
            answer,
            hash: hash.into_string(),
            status: EvaluationStatus::Evaluated,
            tx_hash: reference.tx_hash,
            explorer_url: reference.explorer_url,
        })
    }
}

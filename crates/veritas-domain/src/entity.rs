//! Persisted entity schema
//!
//! These types describe how an external store lays out questions,
//! evaluations and sources. Nothing in this workspace persists them.

use crate::evaluation::{EvaluationResponse, EvaluationStatus, Source};

/// A stored question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionEntity {
    /// Row identifier
    pub id: i64,
    /// Question text as submitted
    pub question_text: String,
    /// Content hash of `question_text`
    pub question_hash: String,
    /// Creation timestamp (Unix seconds)
    pub created_at: u64,
    /// Last update timestamp (Unix seconds)
    pub updated_at: u64,
}

/// A stored evaluation of a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationEntity {
    /// Row identifier
    pub id: i64,
    /// Owning question
    pub question_id: i64,
    /// Verdict
    pub answer: bool,
    /// Evaluation status
    pub status: EvaluationStatus,
    /// Transaction hash, once submitted
    pub tx_hash: Option<String>,
    /// Explorer URL, once submitted
    pub explorer_url: Option<String>,
    /// Creation timestamp (Unix seconds)
    pub created_at: u64,
    /// Last update timestamp (Unix seconds)
    pub updated_at: u64,
}

/// A stored citation attached to an evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntity {
    /// Row identifier
    pub id: i64,
    /// Owning evaluation
    pub evaluation_id: i64,
    /// Citation title
    pub title: String,
    /// Citation URL
    pub url: String,
    /// Creation timestamp (Unix seconds)
    pub created_at: u64,
}

/// An evaluation joined with its question and sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationWithSources {
    /// The evaluation row
    pub evaluation: EvaluationEntity,
    /// The question it answers
    pub question: QuestionEntity,
    /// Its citations
    pub sources: Vec<SourceEntity>,
}

impl From<SourceEntity> for Source {
    fn from(entity: SourceEntity) -> Self {
        Source {
            title: entity.title,
            url: entity.url,
        }
    }
}

impl From<EvaluationWithSources> for EvaluationResponse {
    fn from(record: EvaluationWithSources) -> Self {
        EvaluationResponse {
            question: record.question.question_text,
            sources: record.sources.into_iter().map(Source::from).collect(),
            answer: record.evaluation.answer,
            hash: record.question.question_hash,
            status: record.evaluation.status,
            tx_hash: record.evaluation.tx_hash.unwrap_or_default(),
            explorer_url: record.evaluation.explorer_url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_record_to_response() {
        let record = EvaluationWithSources {
            evaluation: EvaluationEntity {
                id: 7,
                question_id: 1,
                answer: true,
                status: EvaluationStatus::Pending,
                tx_hash: None,
                explorer_url: None,
                created_at: 10,
                updated_at: 10,
            },
            question: QuestionEntity {
                id: 1,
                question_text: "Is Paris the capital of France?".to_string(),
                question_hash: "f".repeat(64),
                created_at: 10,
                updated_at: 10,
            },
            sources: vec![SourceEntity {
                id: 3,
                evaluation_id: 7,
                title: "Paris Travel Guide".to_string(),
                url: "https://example.com/paris-guide".to_string(),
                created_at: 10,
            }],
        };

        let response = EvaluationResponse::from(record);
        assert_eq!(response.question, "Is Paris the capital of France?");
        assert_eq!(response.status, EvaluationStatus::Pending);
        assert_eq!(response.sources[0].title, "Paris Travel Guide");
        assert!(response.tx_hash.is_empty());
        assert!(!response.explorer_matches_tx());
    }
}

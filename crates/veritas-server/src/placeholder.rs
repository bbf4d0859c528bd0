//! Placeholder evaluation logic.
//!
//! Keyword matching for verdicts and sources, and random mock transaction
//! hashes. Randomised output is NOT reproducible across calls unless a
//! seeded instance is used.

use crate::config::SourceRule;
use std::sync::Mutex;
use veritas_domain::{
    EvaluationError, ReferenceGenerator, Source, SourceCatalog, TransactionReference,
    VerdictStrategy,
};

/// Number of random bytes in a mock transaction hash
const TX_HASH_BYTES: usize = 32;

/// Facts answered `true` without consulting the random fallback
const KNOWN_FACTS: [[&str; 3]; 3] = [
    ["berlin", "capital", "germany"],
    ["paris", "capital", "france"],
    ["london", "capital", "uk"],
];

/// Verdict by keyword patterns, random for anything unrecognised
pub struct KeywordVerdictStrategy {
    facts: Vec<Vec<String>>,
    rng: Mutex<fastrand::Rng>,
}

impl KeywordVerdictStrategy {
    /// Strategy with the built-in facts and an entropy-seeded fallback
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Strategy whose fallback verdicts replay from `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        let facts = KNOWN_FACTS
            .iter()
            .map(|terms| terms.iter().map(|t| t.to_string()).collect())
            .collect();

        Self {
            facts,
            rng: Mutex::new(rng),
        }
    }

    /// Whether all terms of some known fact appear in `question`
    pub fn matches_known_fact(&self, question: &str) -> bool {
        let lower = question.to_lowercase();
        self.facts
            .iter()
            .any(|terms| terms.iter().all(|term| lower.contains(term.as_str())))
    }
}

impl Default for KeywordVerdictStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl VerdictStrategy for KeywordVerdictStrategy {
    fn verdict(&self, question: &str) -> Result<bool, EvaluationError> {
        if self.matches_known_fact(question) {
            return Ok(true);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| EvaluationError::Verdict("random source poisoned".to_string()))?;
        Ok(rng.bool())
    }
}

/// Citations looked up by substring, first matching keyword wins
pub struct KeywordSourceCatalog {
    entries: Vec<(String, Vec<Source>)>,
}

impl KeywordSourceCatalog {
    /// Catalog with the built-in Berlin and Paris citations
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                (
                    "berlin".to_string(),
                    vec![Source::new(
                        "Berlin like a local",
                        "https://www.reuters.com/city-memo/berlin-like-local-2024-11-23/?utm_source=openai",
                    )],
                ),
                (
                    "paris".to_string(),
                    vec![Source::new(
                        "Paris Travel Guide",
                        "https://example.com/paris-guide",
                    )],
                ),
            ],
        }
    }

    /// Catalog built from configured rules
    ///
    /// Rules sharing a keyword are grouped; keyword priority follows the
    /// order of first appearance.
    pub fn from_rules(rules: &[SourceRule]) -> Self {
        let mut entries: Vec<(String, Vec<Source>)> = Vec::new();

        for rule in rules {
            let keyword = rule.keyword.trim().to_lowercase();
            let source = Source::new(rule.title.clone(), rule.url.clone());

            match entries.iter_mut().find(|(k, _)| *k == keyword) {
                Some((_, sources)) => sources.push(source),
                None => entries.push((keyword, vec![source])),
            }
        }

        Self { entries }
    }

    /// Number of distinct keywords
    pub fn keyword_count(&self) -> usize {
        self.entries.len()
    }
}

impl SourceCatalog for KeywordSourceCatalog {
    fn sources_for(&self, question: &str) -> Vec<Source> {
        let lower = question.to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| lower.contains(keyword.as_str()))
            .map(|(_, sources)| sources.clone())
            .unwrap_or_default()
    }
}

/// Mock transaction hashes drawn from a PRNG
///
/// Each evaluation draws once; the explorer URL always embeds the returned
/// hash.
pub struct RandomReferenceGenerator {
    explorer_base_url: String,
    rng: Mutex<fastrand::Rng>,
}

impl RandomReferenceGenerator {
    /// Generator with an entropy-seeded PRNG
    pub fn new(explorer_base_url: impl Into<String>) -> Self {
        Self {
            explorer_base_url: explorer_base_url.into(),
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Generator whose hashes replay from `seed`
    pub fn seeded(explorer_base_url: impl Into<String>, seed: u64) -> Self {
        Self {
            explorer_base_url: explorer_base_url.into(),
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl ReferenceGenerator for RandomReferenceGenerator {
    fn generate(&self) -> Result<TransactionReference, EvaluationError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| EvaluationError::Reference("random source poisoned".to_string()))?;

        let mut tx_hash = String::with_capacity(2 + TX_HASH_BYTES * 2);
        tx_hash.push_str("0x");
        for _ in 0..TX_HASH_BYTES {
            tx_hash.push_str(&format!("{:02x}", rng.u8(..)));
        }

        Ok(TransactionReference::new(tx_hash, &self.explorer_base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_facts_case_insensitive() {
        let strategy = KeywordVerdictStrategy::new();
        assert!(strategy.verdict("IS BERLIN THE CAPITAL OF GERMANY?").unwrap());
        assert!(strategy.verdict("paris, capital of france").unwrap());
        assert!(strategy.verdict("Is London the capital of the UK?").unwrap());
    }

    #[test]
    fn test_partial_fact_is_not_known() {
        let strategy = KeywordVerdictStrategy::new();
        assert!(!strategy.matches_known_fact("Is Berlin in Germany?"));
        assert!(!strategy.matches_known_fact("What is the capital of France?"));
    }

    #[test]
    fn test_seeded_fallback_replays() {
        let a = KeywordVerdictStrategy::seeded(42);
        let b = KeywordVerdictStrategy::seeded(42);
        for _ in 0..16 {
            assert_eq!(
                a.verdict("Is the moon made of cheese?").unwrap(),
                b.verdict("Is the moon made of cheese?").unwrap()
            );
        }
    }

    #[test]
    fn test_builtin_sources() {
        let catalog = KeywordSourceCatalog::builtin();
        let berlin = catalog.sources_for("Tell me about BERLIN");
        assert_eq!(berlin.len(), 1);
        assert_eq!(berlin[0].title, "Berlin like a local");

        let paris = catalog.sources_for("paris?");
        assert_eq!(paris[0].url, "https://example.com/paris-guide");

        assert!(catalog.sources_for("Is water wet?").is_empty());
    }

    #[test]
    fn test_first_keyword_wins() {
        let catalog = KeywordSourceCatalog::builtin();
        let sources = catalog.sources_for("Paris or Berlin?");
        assert_eq!(sources[0].title, "Berlin like a local");
    }

    #[test]
    fn test_catalog_from_rules_groups_keywords() {
        let rules = vec![
            SourceRule {
                keyword: "Rome".to_string(),
                title: "Rome in a day".to_string(),
                url: "https://example.com/rome".to_string(),
            },
            SourceRule {
                keyword: "madrid".to_string(),
                title: "Madrid".to_string(),
                url: "https://example.com/madrid".to_string(),
            },
            SourceRule {
                keyword: "rome".to_string(),
                title: "Roman history".to_string(),
                url: "https://example.com/rome-history".to_string(),
            },
        ];

        let catalog = KeywordSourceCatalog::from_rules(&rules);
        assert_eq!(catalog.keyword_count(), 2);
        assert_eq!(catalog.sources_for("is rome old?").len(), 2);
        assert_eq!(catalog.sources_for("MADRID").len(), 1);
    }

    #[test]
    fn test_reference_shape() {
        let generator = RandomReferenceGenerator::new("https://sepolia.etherscan.io/tx/");
        let reference = generator.generate().unwrap();

        assert!(reference.tx_hash.starts_with("0x"));
        assert_eq!(reference.tx_hash.len(), 66);
        assert!(reference.tx_hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(
            reference.explorer_url,
            format!("https://sepolia.etherscan.io/tx/{}", reference.tx_hash)
        );
    }

    #[test]
    fn test_seeded_references_replay() {
        let a = RandomReferenceGenerator::seeded("https://x/tx/", 7);
        let b = RandomReferenceGenerator::seeded("https://x/tx/", 7);
        assert_eq!(a.generate().unwrap(), b.generate().unwrap());
    }
}

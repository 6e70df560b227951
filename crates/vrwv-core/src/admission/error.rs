//! Why a URL was not admitted.

use thiserror::Error;

/// Rejection reasons. These are expected outcomes, not faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// Raw input was empty; normalization never ran.
    #[error("empty URL")]
    EmptyInput,
    /// Normalized URL matched no admission rule.
    #[error("no admission rule matched: {normalized}")]
    NoRuleMatched { normalized: String },
}

impl AdmissionError {
    /// Short machine-friendly label for logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            AdmissionError::EmptyInput => "empty-input",
            AdmissionError::NoRuleMatched { .. } => "no-rule-matched",
        }
    }
}

//! URL admission: decide whether a navigation target may be shown and
//! produce its canonical form.
//!
//! `raw → Normalizer → RuleRegistry → Accepted { canonical_url } | Rejected`
//!
//! The policy is immutable after construction and holds no interior
//! mutability, so one instance can be shared across threads freely.

mod error;
mod normalize;
mod rule;

use std::sync::OnceLock;

pub use error::AdmissionError;
pub use normalize::{NormalizationStep, Normalizer, PRESENTATION_EDIT, SCHEME_DEFAULT};
pub use rule::{AdmissionRule, RuleRegistry, PRESENTATION, VIDEO};

/// Outcome of one admission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionResult {
    Accepted { canonical_url: String, rule: String },
    Rejected(AdmissionError),
}

impl AdmissionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AdmissionResult::Accepted { .. })
    }

    pub fn canonical_url(&self) -> Option<&str> {
        match self {
            AdmissionResult::Accepted { canonical_url, .. } => Some(canonical_url.as_str()),
            AdmissionResult::Rejected(_) => None,
        }
    }

    /// Human-readable rejection reason; `None` when accepted.
    pub fn reason(&self) -> Option<String> {
        match self {
            AdmissionResult::Accepted { .. } => None,
            AdmissionResult::Rejected(e) => Some(e.to_string()),
        }
    }

    pub fn into_result(self) -> Result<String, AdmissionError> {
        match self {
            AdmissionResult::Accepted { canonical_url, .. } => Ok(canonical_url),
            AdmissionResult::Rejected(e) => Err(e),
        }
    }
}

/// Normalizer plus rule registry.
#[derive(Debug, Clone)]
pub struct AdmissionPolicy {
    normalizer: Normalizer,
    rules: RuleRegistry,
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self::new(Normalizer::default(), RuleRegistry::builtin())
    }
}

impl AdmissionPolicy {
    pub fn new(normalizer: Normalizer, rules: RuleRegistry) -> Self {
        Self { normalizer, rules }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Evaluates an already-normalized URL against the registry.
    pub fn evaluate(&self, normalized: &str) -> AdmissionResult {
        match self.rules.first_match(normalized) {
            Some(rule) => AdmissionResult::Accepted {
                canonical_url: normalized.to_string(),
                rule: rule.name().to_string(),
            },
            None => AdmissionResult::Rejected(AdmissionError::NoRuleMatched {
                normalized: normalized.to_string(),
            }),
        }
    }

    /// Empty check, then normalization, then evaluation. Never panics.
    pub fn normalize_and_admit(&self, raw: &str) -> AdmissionResult {
        if raw.is_empty() {
            tracing::debug!("admission rejected: empty input");
            return AdmissionResult::Rejected(AdmissionError::EmptyInput);
        }
        let normalized = self.normalize(raw);
        let result = self.evaluate(&normalized);
        match &result {
            AdmissionResult::Accepted { canonical_url, rule } => {
                tracing::debug!(%rule, url = %canonical_url, "admission accepted");
            }
            AdmissionResult::Rejected(e) => {
                tracing::debug!(kind = e.kind(), url = %normalized, "admission rejected");
            }
        }
        result
    }
}

/// Process-wide policy with the built-in rules and steps.
pub fn default_policy() -> &'static AdmissionPolicy {
    static POLICY: OnceLock<AdmissionPolicy> = OnceLock::new();
    POLICY.get_or_init(AdmissionPolicy::default)
}

/// Runs `raw` through the built-in policy.
///
/// # Examples
///
/// - `"youtube.com/watch?v=xyz789"` → accepted as `"https://youtube.com/watch?v=xyz789"`
/// - `"https://example.com"` → rejected, no rule matched
pub fn normalize_and_admit(raw: &str) -> AdmissionResult {
    default_policy().normalize_and_admit(raw)
}

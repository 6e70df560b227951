//! Ordered, fixed normalization pipeline applied before rule evaluation.
//!
//! Only the two steps below touch the input. No trimming, case folding or
//! percent-decoding happens anywhere, so admission outcomes depend on the
//! exact string the caller submitted.

use std::fmt;

const HTTP: &str = "http://";
const HTTPS: &str = "https://";
const PRESENTATION_PATH: &str = "docs.google.com/presentation";
const EDIT_SEGMENT: &str = "/edit";
const VIEW_SEGMENT: &str = "/view";

/// One deterministic rewrite: `transform` runs only when `condition` holds.
#[derive(Clone, Copy)]
pub struct NormalizationStep {
    pub name: &'static str,
    pub condition: fn(&str) -> bool,
    pub transform: fn(&str) -> String,
}

impl NormalizationStep {
    /// Returns the rewritten string, or `None` when the step does not apply.
    pub fn apply(&self, url: &str) -> Option<String> {
        (self.condition)(url).then(|| (self.transform)(url))
    }
}

impl fmt::Debug for NormalizationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizationStep")
            .field("name", &self.name)
            .finish()
    }
}

fn lacks_scheme(url: &str) -> bool {
    !url.starts_with(HTTP) && !url.starts_with(HTTPS)
}

fn prepend_https(url: &str) -> String {
    format!("{HTTPS}{url}")
}

fn is_presentation_view(url: &str) -> bool {
    url.contains(PRESENTATION_PATH) && !url.contains(EDIT_SEGMENT)
}

// Plain substring replace of every occurrence. Once any `/edit` exists the
// condition above is false, which keeps the step idempotent.
fn view_to_edit(url: &str) -> String {
    url.replace(VIEW_SEGMENT, EDIT_SEGMENT)
}

/// Scheme defaulting: prepend `https://` unless already `http://` or `https://`.
pub const SCHEME_DEFAULT: NormalizationStep = NormalizationStep {
    name: "scheme-default",
    condition: lacks_scheme,
    transform: prepend_https,
};

/// Presentation links open in edit mode: `/view` becomes `/edit`.
pub const PRESENTATION_EDIT: NormalizationStep = NormalizationStep {
    name: "presentation-edit",
    condition: is_presentation_view,
    transform: view_to_edit,
};

/// Fixed step sequence; later steps see the output of earlier ones.
#[derive(Debug, Clone)]
pub struct Normalizer {
    steps: Vec<NormalizationStep>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            steps: vec![SCHEME_DEFAULT, PRESENTATION_EDIT],
        }
    }
}

impl Normalizer {
    pub fn new(steps: Vec<NormalizationStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[NormalizationStep] {
        &self.steps
    }

    pub fn normalize(&self, raw: &str) -> String {
        let mut url = raw.to_string();
        for step in &self.steps {
            if let Some(next) = step.apply(&url) {
                tracing::trace!(step = step.name, from = %url, to = %next, "normalized");
                url = next;
            }
        }
        url
    }
}

//! Named admission rules and the ordered registry that holds them.

use regex::Regex;

/// Rule name for presentation decks.
pub const PRESENTATION: &str = "presentation";
/// Rule name for video pages.
pub const VIDEO: &str = "video";

const PRESENTATION_PATTERN: &str = r"^https://docs\.google\.com/presentation/d/[^/]+/.*$";
const VIDEO_PATTERN: &str = r"^https://(?:www\.)?youtube\.com/watch\?v=[^&]+.*$";

/// A named predicate over a URL string. Immutable once built.
#[derive(Debug, Clone)]
pub struct AdmissionRule {
    name: String,
    matcher: Regex,
}

impl AdmissionRule {
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            matcher: Regex::new(pattern)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    pub fn matches(&self, url: &str) -> bool {
        self.matcher.is_match(url)
    }
}

/// Ordered rule set; the first matching rule wins.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<AdmissionRule>,
}

impl RuleRegistry {
    pub fn new(rules: Vec<AdmissionRule>) -> Self {
        Self { rules }
    }

    /// The two built-in rules, presentation first.
    pub fn builtin() -> Self {
        // Patterns are compile-time constants exercised by the tests below.
        let presentation = AdmissionRule::new(PRESENTATION, PRESENTATION_PATTERN)
            .expect("presentation pattern is valid");
        let video = AdmissionRule::new(VIDEO, VIDEO_PATTERN).expect("video pattern is valid");
        Self::new(vec![presentation, video])
    }

    /// First rule (in registry order) that matches `url`.
    pub fn first_match(&self, url: &str) -> Option<&AdmissionRule> {
        self.rules.iter().find(|rule| rule.matches(url))
    }

    pub fn rules(&self) -> &[AdmissionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> AdmissionRule {
        RuleRegistry::builtin()
            .rules()
            .iter()
            .find(|r| r.name() == name)
            .cloned()
            .unwrap()
    }

    #[test]
    fn builtin_order() {
        let reg = RuleRegistry::builtin();
        let names: Vec<&str> = reg.rules().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec![PRESENTATION, VIDEO]);
    }

    #[test]
    fn presentation_requires_id_and_trailing_slash() {
        let r = rule(PRESENTATION);
        assert!(r.matches("https://docs.google.com/presentation/d/abc123/edit"));
        assert!(r.matches("https://docs.google.com/presentation/d/abc123/"));
        assert!(r.matches("https://docs.google.com/presentation/d/abc/edit#slide=id.p"));
        assert!(!r.matches("https://docs.google.com/presentation/"));
        assert!(!r.matches("https://docs.google.com/presentation/d/abc123"));
        assert!(!r.matches("https://docs.google.com/presentation/d//edit"));
    }

    #[test]
    fn presentation_is_https_only_and_host_exact() {
        let r = rule(PRESENTATION);
        assert!(!r.matches("http://docs.google.com/presentation/d/abc/edit"));
        assert!(!r.matches("https://docsXgoogle.com/presentation/d/abc/edit"));
        assert!(!r.matches("https://evil.com/https://docs.google.com/presentation/d/a/b"));
    }

    #[test]
    fn video_accepts_optional_www() {
        let r = rule(VIDEO);
        assert!(r.matches("https://youtube.com/watch?v=xyz789"));
        assert!(r.matches("https://www.youtube.com/watch?v=xyz789"));
        assert!(r.matches("https://www.youtube.com/watch?v=xyz789&t=42s"));
    }

    #[test]
    fn video_rejects_missing_or_empty_id() {
        let r = rule(VIDEO);
        assert!(!r.matches("https://youtube.com/watch?v="));
        assert!(!r.matches("https://youtube.com/watch?v=&t=1"));
        assert!(!r.matches("https://youtube.com/watch"));
        assert!(!r.matches("https://m.youtube.com/watch?v=abc"));
        assert!(!r.matches("http://youtube.com/watch?v=abc"));
    }

    #[test]
    fn first_match_follows_registry_order() {
        let a = AdmissionRule::new("a", "^https://").unwrap();
        let b = AdmissionRule::new("b", "^https://x").unwrap();
        let reg = RuleRegistry::new(vec![a, b]);
        assert_eq!(reg.first_match("https://x").map(|r| r.name()), Some("a"));
        assert!(reg.first_match("ftp://x").is_none());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(AdmissionRule::new("broken", "(").is_err());
    }
}

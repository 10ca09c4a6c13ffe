//! Repository name filtering.
//!
//! A [`PatternFilter`] decides which repositories of an owner are in scope.
//! Patterns use full-string match semantics: `repo(.*)` accepts `repo1` but
//! rejects `my-repo1`.

mod error;

pub use error::PatternError;

use regex::Regex;

/// Compiled repository name filter.
///
/// Read-only after construction; safe to share across threads and reuse
/// across discovery runs.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    source: Option<String>,
    regex: Option<Regex>,
}

impl PatternFilter {
    /// Compiles a filter from an optional pattern.
    ///
    /// `None` yields a filter that accepts every name.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Invalid`] if the pattern is not a valid
    /// regular expression.
    pub fn new(pattern: Option<&str>) -> Result<Self, PatternError> {
        match pattern {
            None => Ok(Self::any()),
            Some(pattern) => {
                let invalid = |source: regex::Error| PatternError::Invalid {
                    pattern: pattern.to_string(),
                    source,
                };

                // The raw pattern must compile on its own, otherwise an
                // unbalanced group could close the anchoring wrapper.
                Regex::new(pattern).map_err(invalid)?;
                let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)?;
                Ok(Self {
                    source: Some(pattern.to_string()),
                    regex: Some(regex),
                })
            }
        }
    }

    /// A filter that accepts every repository name.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Returns the pattern this filter was compiled from, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns true if `name` is in scope.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match &self.regex {
            None => true,
            Some(regex) => regex.is_match(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_pattern_matches_everything() {
        let filter = PatternFilter::new(None).unwrap();

        assert!(filter.matches("repo1"));
        assert!(filter.matches("other"));
        assert!(filter.matches(""));
        assert_eq!(filter.pattern(), None);
    }

    #[test]
    fn matches_full_name_only() {
        let filter = PatternFilter::new(Some("repo(.*)")).unwrap();

        assert!(filter.matches("repo1"));
        assert!(filter.matches("repo2"));
        assert!(filter.matches("repo"));
        assert!(!filter.matches("other"));
        assert!(!filter.matches("my-repo1"));
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let filter = PatternFilter::new(Some("api|web")).unwrap();

        assert!(filter.matches("api"));
        assert!(filter.matches("web"));
        assert!(!filter.matches("api-gateway"));
        assert!(!filter.matches("legacy-web"));
    }

    #[test]
    fn rejects_pattern_that_would_escape_anchors() {
        let result = PatternFilter::new(Some("repo)|(?:x"));

        assert!(matches!(result, Err(PatternError::Invalid { .. })));
    }

    #[test]
    fn keeps_pattern_source() {
        let filter = PatternFilter::new(Some("repo(.*)")).unwrap();
        assert_eq!(filter.pattern(), Some("repo(.*)"));
    }

    #[test]
    fn rejects_invalid_pattern() {
        let result = PatternFilter::new(Some("repo(.*"));

        match result {
            Err(PatternError::Invalid { pattern, .. }) => assert_eq!(pattern, "repo(.*"),
            other => panic!("expected invalid pattern error, got {other:?}"),
        }
    }
}

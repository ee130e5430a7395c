//! Query suggestion matching.
//!
//! A stateless, case-insensitive substring filter over a fixed phrase
//! list. No ranking or fuzzy matching; the canned list is assumed to be
//! distinct already.

use crate::seed::QUERY_SUGGESTIONS;

/// Matches typed query text against a fixed list of canned phrases.
#[derive(Clone, Debug)]
pub struct SuggestionMatcher {
    phrases: Vec<String>,
}

impl Default for SuggestionMatcher {
    fn default() -> Self {
        Self::new(QUERY_SUGGESTIONS.iter().map(|s| s.to_string()))
    }
}

impl SuggestionMatcher {
    /// Creates a matcher over the given phrases, kept in the given order.
    pub fn new(phrases: impl IntoIterator<Item = String>) -> Self {
        Self {
            phrases: phrases.into_iter().collect(),
        }
    }

    /// Returns the phrases whose lowercase form contains the lowercase
    /// query, in original list order.
    ///
    /// Empty query text returns no suggestions; they only appear once the
    /// user starts typing.
    pub fn matches(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.phrases
            .iter()
            .filter(|p| p.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

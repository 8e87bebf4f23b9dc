//! Quality-filter configuration.
//!
//! The `ClassifierConfig` struct carries the tunable parameters consumed by
//! the validation pipeline. It is supplied externally per invocation and is
//! immutable within a single pipeline run. All fields have documented
//! defaults so a partial JSON config (or none at all) still works.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default minimum word count for the word-count check.
const DEFAULT_MIN_WORD_COUNT: usize = 200;

/// Default trusted domains when no list is configured.
///
/// Historically this list lived as a module-level fallback inside the
/// validator; it is now an explicit config field so the coupling is visible.
const DEFAULT_TRUSTED_DOMAINS: &[&str] = &[
    "inquirer.net",
    "philstar.com",
    "rappler.com",
    "abs-cbn.com",
    "cnnphilippines.com",
    "gmanetwork.com",
    "mb.com.ph",
];

/// Default error-page phrases for the error-phrase check.
const DEFAULT_ERROR_PHRASES: &[&str] = &[
    "page not found",
    "404 error",
    "access denied",
    "forbidden",
    "this content is unavailable",
];

/// Default spam/gambling keywords for the spam-keyword check.
const DEFAULT_SPAM_KEYWORDS: &[&str] = &[
    "online casino",
    "jackpot winner",
    "betting bonus",
    "free spins",
    "viagra",
    "crypto giveaway",
];

/// Configuration for the quality filter and validation pipeline.
///
/// # Example
///
/// ```rust
/// use news_sieve::ClassifierConfig;
///
/// // Use defaults
/// let config = ClassifierConfig::default();
/// assert_eq!(config.min_word_count, 200);
///
/// // Customize specific fields
/// let config = ClassifierConfig {
///     min_word_count: 300,
///     ..ClassifierConfig::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum number of whitespace-separated words an article body must
    /// contain to pass the word-count check.
    ///
    /// Default: `200`
    pub min_word_count: usize,

    /// Phrases indicating an error page ("page not found", etc.).
    /// Matched case-insensitively as substrings of the body.
    pub error_phrases: Vec<String>,

    /// Spam/gambling keywords. Matched case-insensitively as substrings
    /// of the body.
    pub spam_keywords: Vec<String>,

    /// Allow-listed source hosts. A URL passes the trusted-domain check when
    /// its host (with any leading `www.` stripped) contains one of these as
    /// a substring.
    pub trusted_domains: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_word_count: DEFAULT_MIN_WORD_COUNT,
            error_phrases: to_owned_vec(DEFAULT_ERROR_PHRASES),
            spam_keywords: to_owned_vec(DEFAULT_SPAM_KEYWORDS),
            trusted_domains: to_owned_vec(DEFAULT_TRUSTED_DOMAINS),
        }
    }
}

impl ClassifierConfig {
    /// Parse a configuration from a JSON string.
    ///
    /// Missing fields fall back to their defaults, so a partial config like
    /// `{"min_word_count": 150}` is valid.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::default();

        assert_eq!(config.min_word_count, 200);
        assert!(config.trusted_domains.contains(&"rappler.com".to_string()));
        assert!(config
            .error_phrases
            .contains(&"page not found".to_string()));
        assert!(!config.spam_keywords.is_empty());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = ClassifierConfig::from_json_str(r#"{"min_word_count": 150}"#).unwrap();

        assert_eq!(config.min_word_count, 150);
        // Untouched fields keep their defaults
        assert!(config.trusted_domains.contains(&"inquirer.net".to_string()));
    }

    #[test]
    fn test_full_json_overrides() {
        let json = r#"{
            "min_word_count": 50,
            "error_phrases": ["not found"],
            "spam_keywords": ["casino"],
            "trusted_domains": ["example.com"]
        }"#;
        let config = ClassifierConfig::from_json_str(json).unwrap();

        assert_eq!(config.min_word_count, 50);
        assert_eq!(config.error_phrases, vec!["not found"]);
        assert_eq!(config.spam_keywords, vec!["casino"]);
        assert_eq!(config.trusted_domains, vec!["example.com"]);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ClassifierConfig::from_json_str("{not json").is_err());
    }
}

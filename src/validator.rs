//! The Quality Gate ("Rubbish Filter").
//!
//! Six independent checks decide whether a page is real editorial content
//! worth storing: word count, trusted domain, error phrases, spam keywords,
//! title caps and stub page. All checks always run so the full picture is
//! available for observability, but the rejection reason is always the
//! first failing check in the fixed order below — a deliberate,
//! reproducible tie-break.

use url::Url;

use crate::config::ClassifierConfig;
use crate::record::{ValidationCheck, ValidationResult};

/// Titles with more than this many alphabetic characters are eligible for
/// the caps check.
const TITLE_CAPS_MIN_LETTERS: usize = 5;

/// Fraction of uppercase letters above which a title is flagged as spam.
const TITLE_CAPS_MAX_RATIO: f64 = 0.7;

/// Bodies shorter than this many characters (trimmed) are stub pages.
const STUB_MIN_CHARS: usize = 100;

/// Phrases marking a placeholder page with no real editorial content.
const STUB_INDICATORS: &[&str] = &[
    "this page is under construction",
    "more information coming soon",
    "content to be added",
    "placeholder",
    "article not found",
];

/// Run every quality check against an extracted article.
///
/// The check order is fixed: word_count, trusted_domain, error_phrases,
/// spam_keywords, title_caps, stub_page. `valid` is true iff all passed;
/// the first failing check's message is the reason reported to callers.
#[must_use]
pub fn validate(body: &str, url: &str, title: &str, config: &ClassifierConfig) -> ValidationResult {
    let (word_count_check, word_count) = check_word_count(body, config.min_word_count);

    let checks = vec![
        word_count_check,
        check_trusted_domain(url, &config.trusted_domains),
        check_error_phrases(body, &config.error_phrases),
        check_spam_keywords(body, &config.spam_keywords),
        check_title_caps(title),
        check_stub_page(body),
    ];

    let valid = checks.iter().all(|check| check.passed);

    ValidationResult {
        checks,
        word_count,
        valid,
    }
}

/// Fails on empty content or a whitespace-split word count below the
/// configured minimum.
fn check_word_count(body: &str, min_word_count: usize) -> (ValidationCheck, usize) {
    if body.is_empty() {
        return (failed("word_count", "Empty content".to_string()), 0);
    }

    let word_count = body.split_whitespace().count();

    let check = if word_count < min_word_count {
        failed(
            "word_count",
            format!("Word count ({word_count}) below minimum ({min_word_count})"),
        )
    } else {
        passed(
            "word_count",
            format!("Word count ({word_count}) meets minimum"),
        )
    };

    (check, word_count)
}

/// Fails unless the URL's host (with any leading `www.` stripped) contains
/// one of the trusted domains as a substring. A malformed URL fails with a
/// structured parse message rather than propagating an error.
fn check_trusted_domain(url: &str, trusted_domains: &[String]) -> ValidationCheck {
    let host = match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_lowercase(),
            None => {
                return failed("trusted_domain", "Invalid URL format: no host".to_string());
            }
        },
        Err(err) => {
            return failed("trusted_domain", format!("Invalid URL format: {err}"));
        }
    };

    let domain = host.strip_prefix("www.").unwrap_or(&host);

    if trusted_domains.iter().any(|trusted| domain.contains(trusted.as_str())) {
        passed("trusted_domain", format!("Domain {domain} is trusted"))
    } else {
        failed(
            "trusted_domain",
            format!("Domain {domain} not in trusted sources"),
        )
    }
}

/// Fails if the body contains any configured error-page phrase.
fn check_error_phrases(body: &str, error_phrases: &[String]) -> ValidationCheck {
    let body_lower = body.to_lowercase();

    for phrase in error_phrases {
        if body_lower.contains(&phrase.to_lowercase()) {
            return failed("error_phrases", format!("Error phrase detected: \"{phrase}\""));
        }
    }

    passed("error_phrases", "No error phrases detected".to_string())
}

/// Fails if the body contains any configured spam/gambling keyword.
fn check_spam_keywords(body: &str, spam_keywords: &[String]) -> ValidationCheck {
    let body_lower = body.to_lowercase();

    for keyword in spam_keywords {
        if body_lower.contains(&keyword.to_lowercase()) {
            return failed("spam_keywords", format!("Spam keyword detected: \"{keyword}\""));
        }
    }

    passed("spam_keywords", "No spam keywords detected".to_string())
}

/// Fails if the title is mostly uppercase. Computed only over alphabetic
/// characters; empty or short titles always pass.
#[allow(clippy::cast_precision_loss)]
fn check_title_caps(title: &str) -> ValidationCheck {
    if title.is_empty() {
        return passed("title_caps", "No title to check".to_string());
    }

    let letters = title.chars().filter(|c| c.is_alphabetic()).count();
    let uppercase = title.chars().filter(|c| c.is_uppercase()).count();

    if letters > TITLE_CAPS_MIN_LETTERS && uppercase as f64 / letters as f64 > TITLE_CAPS_MAX_RATIO {
        failed(
            "title_caps",
            "Title is mostly uppercase (potential spam)".to_string(),
        )
    } else {
        passed("title_caps", "Title format is acceptable".to_string())
    }
}

/// Fails on very short bodies or bodies containing a stub-page indicator.
fn check_stub_page(body: &str) -> ValidationCheck {
    if body.trim().chars().count() < STUB_MIN_CHARS {
        return failed("stub_page", "Content too short (likely stub page)".to_string());
    }

    let body_lower = body.to_lowercase();
    for indicator in STUB_INDICATORS {
        if body_lower.contains(indicator) {
            return failed("stub_page", format!("Stub page indicator: \"{indicator}\""));
        }
    }

    passed(
        "stub_page",
        "Page appears to have substantial content".to_string(),
    )
}

fn passed(name: &'static str, message: String) -> ValidationCheck {
    ValidationCheck {
        name,
        passed: true,
        message,
    }
}

fn failed(name: &'static str, message: String) -> ValidationCheck {
    ValidationCheck {
        name,
        passed: false,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClassifierConfig {
        ClassifierConfig {
            min_word_count: 10,
            ..ClassifierConfig::default()
        }
    }

    fn clean_body(words: usize) -> String {
        std::iter::repeat("substantive")
            .take(words)
            .collect::<Vec<_>>()
            .join(" ")
    }

    const TRUSTED_URL: &str = "https://www.rappler.com/nation/some-article";

    #[test]
    fn test_clean_article_passes_all_checks() {
        let body = clean_body(50);
        let result = validate(&body, TRUSTED_URL, "Mixed Case Title", &config());

        assert!(result.valid);
        assert_eq!(result.word_count, 50);
        assert!(result.reason().is_none());
        assert_eq!(result.checks.len(), 6);
        assert!(result.checks.iter().all(|check| check.passed));
    }

    #[test]
    fn test_empty_body_fails_word_count() {
        let result = validate("", TRUSTED_URL, "Title", &config());

        assert!(!result.valid);
        assert_eq!(result.word_count, 0);
        assert_eq!(result.reason(), Some("Empty content"));
    }

    #[test]
    fn test_low_word_count_message_includes_counts() {
        let result = validate("only three words", TRUSTED_URL, "Title", &config());

        assert!(!result.valid);
        assert_eq!(result.word_count, 3);
        assert_eq!(result.reason(), Some("Word count (3) below minimum (10)"));
    }

    #[test]
    fn test_untrusted_domain_fails_even_with_clean_content() {
        let body = clean_body(50);
        let result = validate(&body, "https://sketchy.example/post", "Title Here", &config());

        assert!(!result.valid);
        assert!(result.reason().unwrap().contains("not in trusted sources"));
    }

    #[test]
    fn test_www_prefix_is_stripped_before_matching() {
        let body = clean_body(50);
        let result = validate(&body, "https://www.inquirer.net/story", "Title Here", &config());
        assert!(result.valid);
    }

    #[test]
    fn test_malformed_url_fails_with_structured_message() {
        let body = clean_body(50);
        let result = validate(&body, "not a url", "Title Here", &config());

        assert!(!result.valid);
        assert!(result.reason().unwrap().starts_with("Invalid URL format"));
    }

    #[test]
    fn test_error_phrase_detected_case_insensitively() {
        let body = format!("{} Page Not Found {}", clean_body(30), clean_body(30));
        let result = validate(&body, TRUSTED_URL, "Title Here", &config());

        assert!(!result.valid);
        assert_eq!(result.reason(), Some("Error phrase detected: \"page not found\""));
    }

    #[test]
    fn test_spam_keyword_detected() {
        let body = format!("{} visit our online casino today {}", clean_body(30), clean_body(30));
        let result = validate(&body, TRUSTED_URL, "Title Here", &config());

        assert!(!result.valid);
        assert_eq!(result.reason(), Some("Spam keyword detected: \"online casino\""));
    }

    #[test]
    fn test_all_caps_title_fails() {
        let body = clean_body(50);
        let result = validate(&body, TRUSTED_URL, "BREAKING NEWS TODAY", &config());

        assert!(!result.valid);
        assert_eq!(result.reason(), Some("Title is mostly uppercase (potential spam)"));
    }

    #[test]
    fn test_mixed_case_title_passes() {
        let body = clean_body(50);
        let result = validate(&body, TRUSTED_URL, "Breaking News Today", &config());
        assert!(result.valid);
    }

    #[test]
    fn test_short_all_caps_title_passes() {
        // "AI" has only 2 alphabetic characters - too few to trigger the rule
        let body = clean_body(50);
        let result = validate(&body, TRUSTED_URL, "AI", &config());
        assert!(result.valid);
    }

    #[test]
    fn test_empty_title_passes_caps_check() {
        let body = clean_body(50);
        let result = validate(&body, TRUSTED_URL, "", &config());
        assert!(result.valid);
    }

    #[test]
    fn test_stub_indicator_detected() {
        let body = format!("{} this page is under construction {}", clean_body(30), clean_body(30));
        let result = validate(&body, TRUSTED_URL, "Title Here", &config());

        assert!(!result.valid);
        assert_eq!(
            result.reason(),
            Some("Stub page indicator: \"this page is under construction\"")
        );
    }

    #[test]
    fn test_check_order_word_count_wins_over_spam() {
        // Body fails both word_count and spam_keywords; word_count is
        // first in the fixed order so it must be the reported reason.
        let result = validate("online casino", TRUSTED_URL, "Title", &config());

        assert!(!result.valid);
        assert!(result.reason().unwrap().starts_with("Word count"));

        // Both failures are still visible in the full check list
        let spam = result.checks.iter().find(|c| c.name == "spam_keywords").unwrap();
        assert!(!spam.passed);
    }

    #[test]
    fn test_all_checks_run_even_after_failure() {
        let result = validate("", "not a url", "BREAKING NEWS TODAY", &config());

        assert_eq!(result.checks.len(), 6);
        let failing: Vec<&str> = result
            .checks
            .iter()
            .filter(|check| !check.passed)
            .map(|check| check.name)
            .collect();
        assert_eq!(failing, vec!["word_count", "trusted_domain", "title_caps", "stub_page"]);
    }
}

//! Pipeline orchestration.
//!
//! Sequences extraction, categorization and validation over a single
//! document and assembles the final record. The whole pipeline is a pure
//! function of (url, document, config): no step blocks on I/O, no state
//! survives between calls, and concurrent invocations need no locking.

use chrono::Utc;
use dom_query::Document;
use tracing::debug;
use url::Url;

use crate::category;
use crate::config::ClassifierConfig;
use crate::extractor;
use crate::record::{Outcome, Rejection, ValidatedArticle};
use crate::validator;

/// Maximum snippet length in characters.
const SNIPPET_MAX_CHARS: usize = 300;

/// Process one document end to end.
///
/// Steps, strictly sequential:
/// 1. Extract fields (never fails; missing fields get defaults).
/// 2. Categorize: the source-path hint wins when present, otherwise the
///    keyword categorizer runs on title + body.
/// 3. Validate through the quality gate.
/// 4. Invalid pages become a [`Rejection`] carrying the failing check's
///    message and the title; extracted fields are discarded.
/// 5. Valid pages become a [`ValidatedArticle`] with snippet, category,
///    word count and the full validation result attached.
#[must_use]
pub fn process(url: &str, doc: &Document, config: &ClassifierConfig) -> Outcome {
    let fields = extractor::extract(doc);

    let category = category::categorize_from_source(url, doc)
        .unwrap_or_else(|| category::categorize(&fields.title, &fields.body).to_string());

    let validation = validator::validate(&fields.body, url, &fields.title, config);

    if !validation.valid {
        let reason = validation
            .reason()
            .unwrap_or("Validation failed")
            .to_string();
        debug!(url, title = %fields.title, %reason, "article rejected");
        return Outcome::Rejected(Rejection {
            url: url.to_string(),
            title: fields.title,
            reason,
        });
    }

    let article = ValidatedArticle {
        snippet: make_snippet(&fields.body),
        title: fields.title,
        body: fields.body,
        author: fields.author,
        url: url.to_string(),
        source_domain: host_of(url),
        category,
        published_at: fields.published_at.unwrap_or_else(Utc::now),
        image_url: fields.image_url,
        word_count: validation.word_count,
        validation,
    };

    debug!(
        url,
        category = %article.category,
        words = article.word_count,
        "article accepted"
    );
    Outcome::Accepted(Box::new(article))
}

/// Derive the lead-in snippet: the first 300 characters of the body,
/// trimmed back to the last whitespace boundary before the cutoff, with a
/// trailing ellipsis when truncation occurred. Bodies of 300 characters or
/// fewer are returned unchanged.
#[must_use]
pub fn make_snippet(body: &str) -> String {
    if body.chars().count() <= SNIPPET_MAX_CHARS {
        return body.to_string();
    }

    let cut: String = body.chars().take(SNIPPET_MAX_CHARS).collect();
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(pos) => &cut[..pos],
        None => cut.as_str(),
    };

    format!("{trimmed}...")
}

/// Host of the originating URL, or empty string when unparseable.
fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_short_body_unchanged() {
        let body = "a".repeat(250);
        assert_eq!(make_snippet(&body), body);
        assert!(!make_snippet(&body).ends_with("..."));
    }

    #[test]
    fn test_snippet_exactly_300_unchanged() {
        let body = "b".repeat(300);
        assert_eq!(make_snippet(&body), body);
    }

    #[test]
    fn test_snippet_truncates_at_last_space() {
        // 310-character body with its last space at position 295: the
        // snippet ends at that boundary plus the ellipsis marker.
        let mut body = "c".repeat(295);
        body.push(' ');
        body.push_str(&"d".repeat(14));
        assert_eq!(body.chars().count(), 310);

        let snippet = make_snippet(&body);
        assert_eq!(snippet, format!("{}...", "c".repeat(295)));
    }

    #[test]
    fn test_snippet_without_whitespace_hard_cuts() {
        let body = "e".repeat(400);
        let snippet = make_snippet(&body);
        assert_eq!(snippet, format!("{}...", "e".repeat(300)));
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("https://www.rappler.com/nation/story"), "www.rappler.com");
        assert_eq!(host_of("garbage"), "");
    }
}

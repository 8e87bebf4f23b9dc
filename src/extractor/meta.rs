//! Title, author and image extraction.
//!
//! Each field walks its ordered selector list from most specific to least
//! specific and accepts the first candidate clearing the field's threshold.
//! Meta-tag candidates are read via their `content` attribute, everything
//! else via visible text.

use dom_query::{Document, Selection};

use crate::extractor::normalize_text;
use crate::selectors::{AUTHOR_SELECTORS, IMAGE_SELECTORS, TITLE_SELECTORS};

/// Minimum character count for a title candidate to be accepted.
const MIN_TITLE_CHARS: usize = 10;

/// Extract the article title.
///
/// Accepts the first candidate whose trimmed text exceeds 10 characters;
/// falls back to `"Untitled Article"`.
#[must_use]
pub fn extract_title(doc: &Document) -> String {
    for selector in TITLE_SELECTORS {
        for node in doc.select(selector).nodes() {
            let sel = Selection::from(*node);
            let text = normalize_text(&sel.text());
            if text.chars().count() > MIN_TITLE_CHARS {
                return text;
            }
        }
    }

    "Untitled Article".to_string()
}

/// Extract the byline author.
///
/// Accepts the first non-empty trimmed candidate; falls back to
/// `"Unknown Author"`. Common `By `/`by ` prefixes are stripped.
#[must_use]
pub fn extract_author(doc: &Document) -> String {
    for selector in AUTHOR_SELECTORS {
        for node in doc.select(selector).nodes() {
            let sel = Selection::from(*node);

            let raw = if selector.starts_with("meta") {
                sel.attr("content").map(|s| s.to_string()).unwrap_or_default()
            } else {
                sel.text().to_string()
            };

            let text = clean_byline(&raw);
            if !text.is_empty() {
                return text;
            }
        }
    }

    "Unknown Author".to_string()
}

/// Strip byline prefixes and normalize whitespace.
fn clean_byline(raw: &str) -> String {
    let text = normalize_text(raw);
    text.strip_prefix("By ")
        .or_else(|| text.strip_prefix("by "))
        .or_else(|| text.strip_prefix("Written by "))
        .unwrap_or(&text)
        .trim()
        .to_string()
}

/// Extract the lead image URL.
///
/// Checks the Open Graph image meta tag, then the Twitter-card image meta
/// tag, then the ordered image-element selectors. Returns the first present
/// `content`/`src` value.
#[must_use]
pub fn extract_image(doc: &Document) -> Option<String> {
    for selector in [
        "meta[property='og:image']",
        "meta[name='twitter:image']",
        "meta[name='twitter:image:src']",
    ] {
        if let Some(node) = doc.select(selector).nodes().first() {
            let meta = Selection::from(*node);
            if let Some(content) = meta.attr("content") {
                let content = content.trim().to_string();
                if !content.is_empty() {
                    return Some(content);
                }
            }
        }
    }

    for selector in IMAGE_SELECTORS {
        for node in doc.select(selector).nodes() {
            let img = Selection::from(*node);
            if let Some(src) = img.attr("src") {
                let src = src.trim().to_string();
                if !src.is_empty() {
                    return Some(src);
                }
            }
        }
    }

    None
}

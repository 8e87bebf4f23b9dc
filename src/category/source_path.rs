//! Source-path categorization.
//!
//! News sites commonly encode the section in the URL path
//! (`/sports/basketball/lakers-win-finals`), so the path is tried before
//! any keyword matching. The hint returned here is a free-form
//! site-specific label, not a taxonomy slug — mapping it into the taxonomy
//! is the storage layer's job.

use std::sync::LazyLock;

use dom_query::{Document, Selection};
use regex::Regex;
use url::Url;

/// Path segments that never name a section.
static SEGMENT_STOPWORDS: &[&str] = &[
    "article", "articles", "news", "story", "stories", "post", "posts",
    "read", "view", "en", "ph", "www", "amp", "mobile", "index",
];

/// Purely numeric segments (article IDs, date components like `2024`/`03`).
#[allow(clippy::expect_used)]
static NUMERIC_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// Hyphen-separated segments with more than this many words are article
/// slugs, not section names.
const MAX_SECTION_WORDS: usize = 4;

/// Derive a raw category hint from the URL path, falling back to section
/// meta tags. Returns `None` when neither source yields a usable label.
#[must_use]
pub fn categorize_from_source(url: &str, doc: &Document) -> Option<String> {
    if let Some(hint) = hint_from_path(url) {
        return Some(hint);
    }
    hint_from_meta(doc)
}

/// First path segment that survives the exclusion rules, lower-cased.
fn hint_from_path(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;

    parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .find(|segment| is_section_segment(segment))
        .map(str::to_lowercase)
}

fn is_section_segment(segment: &str) -> bool {
    if segment.len() < 3 || NUMERIC_SEGMENT.is_match(segment) {
        return false;
    }

    let lower = segment.to_lowercase();
    if SEGMENT_STOPWORDS.contains(&lower.as_str()) {
        return false;
    }

    // Long hyphenated segments are article slugs, not sections
    if segment.contains('-') && segment.split('-').count() > MAX_SECTION_WORDS {
        return false;
    }

    true
}

/// Read an `article:section` or `og:section` meta tag, lower-cased with
/// spaces replaced by hyphens. Requires a label longer than 2 characters.
fn hint_from_meta(doc: &Document) -> Option<String> {
    for selector in [
        "meta[property='article:section']",
        "meta[name='article:section']",
        "meta[property='og:section']",
    ] {
        if let Some(node) = doc.select(selector).nodes().first() {
            let meta = Selection::from(*node);
            if let Some(content) = meta.attr("content") {
                let label = content.trim().to_lowercase().replace(' ', "-");
                if label.len() > 2 {
                    return Some(label);
                }
            }
        }
    }

    None
}

//! Article categorization.
//!
//! Two strategies, tried in order by the pipeline: the source-path
//! categorizer derives a raw hint from the URL structure when the site's
//! convention is recognizable; otherwise the keyword categorizer classifies
//! the combined title and body text against the three-tier rule tables.

pub mod rules;
pub mod source_path;

pub use rules::DEFAULT_CATEGORY;
pub use source_path::categorize_from_source;

use rules::{CategoryRule, LEAF_RULES, PARENT_RULES, ROOT_RULES};

/// Classify an article into a taxonomy slug by keyword matching.
///
/// Deterministic, total function — always returns a slug. Title and body
/// are concatenated and lower-cased, then the leaf, parent and root tables
/// are evaluated in that order; within a table, rules run in definition
/// order and the first slug with any keyword appearing as a substring wins.
/// Falls back to [`DEFAULT_CATEGORY`] when nothing matches.
///
/// Matching is substring containment, not word-boundary matching, so short
/// keywords can over-match; this mirrors the rule tables' intent and keeps
/// the engine auditable.
#[must_use]
pub fn categorize(title: &str, body: &str) -> &'static str {
    let text = format!("{title} {body}").to_lowercase();

    for table in [LEAF_RULES, PARENT_RULES, ROOT_RULES] {
        if let Some(slug) = match_table(table, &text) {
            return slug;
        }
    }

    DEFAULT_CATEGORY
}

/// First slug in the table with any keyword contained in `text`.
fn match_table(table: &[CategoryRule], text: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|rule| rule.slug)
}

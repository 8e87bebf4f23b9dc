//! Output types for the processing pipeline.
//!
//! This module defines the structured records produced by field extraction
//! and validation: the always-populated [`ExtractedFields`], the per-check
//! [`ValidationCheck`]/[`ValidationResult`] pair, and the terminal
//! [`ValidatedArticle`]/[`Rejection`] outcomes.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fields extracted from an article page.
///
/// Extraction never fails; absence of a field yields its documented default
/// so the record is always fully populated even on poor-quality pages.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedFields {
    /// Article title. Default: `"Untitled Article"`.
    pub title: String,

    /// Article body text with noise subtrees (scripts, navigation, ads,
    /// comments) removed. Default: empty string.
    pub body: String,

    /// Byline author. Default: `"Unknown Author"`.
    pub author: String,

    /// Publication date, when a parseable candidate was found.
    pub published_at: Option<DateTime<Utc>>,

    /// Lead image URL, from Open Graph / Twitter-card meta tags or the
    /// first matching image element.
    pub image_url: Option<String>,
}

impl Default for ExtractedFields {
    fn default() -> Self {
        Self {
            title: "Untitled Article".to_string(),
            body: String::new(),
            author: "Unknown Author".to_string(),
            published_at: None,
            image_url: None,
        }
    }
}

/// Outcome of a single quality-gate check.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationCheck {
    /// Stable check identifier (`"word_count"`, `"trusted_domain"`, ...).
    pub name: &'static str,

    /// Whether the check passed.
    pub passed: bool,

    /// Human-readable result message; the first failing check's message
    /// becomes the rejection reason.
    pub message: String,
}

/// Aggregate result of the quality gate ("Rubbish Filter").
///
/// All checks are always run, even after a failure, so the full picture is
/// available for observability. `valid` is true iff every check passed.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// All checks in their fixed evaluation order.
    pub checks: Vec<ValidationCheck>,

    /// Whitespace-split word count of the body.
    pub word_count: usize,

    /// True iff every check passed.
    pub valid: bool,
}

impl ValidationResult {
    /// Message of the first failing check, if any.
    ///
    /// The check order is fixed (word_count first, stub_page last), making
    /// the reported reason deterministic no matter how many checks fail.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.checks
            .iter()
            .find(|check| !check.passed)
            .map(|check| check.message.as_str())
    }
}

/// The terminal success record: a validated, categorized article.
///
/// Constructed once per document by the pipeline, handed to the caller's
/// storage layer, then discarded. The pipeline holds no persistent state.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedArticle {
    /// Article title.
    pub title: String,

    /// Lead-in snippet: the first 300 characters of the body, trimmed back
    /// to the last whitespace boundary, with a trailing ellipsis when
    /// truncation occurred.
    pub snippet: String,

    /// Full article body text.
    pub body: String,

    /// Byline author.
    pub author: String,

    /// Originating URL.
    pub url: String,

    /// Host of the originating URL.
    pub source_domain: String,

    /// Category slug (taxonomy slug from the keyword categorizer, or the
    /// raw site-specific hint from the source-path categorizer).
    pub category: String,

    /// Publication date; falls back to processing time when the page
    /// carried no parseable date.
    pub published_at: DateTime<Utc>,

    /// Lead image URL, when present.
    pub image_url: Option<String>,

    /// Body word count.
    pub word_count: usize,

    /// The full validation result, kept for observability.
    pub validation: ValidationResult,
}

/// A labeled rejection the caller can log and skip.
#[derive(Debug, Clone, Serialize)]
pub struct Rejection {
    /// Originating URL.
    pub url: String,

    /// Extracted title, kept for diagnostic logging.
    pub title: String,

    /// Message of the first failing quality-gate check.
    pub reason: String,
}

/// Result of processing one document: either a validated article or a
/// rejection with the failing check's reason.
#[derive(Debug, Clone, Serialize)]
pub enum Outcome {
    /// The page passed every quality-gate check.
    Accepted(Box<ValidatedArticle>),

    /// The page failed a quality-gate check.
    Rejected(Rejection),
}

impl Outcome {
    /// True when the document was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

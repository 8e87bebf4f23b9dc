//! # news-sieve
//!
//! News article extraction, validation and categorization pipeline.
//!
//! This library takes raw news-article HTML and decides whether the page is
//! real editorial content worth storing. It extracts structured fields
//! (title, body, author, publish date, lead image) via ordered selector
//! lists with fallbacks, classifies the article into a category taxonomy,
//! and runs the "Rubbish Filter" — a six-check quality gate that rejects
//! error pages, stubs, spam and untrusted sources with a deterministic
//! reason.
//!
//! ## Quick Start
//!
//! ```rust
//! use news_sieve::{process_html, ClassifierConfig, Outcome};
//!
//! let html = r#"<html><head><title>Coming Soon</title></head>
//! <body><p>This page is under construction.</p></body></html>"#;
//!
//! let config = ClassifierConfig::default();
//! let outcome = process_html(html, "https://www.rappler.com/nation/stub", &config);
//!
//! match outcome {
//!     Outcome::Accepted(article) => println!("stored: {}", article.title),
//!     Outcome::Rejected(rejection) => println!("skipped: {}", rejection.reason),
//! }
//! ```
//!
//! ## Scope
//!
//! The pipeline is a pure function of (url, document, config): fetching,
//! feed discovery, scheduling and storage belong to the caller. Each call
//! is independent and holds no shared state, so documents can be processed
//! in parallel without locking.

mod error;

/// Pipeline orchestration.
pub mod pipeline;

/// Quality-filter configuration.
pub mod config;

/// Article categorization (source-path hints and keyword tables).
pub mod category;

/// Field extraction (title, body, author, date, image).
pub mod extractor;

/// Output record types.
pub mod record;

/// Ordered CSS selector tables used by the extractor.
pub mod selectors;

/// The six-check quality gate.
pub mod validator;

// Public API - re-exports
pub use config::ClassifierConfig;
pub use error::{Error, Result};
pub use pipeline::process;
pub use record::{
    ExtractedFields, Outcome, Rejection, ValidatedArticle, ValidationCheck, ValidationResult,
};

use dom_query::Document;

/// Process a raw HTML page end to end.
///
/// Parses the HTML, runs extraction, categorization and the quality gate,
/// and returns either a [`ValidatedArticle`] or a [`Rejection`] with the
/// first failing check's reason. See [`pipeline::process`] for the
/// document-level entry point.
#[must_use]
pub fn process_html(html: &str, url: &str, config: &ClassifierConfig) -> Outcome {
    let doc = Document::from(html);
    process(url, &doc, config)
}

//! Field extraction.
//!
//! Given a parsed document, pulls out title, body, author, publish date and
//! lead image using the ordered selector tables in [`crate::selectors`].
//! Extraction never fails: a field that cannot be found degrades to its
//! documented default instead of producing an error.

pub mod content;
pub mod date;
pub mod meta;

use dom_query::Document;

use crate::record::ExtractedFields;

/// Extract all article fields from a document.
///
/// Metadata fields (title, author, date, image) are read before noise
/// stripping since they rely on head/meta elements and page chrome that the
/// body pass removes. The body is extracted last, after scripts, navigation,
/// ads, share widgets and comment sections have been pruned from the tree.
#[must_use]
pub fn extract(doc: &Document) -> ExtractedFields {
    let title = meta::extract_title(doc);
    let author = meta::extract_author(doc);
    let image_url = meta::extract_image(doc);
    let published_at = date::extract_published_at(doc);

    content::strip_noise(doc);
    let body = content::extract_body(doc);

    ExtractedFields {
        title,
        body,
        author,
        published_at,
        image_url,
    }
}

/// Join text fragments with single spaces and strip surrounding whitespace.
pub(crate) fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_fully_populated_page() {
        let html = r#"<!DOCTYPE html>
        <html>
        <head>
            <title>Page Title | Site</title>
            <meta property="og:image" content="https://example.com/lead.jpg">
            <meta property="article:published_time" content="2024-03-15T08:30:00Z">
        </head>
        <body>
            <header><h1 class="entry-title">Senate Passes Landmark Budget Bill</h1></header>
            <span class="byline">Maria Santos</span>
            <div class="article-content"><p>PARAGRAPH_ONE_TEXT text that goes on long enough to
            clear the two hundred character body threshold for acceptance by the content
            extractor, which requires substantial text before it will settle on a candidate
            container rather than falling back to the page body.</p></div>
        </body>
        </html>"#;

        let doc = Document::from(html);
        let fields = extract(&doc);

        assert_eq!(fields.title, "Senate Passes Landmark Budget Bill");
        assert_eq!(fields.author, "Maria Santos");
        assert_eq!(fields.image_url, Some("https://example.com/lead.jpg".to_string()));
        assert!(fields.published_at.is_some());
        assert!(fields.body.contains("PARAGRAPH_ONE_TEXT"));
    }

    #[test]
    fn test_extract_empty_page_yields_defaults() {
        let doc = Document::from("<html><head></head><body></body></html>");
        let fields = extract(&doc);

        assert_eq!(fields.title, "Untitled Article");
        assert_eq!(fields.author, "Unknown Author");
        assert!(fields.body.is_empty());
        assert!(fields.published_at.is_none());
        assert!(fields.image_url.is_none());
    }

    #[test]
    fn test_normalize_text_joins_fragments() {
        assert_eq!(normalize_text("  one\n  two\tthree  "), "one two three");
        assert_eq!(normalize_text(""), "");
    }
}

//! Body text extraction.
//!
//! Strips noise subtrees from the document, then walks the ordered content
//! selector list accepting the first container with substantial text. Falls
//! back to the remaining text of the whole body element.

use dom_query::{Document, Selection};

use crate::extractor::normalize_text;
use crate::selectors::{CONTENT_SELECTORS, NOISE_SELECTORS};

/// Minimum character count for a content container to be accepted.
const MIN_BODY_CHARS: usize = 200;

/// Remove noise subtrees (scripts, styles, page chrome, ads, share widgets,
/// related-article widgets, comment sections) from the whole document.
pub fn strip_noise(doc: &Document) {
    let combined = NOISE_SELECTORS.join(", ");
    doc.select(&combined).remove();
}

/// Extract the article body text.
///
/// Walks `CONTENT_SELECTORS` in order and accepts the first candidate whose
/// normalized text exceeds 200 characters. Falls back to the remaining body
/// text of the whole document, or an empty string if no body element exists.
/// Call [`strip_noise`] first so the result excludes boilerplate subtrees.
#[must_use]
pub fn extract_body(doc: &Document) -> String {
    for selector in CONTENT_SELECTORS {
        for node in doc.select(selector).nodes() {
            let sel = Selection::from(*node);
            let text = normalize_text(&sel.text());
            if text.chars().count() > MIN_BODY_CHARS {
                return text;
            }
        }
    }

    let body = doc.select("body");
    if body.is_empty() {
        String::new()
    } else {
        normalize_text(&body.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_paragraph(marker: &str) -> String {
        format!(
            "<p>{marker} filler sentence repeated to push this container past the two \
             hundred character acceptance threshold used by the body extractor when it \
             walks the ordered list of content selectors looking for the first candidate \
             with substantial text.</p>"
        )
    }

    #[test]
    fn test_specific_container_beats_generic_article() {
        let html = format!(
            "<html><body><article>{}</article>\
             <div class='article-content'>{}</div></body></html>",
            long_paragraph("GENERIC_TEXT"),
            long_paragraph("SPECIFIC_TEXT"),
        );

        let doc = Document::from(html.as_str());
        let body = extract_body(&doc);
        assert!(body.contains("SPECIFIC_TEXT"));
        assert!(!body.contains("GENERIC_TEXT"));
    }

    #[test]
    fn test_short_candidate_is_skipped() {
        let html = format!(
            "<html><body><div class='article-content'><p>Too short.</p></div>\
             <article>{}</article></body></html>",
            long_paragraph("ARTICLE_TEXT"),
        );

        let doc = Document::from(html.as_str());
        let body = extract_body(&doc);
        assert!(body.contains("ARTICLE_TEXT"));
    }

    #[test]
    fn test_falls_back_to_body_text() {
        let html = "<html><body><p>Loose text outside any container.</p></body></html>";
        let doc = Document::from(html);
        assert_eq!(extract_body(&doc), "Loose text outside any container.");
    }

    #[test]
    fn test_strip_noise_removes_boilerplate_subtrees() {
        let html = format!(
            "<html><body>\
             <nav>NAV_TEXT</nav>\
             <script>SCRIPT_TEXT</script>\
             <div class='share-buttons'>SHARE_TEXT</div>\
             <div class='related-articles'>RELATED_TEXT</div>\
             <div id='comments'>COMMENT_TEXT</div>\
             <article>{}</article>\
             <footer>FOOTER_TEXT</footer>\
             </body></html>",
            long_paragraph("BODY_TEXT"),
        );

        let doc = Document::from(html.as_str());
        strip_noise(&doc);
        let body = extract_body(&doc);

        assert!(body.contains("BODY_TEXT"));
        for noise in ["NAV_TEXT", "SCRIPT_TEXT", "SHARE_TEXT", "RELATED_TEXT", "COMMENT_TEXT", "FOOTER_TEXT"] {
            assert!(!body.contains(noise), "noise survived stripping: {noise}");
        }
    }
}

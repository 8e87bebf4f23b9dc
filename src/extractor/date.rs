//! Publish-date extraction and permissive date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use dom_query::{Document, Selection};

use crate::selectors::DATE_SELECTORS;

/// Extract the publication date.
///
/// Walks the date selector list; for each candidate reads the `datetime`
/// attribute, then the `content` attribute, then visible text, and attempts
/// a permissive parse. A candidate that fails to parse is skipped, not
/// fatal. Returns `None` when no candidate parses (the pipeline then
/// defaults to the processing time).
#[must_use]
pub fn extract_published_at(doc: &Document) -> Option<DateTime<Utc>> {
    for selector in DATE_SELECTORS {
        for node in doc.select(selector).nodes() {
            let sel = Selection::from(*node);

            for candidate in [
                sel.attr("datetime").map(|s| s.to_string()),
                sel.attr("content").map(|s| s.to_string()),
                Some(sel.text().to_string()),
            ]
            .into_iter()
            .flatten()
            {
                if let Some(date) = parse_date(&candidate) {
                    return Some(date);
                }
            }
        }
    }

    None
}

/// Parse a date string permissively.
///
/// Supports RFC 3339 / ISO 8601, RFC 2822, and common human date formats.
#[must_use]
pub fn parse_date(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();
    if date_str.is_empty() || date_str.len() > 64 {
        return None;
    }

    // ISO 8601 with timezone
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    // RFC 2822 (common in feeds: "Fri, 15 Mar 2024 08:30:00 +0800")
    if let Ok(dt) = DateTime::parse_from_rfc2822(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    // ISO 8601 without timezone
    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }

    // Date only
    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    // Common human variations
    let formats = [
        "%Y/%m/%d",
        "%d/%m/%Y",
        "%m/%d/%Y",
        "%B %d, %Y", // January 15, 2024
        "%b %d, %Y", // Jan 15, 2024
        "%d %B %Y",  // 15 January 2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, fmt) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_date("2024-03-15T08:30:00+08:00").unwrap();
        assert_eq!(dt.hour(), 0); // +08:00 converted to UTC
        assert_eq!(dt.day(), 15);
    }

    #[test]
    fn test_parse_human_formats() {
        for s in ["January 15, 2024", "Jan 15, 2024", "15 January 2024", "2024/01/15"] {
            let dt = parse_date(s).unwrap_or_else(|| panic!("failed to parse {s}"));
            assert_eq!(dt.month(), 1);
            assert_eq!(dt.day(), 15);
        }
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse_date("not a date").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_extract_from_time_datetime_attr() {
        let html = r#"<html><body>
            <time datetime="2024-03-15T08:30:00Z">March 15, 2024</time>
        </body></html>"#;

        let doc = Document::from(html);
        let dt = extract_published_at(&doc).unwrap();
        assert_eq!(dt.year(), 2024);
    }

    #[test]
    fn test_extract_skips_unparseable_candidate() {
        // The first time element has garbage text; extraction must continue
        // to the meta tag instead of giving up.
        let html = r#"<html><head>
            <meta property="article:published_time" content="2023-11-02">
        </head><body>
            <time>Updated moments ago</time>
        </body></html>"#;

        let doc = Document::from(html);
        let dt = extract_published_at(&doc).unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.month(), 11);
    }

    #[test]
    fn test_extract_absent_when_no_candidates() {
        let doc = Document::from("<html><body><p>No dates here.</p></body></html>");
        assert!(extract_published_at(&doc).is_none());
    }
}

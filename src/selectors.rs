//! Ordered CSS selector tables for field extraction.
//!
//! Each list runs from most specific to least specific; extraction walks a
//! list in order and accepts the first candidate that clears the field's
//! acceptance threshold. Keeping the tables here, separate from the walking
//! code, lets the rules be audited and extended without touching the
//! extraction logic.

/// Title candidates, most specific heading first, page title tag last.
pub static TITLE_SELECTORS: &[&str] = &[
    "h1.entry-title",
    "h1.article-title",
    "h1.post-title",
    ".entry-title",
    ".article-title",
    ".headline",
    "h1",
    "title",
];

/// Content container candidates. The generic `article`/`main` elements come
/// last so site-specific containers win when present.
pub static CONTENT_SELECTORS: &[&str] = &[
    ".article-content",
    ".entry-content",
    ".post-content",
    ".story-body",
    ".article-body",
    "#article-content",
    "#article-body",
    "[itemprop='articleBody']",
    "article",
    "main",
];

/// Noise subtrees stripped from the document before body extraction.
///
/// Covers scripts, styles, page chrome, ad blocks, share widgets,
/// related-article widgets and comment sections.
pub static NOISE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "nav",
    "footer",
    "header",
    "aside",
    ".ad",
    ".ads",
    ".advertisement",
    "[class*='sponsored']",
    ".share",
    ".social-share",
    ".share-buttons",
    ".related",
    ".related-articles",
    ".related-posts",
    ".comments",
    "#comments",
    ".comment-section",
];

/// Byline candidates. Meta-tag entries are read via their `content`
/// attribute, the rest via visible text.
pub static AUTHOR_SELECTORS: &[&str] = &[
    ".author-name",
    ".byline",
    ".article-author",
    "a[rel='author']",
    "[itemprop='author']",
    "meta[name='author']",
    "meta[property='article:author']",
];

/// Publish-date candidates: time elements first, then date meta tags, then
/// date-classed elements read as visible text.
pub static DATE_SELECTORS: &[&str] = &[
    "time[datetime]",
    "time",
    "meta[property='article:published_time']",
    "meta[name='publish-date']",
    "meta[name='pubdate']",
    "meta[name='date']",
    "[itemprop='datePublished']",
    ".publish-date",
    ".posted-date",
    ".entry-date",
];

/// Lead-image element candidates, tried after the Open Graph and
/// Twitter-card meta tags.
pub static IMAGE_SELECTORS: &[&str] = &[
    "img.featured-image",
    ".article-image img",
    ".post-thumbnail img",
    "figure img",
    "article img",
];

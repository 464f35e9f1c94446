//! Compiled regex patterns and CSS selectors used across the pipeline.
//!
//! All patterns are compiled once at startup using `LazyLock`. The keyword
//! lists that drive candidate scoring live in [`crate::Options`] instead, so
//! callers can override them per extraction; only the patterns that are not
//! tunable belong here.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Scoring keyword defaults
// =============================================================================

/// Default class/id tokens that raise a container's score.
pub const DEFAULT_POSITIVE_KEYWORDS: &[&str] = &[
    "article", "body", "content", "entry", "hentry", "h-entry", "main", "page",
    "post", "text", "blog", "story",
];

/// Default class/id tokens that lower a container's score or mark it for
/// removal inside the candidate.
pub const DEFAULT_NEGATIVE_KEYWORDS: &[&str] = &[
    "banner", "breadcrumb", "combx", "comment", "community", "cover-wrap",
    "disqus", "extra", "footer", "gdpr", "legends", "masthead", "media",
    "menu", "modal", "related", "remark", "replies", "rss", "share", "shoutbox",
    "sidebar", "skyscraper", "social", "sponsor", "supplemental", "ad-break",
    "agegate", "pagination", "pager", "popup", "promo", "yom-remote", "widget",
    "subscribe", "newsletter",
];

// =============================================================================
// Candidate scoring
// =============================================================================

/// Commas (including full-width and ideographic forms) counted by the scorer.
pub static COMMAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\u{060C}\u{FF0C}\u{3001}]").expect("COMMAS regex"));

// =============================================================================
// Sanitization
// =============================================================================

/// Inline style declarations that hide an element.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)display\s*:\s*none|visibility\s*:\s*hidden").expect("HIDDEN_STYLE regex")
});

/// HTML comments, stripped when the working copy is created.
pub static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("HTML_COMMENT regex"));

/// Two or more consecutive `<br>` tags, collapsed into a paragraph boundary.
pub static BR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:<br\s*/?>\s*){2,}").expect("BR_RUN regex"));

/// Regions whose interior whitespace is significant and must not be
/// collapsed. One pattern per tag, each requiring a closing tag of the same
/// name, so a `</code>` nested inside `<pre>` cannot end the pre region.
pub static PRESERVED_REGIONS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    ["pre", "code", "textarea"].map(|tag| {
        Regex::new(&format!(r"(?is)<{tag}\b.*?</{tag}\s*>")).expect("PRESERVED_REGIONS regex")
    })
});

/// Social-share widget containers removed from the candidate subtree.
pub const SHARE_SELECTOR: &str = "[class*='share-button'], [class*='social-share'], \
     [class*='share-bar'], [class*='addtoany'], [class*='shareaholic'], \
     [class*='share-wrapper'], [id*='share-buttons'], [class*='post-share'], \
     [class*='entry-share'], [class*='dpsp-'], [class*='wabtn']";

// =============================================================================
// Metadata
// =============================================================================

/// Separators commonly placed between an article title and the site name.
/// Requires surrounding whitespace so hyphenated words are not split.
pub static TITLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+[\|\-\u{2013}\u{2014}:\u{00B7}\u{00BB}]\s+").expect("TITLE_SEPARATOR regex")
});

/// Selector for author/byline containers.
pub const BYLINE_SELECTOR: &str = "[rel='author'], [itemprop='author'], .byline, .author, \
     [class*='byline'], [class*='author']";

/// Selector for publication timestamps in the body.
pub const TIME_SELECTOR: &str = "time[datetime], [itemprop='datePublished'][datetime]";

// =============================================================================
// Text normalization
// =============================================================================

/// Runs of whitespace, collapsed to a single space.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Collapse whitespace runs and trim both ends.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

//! Result types for extraction output.
//!
//! [`ArticleInfo`] carries the resolved metadata; [`Article`] bundles it with
//! the cleaned content tree. Both are constructed once at the end of the
//! pipeline and are not mutated afterwards.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use dom_query::{Document, Selection};
use serde::Serialize;

/// Base direction of the article text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right text.
    Ltr,
    /// Right-to-left text.
    Rtl,
}

impl Direction {
    /// Parse a `dir` attribute value. Anything other than `ltr`/`rtl`
    /// (e.g. `auto`) is treated as undetermined.
    #[must_use]
    pub fn from_attr(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("ltr") {
            Some(Self::Ltr)
        } else if value.eq_ignore_ascii_case("rtl") {
            Some(Self::Rtl)
        } else {
            None
        }
    }
}

/// Metadata resolved for a document, without the content tree.
///
/// Optional fields are `None` when the document gives no usable value; they
/// are never defaulted to an empty-but-present string. All strings are
/// whitespace-normalized before storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInfo {
    /// Resolved page title (empty when nothing usable was found).
    pub title: String,

    /// Author attribution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byline: Option<String>,

    /// Short description, from metadata or the first substantial paragraph.
    pub excerpt: String,

    /// Name of the publishing site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,

    /// Base text direction, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<Direction>,

    /// Declared content language (BCP-47 tag, kept as supplied).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Publication time with its original UTC offset. Never fabricated:
    /// absent or unparseable timestamps stay `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<FixedOffset>>,
}

/// Final result of an extraction: resolved metadata plus the cleaned
/// content tree.
pub struct Article {
    /// Resolved metadata.
    pub info: ArticleInfo,

    /// The sanitized content, held as a document whose `<body>` wraps the
    /// cleaned candidate element. `None` when no node qualified as an
    /// article root; metadata may still be populated in that case.
    pub content: Option<Document>,
}

impl Article {
    /// The root element of the cleaned content, always an element that can
    /// be enumerated for children (never bare text).
    #[must_use]
    pub fn content_root(&self) -> Option<Selection<'_>> {
        let doc = self.content.as_ref()?;
        let root = doc.select_single("body > *");
        if root.exists() {
            Some(root)
        } else {
            None
        }
    }

    /// Serialized HTML of the cleaned content.
    #[must_use]
    pub fn content_html(&self) -> Option<String> {
        self.content_root().map(|root| root.html().to_string())
    }

    /// Plain text of the cleaned content, whitespace-normalized.
    #[must_use]
    pub fn content_text(&self) -> Option<String> {
        self.content_root()
            .map(|root| crate::patterns::collapse_whitespace(&root.text()))
    }
}

impl fmt::Debug for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Article")
            .field("info", &self.info)
            .field("content", &self.content.as_ref().map(|_| "<content tree>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_attr() {
        assert_eq!(Direction::from_attr("rtl"), Some(Direction::Rtl));
        assert_eq!(Direction::from_attr(" LTR "), Some(Direction::Ltr));
        assert_eq!(Direction::from_attr("auto"), None);
        assert_eq!(Direction::from_attr(""), None);
    }

    #[test]
    fn info_serializes_camel_case_and_skips_absent_fields() {
        let info = ArticleInfo {
            title: "Example".to_string(),
            site_name: Some("Example News".to_string()),
            ..ArticleInfo::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["title"], "Example");
        assert_eq!(json["siteName"], "Example News");
        assert!(json.get("byline").is_none());
        assert!(json.get("published").is_none());
    }

    #[test]
    fn content_root_is_always_an_element() {
        let article = Article {
            info: ArticleInfo::default(),
            content: Some(Document::from("<article><p>Body text.</p></article>")),
        };
        let root = article.content_root().unwrap();
        let name = root.nodes().first().and_then(dom_query::NodeRef::node_name);
        assert_eq!(name.as_deref(), Some("article"));
        assert_eq!(article.content_text().unwrap(), "Body text.");
    }
}

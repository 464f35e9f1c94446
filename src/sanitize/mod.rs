//! Content sanitization.
//!
//! The sanitizer never touches the original document. It serializes the
//! located candidate, strips HTML comments, and reparses the result into a
//! private working copy that the passes then rewrite in place. Passes run in
//! a fixed order and each is idempotent: running the pipeline twice yields
//! the same tree as running it once, which keeps the passes safe to reorder
//! or rerun during debugging.
//!
//! Pass order matters for cost, not correctness: structural removal first
//! shrinks the tree the later passes walk.

use dom_query::{Document, Selection};
use tracing::debug;
use url::Url;

use crate::options::Options;
use crate::patterns::HTML_COMMENT;

mod boilerplate;
mod images;
mod legacy;
mod strip;
mod urls;
mod whitespace;

/// Shared read-only state handed to every pass.
pub(crate) struct SanitizeContext<'a> {
    /// Effective base for URL resolution; `None` disables rewriting.
    pub base: Option<&'a Url>,
    /// Caller tunables, used by the boilerplate pruning heuristics.
    pub opts: &'a Options,
}

/// A pass takes ownership of the working copy and hands back the (usually
/// same) document; the whitespace pass returns a reparsed one.
type Pass = fn(Document, &SanitizeContext) -> Document;

const PASSES: &[(&str, Pass)] = &[
    ("strip", strip::run),
    ("urls", urls::run),
    ("images", images::run),
    ("legacy", legacy::run),
    ("boilerplate", boilerplate::run),
    ("whitespace", whitespace::run),
];

/// Clean a located candidate into a presentation-ready tree.
///
/// Returns a document whose `<body>` wraps the cleaned candidate element.
#[must_use]
pub fn sanitize(candidate: &Selection, base: Option<&Url>, opts: &Options) -> Document {
    let mut doc = working_copy(candidate);
    let ctx = SanitizeContext { base, opts };
    for (name, pass) in PASSES {
        debug!(pass = name, "running sanitizer pass");
        doc = pass(doc, &ctx);
    }
    doc
}

/// Serialize the candidate and reparse it as an isolated document.
///
/// Comments are dropped here, before parsing, so no pass ever sees one.
/// A `<body>` candidate (paragraphs sitting directly under it) gets a
/// synthesized `<div>` wrapper, since the cleaned content must be rooted at
/// a single enumerable element.
fn working_copy(candidate: &Selection) -> Document {
    let is_body = candidate
        .nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .as_deref()
        == Some("body");
    let html = if is_body {
        format!("<div>{}</div>", candidate.inner_html())
    } else {
        candidate.html().to_string()
    };
    let without_comments = HTML_COMMENT.replace_all(&html, "");
    Document::from(without_comments.into_owned())
}

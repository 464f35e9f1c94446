//! Legacy markup normalization.
//!
//! Old CMS output leans on `<font>` for styling and `<br><br>` for paragraph
//! breaks. The font tags are unwrapped in place; runs of two or more breaks
//! become real paragraph boundaries by rewriting the serialized body and
//! reparsing, the only way to introduce structure the source never had.
//! Paragraphs left empty by the earlier passes are dropped unless they hold
//! media.

use dom_query::{Document, Selection};

use super::SanitizeContext;
use crate::patterns::BR_RUN;

pub(super) fn run(doc: Document, _ctx: &SanitizeContext) -> Document {
    let body = doc.select_single("body");
    body.strip_elements(&["font"]);

    // Serialize-and-reparse only when a run actually exists; the reparse
    // normalizes the stray tags the textual rewrite produces.
    let inner = body.inner_html();
    if BR_RUN.is_match(&inner) {
        let rewritten = BR_RUN.replace_all(&inner, "</p><p>");
        body.set_html(rewritten.into_owned());
    }

    for node in doc.select("p").nodes() {
        let p = Selection::from(*node);
        if p.text().trim().is_empty() && !p.select("img, picture, video, audio").exists() {
            p.remove();
        }
    }

    doc
}

//! Whitespace normalization, the final pass.
//!
//! Indentation and blank lines from the source markup survive every earlier
//! pass; collapsing them keeps serialized output stable regardless of how
//! the publisher formatted their HTML. The collapse works on the serialized
//! tree, skipping `<pre>`, `<code>` and `<textarea>` regions where interior
//! whitespace is content. Reparsing only happens when something actually
//! changed, so an already-normalized tree passes through untouched.

use dom_query::Document;

use super::SanitizeContext;
use crate::patterns::{PRESERVED_REGIONS, WHITESPACE};

pub(super) fn run(doc: Document, _ctx: &SanitizeContext) -> Document {
    let html = doc.html().to_string();
    let collapsed = collapse_outside_preserved(&html);
    if collapsed == html {
        doc
    } else {
        Document::from(collapsed)
    }
}

fn collapse_outside_preserved(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut cursor = 0;
    for (start, end) in preserved_spans(html) {
        out.push_str(&WHITESPACE.replace_all(&html[cursor..start], " "));
        out.push_str(&html[start..end]);
        cursor = end;
    }
    out.push_str(&WHITESPACE.replace_all(&html[cursor..], " "));
    out
}

/// Byte ranges of outermost preserved regions, in document order.
///
/// Each tag's pattern closes on its own name, so an inner `</code>` cannot
/// end a surrounding `<pre>` region; spans starting inside an already-kept
/// span are nested and dropped.
fn preserved_spans(html: &str) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for pattern in PRESERVED_REGIONS.iter() {
        for region in pattern.find_iter(html) {
            spans.push((region.start(), region.end()));
        }
    }
    spans.sort_unstable();

    let mut outermost: Vec<(usize, usize)> = Vec::new();
    for (start, end) in spans {
        match outermost.last() {
            Some(&(_, kept_end)) if start < kept_end => {}
            _ => outermost.push((start, end)),
        }
    }
    outermost
}

//! Body heuristics, the lowest metadata tier.
//!
//! Everything here is a guess recovered from the markup: a byline class, the
//! first substantial paragraph, a `<time>` element. These fill only the
//! fields the structured tiers left empty, and the title is reconciled
//! against the site name so `<title>` suffixes like " — Example News" do not
//! leak into the article title.

use dom_query::{Document, NodeRef, Selection};

use super::Harvest;
use crate::article::Direction;
use crate::options::Options;
use crate::patterns::{collapse_whitespace, BYLINE_SELECTOR, TIME_SELECTOR, TITLE_SEPARATOR};

/// Fill the harvest's empty fields from the document body.
pub(super) fn fill(
    doc: &Document,
    candidate: Option<&Selection>,
    harvest: &mut Harvest,
    opts: &Options,
) {
    if harvest.byline.is_none() {
        harvest.byline = find_byline(doc, candidate);
    }
    if harvest.excerpt.is_none() {
        harvest.excerpt = find_excerpt(doc, candidate, opts);
    }
    if harvest.published.is_none() {
        harvest.published = find_time(doc);
    }
}

/// First plausible byline container, searching the candidate before the
/// whole document.
fn find_byline(doc: &Document, candidate: Option<&Selection>) -> Option<String> {
    let scoped = candidate.map(|c| c.select(BYLINE_SELECTOR));
    let global;
    let matches = match &scoped {
        Some(sel) if sel.exists() => sel,
        _ => {
            global = doc.select(BYLINE_SELECTOR);
            &global
        }
    };

    for node in matches.nodes() {
        let text = collapse_whitespace(&Selection::from(*node).text());
        let text = text
            .strip_prefix("By ")
            .or_else(|| text.strip_prefix("by "))
            .unwrap_or(&text)
            .trim()
            .to_string();
        if super::is_valid_byline(&text) {
            return Some(text);
        }
    }
    None
}

/// First paragraph long enough to summarize the article.
fn find_excerpt(doc: &Document, candidate: Option<&Selection>, opts: &Options) -> Option<String> {
    let scoped = candidate.map(|c| c.select("p"));
    let global;
    let paragraphs = match &scoped {
        Some(sel) if sel.exists() => sel,
        _ => {
            global = doc.select("body p");
            &global
        }
    };

    for node in paragraphs.nodes() {
        let text = collapse_whitespace(&Selection::from(*node).text());
        if text.chars().count() >= opts.char_threshold {
            return Some(text);
        }
    }
    None
}

/// First machine-readable timestamp in the body.
fn find_time(doc: &Document) -> Option<String> {
    for node in doc.select(TIME_SELECTOR).nodes() {
        if let Some(datetime) = Selection::from(*node).attr("datetime") {
            let datetime = datetime.trim().to_string();
            if !datetime.is_empty() {
                return Some(datetime);
            }
        }
    }
    None
}

/// Resolve the final title.
///
/// A structured title wins outright. Otherwise the `<title>` element is
/// cleaned up: a known site name on either side of a separator is stripped,
/// a lone `<h1>` contained in the raw title replaces it, and failing both,
/// the longer side of the separator is kept.
pub(super) fn reconcile_title(
    doc: &Document,
    declared: Option<&str>,
    site_name: Option<&str>,
) -> String {
    if let Some(declared) = declared {
        let declared = collapse_whitespace(declared);
        if !declared.is_empty() {
            return declared;
        }
    }

    let raw = collapse_whitespace(&doc.select_single("title").text());
    if raw.is_empty() {
        return lone_heading(doc).unwrap_or_default();
    }

    if let Some(site) = site_name {
        if let Some(stripped) = strip_site_name(&raw, site) {
            return stripped;
        }
    }

    if let Some(heading) = lone_heading(doc) {
        if raw.contains(&heading) && heading.chars().count() > 10 {
            return heading;
        }
    }

    split_on_separator(&raw)
}

/// Remove the site name and its separator from either end of the raw title.
fn strip_site_name(raw: &str, site: &str) -> Option<String> {
    let site = site.trim();
    if site.is_empty() {
        return None;
    }
    for m in TITLE_SEPARATOR.find_iter(raw) {
        let before = raw[..m.start()].trim();
        let after = raw[m.end()..].trim();
        if after.eq_ignore_ascii_case(site) && !before.is_empty() {
            return Some(before.to_string());
        }
        if before.eq_ignore_ascii_case(site) && !after.is_empty() {
            return Some(after.to_string());
        }
    }
    None
}

/// The text of the document's `<h1>` when there is exactly one.
fn lone_heading(doc: &Document) -> Option<String> {
    let headings = doc.select("h1");
    if headings.length() != 1 {
        return None;
    }
    let text = collapse_whitespace(&headings.text());
    (!text.is_empty()).then_some(text)
}

/// Fall back on the separator structure alone: prefer the part before the
/// last separator unless it is too short to be a headline.
fn split_on_separator(raw: &str) -> String {
    let Some(last) = TITLE_SEPARATOR.find_iter(raw).last() else {
        return raw.to_string();
    };
    let before_last = raw[..last.start()].trim();
    if before_last.split_whitespace().count() >= 2 {
        return before_last.to_string();
    }
    if let Some(first) = TITLE_SEPARATOR.find(raw) {
        let after_first = raw[first.end()..].trim();
        if !after_first.is_empty() {
            return after_first.to_string();
        }
    }
    raw.to_string()
}

/// Base direction and declared language, read from the candidate's ancestry
/// when a candidate exists and from the root elements otherwise.
pub(super) fn direction_and_language(
    doc: &Document,
    candidate: Option<&Selection>,
) -> (Option<Direction>, Option<String>) {
    if let Some(node) = candidate.and_then(|c| c.nodes().first().copied()) {
        let dir = attr_on_ancestry(&node, "dir").and_then(|v| Direction::from_attr(&v));
        let lang = attr_on_ancestry(&node, "lang").filter(|v| !v.trim().is_empty());
        if dir.is_some() || lang.is_some() {
            return (
                dir.or_else(|| root_attr(doc, "dir").and_then(|v| Direction::from_attr(&v))),
                lang.or_else(|| root_attr(doc, "lang")),
            );
        }
    }
    (
        root_attr(doc, "dir").and_then(|v| Direction::from_attr(&v)),
        root_attr(doc, "lang"),
    )
}

/// Value of `attr` on the node or its nearest ancestor carrying it.
fn attr_on_ancestry(node: &NodeRef, attr: &str) -> Option<String> {
    let own = Selection::from(*node).attr(attr);
    if let Some(value) = own {
        return Some(value.to_string());
    }
    for ancestor in node.ancestors(None) {
        if !ancestor.is_element() {
            continue;
        }
        if let Some(value) = Selection::from(ancestor).attr(attr) {
            return Some(value.to_string());
        }
    }
    None
}

fn root_attr(doc: &Document, attr: &str) -> Option<String> {
    let html = doc.select_single("html");
    if let Some(value) = html.attr(attr) {
        let value = value.trim().to_string();
        if !value.is_empty() {
            return Some(value);
        }
    }
    let body = doc.select_single("body");
    body.attr(attr)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

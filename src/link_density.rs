//! Link density measurement.
//!
//! High link density (anchor text dominating total text) marks navigation,
//! link farms, and share bars rather than prose. The locator uses the ratio
//! to scale candidate scores; the sanitizer uses the cluster test to prune
//! navigation blocks inside the candidate.

use dom_query::Selection;

use crate::options::Options;

/// Ratio of anchor-text length to total text length within a node.
///
/// Returns `0.0` for nodes without text; a node that is all links
/// approaches `1.0`.
#[must_use]
pub fn link_density(element: &Selection) -> f64 {
    let text = element.text();
    let text_len = text.trim().chars().count();
    if text_len == 0 {
        return 0.0;
    }

    let mut link_len = 0usize;
    let links = element.select("a");
    for node in links.nodes() {
        let link = Selection::from(*node);
        let link_text = link.text();
        link_len += link_text.trim().chars().count();
    }

    (link_len as f64) / (text_len as f64)
}

/// Collect heuristics on link text.
///
/// Returns `(total_link_length, num_short_links, num_non_empty_links)`.
fn collect_link_info(links: &Selection) -> (usize, usize, usize) {
    let mut link_length = 0;
    let mut n_short_links = 0;
    let mut n_non_empty_links = 0;

    for node in links.nodes() {
        let link = Selection::from(*node);
        let text = link.text();
        let text = text.trim();
        let text_length = text.chars().count();

        if text_length == 0 {
            continue;
        }

        link_length += text_length;
        if text_length < 10 {
            n_short_links += 1;
        }
        n_non_empty_links += 1;
    }

    (link_length, n_short_links, n_non_empty_links)
}

/// Check whether an element is a link cluster that should be removed as
/// boilerplate.
///
/// Short blocks whose text is dominated by links, or made of many short
/// links, are typical of nav menus and "related stories" widgets.
#[must_use]
pub fn is_link_cluster(element: &Selection, options: &Options) -> bool {
    let links = element.select("a");
    let n_links = links.length();

    if n_links == 0 {
        return false;
    }

    let text = element.text();
    let text = text.trim();
    let text_length = text.chars().count();

    // A lone long link covering nearly all the text is a teaser, not prose.
    if n_links == 1 {
        if let Some(link_node) = links.nodes().first() {
            let link = Selection::from(*link_node);
            let link_text = link.text();
            let link_len = link_text.trim().chars().count();
            if link_len > 100 && (link_len as f64) > (text_length as f64) * 0.9 {
                return true;
            }
        }
    }

    // Longer blocks get the benefit of the doubt.
    let tag = element
        .nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name);
    let is_paragraph = tag.as_deref().is_some_and(|t| t.eq_ignore_ascii_case("p"));
    let limit_length: usize = if is_paragraph { 60 } else { 300 };
    if text_length >= limit_length {
        return false;
    }

    let (link_length, n_short_links, n_non_empty_links) = collect_link_info(&links);

    if n_non_empty_links == 0 {
        return true;
    }

    if (link_length as f64) > (text_length as f64) * options.max_link_density {
        return true;
    }

    // Mostly short links - the shape of a menu.
    n_non_empty_links > 1 && (n_short_links as f64) / (n_non_empty_links as f64) > 0.8
}

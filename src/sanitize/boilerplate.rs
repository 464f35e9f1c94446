//! In-candidate boilerplate pruning.
//!
//! The locator picks the best container, but real articles still carry
//! chrome inside it: share bars, "related stories" widgets, inline nav.
//! Three rules prune them, in order of confidence: explicit share-widget
//! selectors, containers whose class/id keywords score negative, and
//! link-dominated blocks. The content root itself is never removed, however
//! badly its classes score; the locator already vouched for it.

use dom_query::{Document, NodeRef, Selection};

use super::SanitizeContext;
use crate::link_density::is_link_cluster;
use crate::locator::class_id_weight;
use crate::patterns::SHARE_SELECTOR;

/// Container tags eligible for heuristic pruning.
const PRUNABLE_TAGS: &[&str] = &["div", "section", "ul", "ol", "table", "aside", "nav", "footer", "header"];

/// Tags the link-cluster test also applies to.
const CLUSTER_TAGS: &[&str] = &["div", "ul", "ol", "table", "p"];

pub(super) fn run(doc: Document, ctx: &SanitizeContext) -> Document {
    doc.select(SHARE_SELECTOR).remove();

    let root_id = doc.select_single("body > *").nodes().first().map(|n| n.id);

    // Collect first, prune after: removing while iterating would walk into
    // detached subtrees.
    let candidates: Vec<NodeRef> = doc
        .select("body")
        .nodes()
        .first()
        .map(|body| {
            body.descendants()
                .into_iter()
                .filter(|n| n.is_element())
                .collect()
        })
        .unwrap_or_default();

    for node in candidates {
        if Some(node.id) == root_id || !is_attached(&node) {
            continue;
        }
        let Some(name) = node.node_name() else {
            continue;
        };
        let name = name.to_lowercase();
        if !PRUNABLE_TAGS.contains(&name.as_str()) && !CLUSTER_TAGS.contains(&name.as_str()) {
            continue;
        }

        let sel = Selection::from(node);

        // An article-level <header> often wraps the headline; it only goes
        // when its classes or link density condemn it below.
        if matches!(name.as_str(), "aside" | "nav" | "footer") {
            sel.remove();
            continue;
        }

        if PRUNABLE_TAGS.contains(&name.as_str()) && class_id_weight(&sel, ctx.opts) < 0.0 {
            sel.remove();
            continue;
        }

        if CLUSTER_TAGS.contains(&name.as_str()) && is_link_cluster(&sel, ctx.opts) {
            sel.remove();
        }
    }

    doc
}

/// Whether the node still hangs off the document; pruning an ancestor
/// detaches its whole subtree.
fn is_attached(node: &NodeRef) -> bool {
    let mut current = Some(*node);
    while let Some(n) = current {
        if n.node_name().as_deref() == Some("html") {
            return true;
        }
        current = n.parent();
    }
    false
}

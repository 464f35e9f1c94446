//! Candidate locator: finds the element most likely to contain the article.
//!
//! The locator is a read-only traversal of the body. Paragraph-bearing
//! blocks are scored on text length and punctuation, the scores propagate
//! partially to their ancestors, and class/id keywords plus link density
//! adjust the totals. The highest-scoring container wins; exact ties go to
//! the node appearing first in document order, so results are stable across
//! runs.
//!
//! Absence of a qualifying node is a negative result, not an error: the
//! orchestrator turns it into an `Article` with `content: None`.

use dom_query::{Document, NodeId, NodeRef, Selection};
use tendril::StrTendril;
use tracing::debug;

use crate::link_density::link_density;
use crate::options::Options;
use crate::patterns::COMMAS;

/// A transient scoring record for the winning container.
///
/// Exists only as the locator's return value; nothing here is persisted.
pub struct Candidate<'a> {
    /// The chosen article root.
    pub selection: Selection<'a>,
    /// Accumulated content score after link-density scaling.
    pub score: f64,
    /// Human-readable ancestry of the node, for diagnostics and tests only.
    /// Downstream logic never consumes it.
    pub path: String,
}

/// Tags whose text content contributes a block score.
const BLOCK_TAGS: &[&str] = &["p", "td", "pre", "blockquote"];

/// Containers that never qualify and whose contents are ignored outright.
const SKIPPED_CONTAINERS: &[&str] = &["nav", "aside", "footer", "header"];

/// Score sheet for potential candidates, keyed by arena node id.
///
/// Pages rarely produce more than a few hundred candidates, so a linear
/// probe beats hashing here and keeps insertion order = document order.
struct ScoreStore {
    entries: Vec<(NodeId, f64)>,
}

impl ScoreStore {
    fn new() -> Self {
        Self { entries: Vec::new() }
    }

    fn get(&self, id: NodeId) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, score)| *score)
    }

    fn add(&mut self, id: NodeId, initial: impl FnOnce() -> f64, delta: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|(entry_id, _)| *entry_id == id) {
            entry.1 += delta;
        } else {
            self.entries.push((id, initial() + delta));
        }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Locate the best article container using default tunables.
///
/// `max_depth` bounds how deep below `<body>` the search descends before
/// giving up on a subtree, capping cost on pathologically nested pages.
/// Returns `None` when no node reaches the minimum viable score.
#[must_use]
pub fn try_find_candidate(doc: &Document, max_depth: usize) -> Option<Candidate<'_>> {
    let opts = Options {
        max_depth,
        ..Options::default()
    };
    try_find_candidate_with_options(doc, &opts)
}

/// Locate the best article container with caller-supplied tunables.
#[must_use]
pub fn try_find_candidate_with_options<'a>(
    doc: &'a Document,
    opts: &Options,
) -> Option<Candidate<'a>> {
    let body = doc.select("body");
    let body_node = *body.nodes().first()?;

    let mut scores = score_blocks(&body_node, opts);
    if scores.is_empty() {
        debug!("no scorable blocks in body");
        return None;
    }

    // Final scan in document order: scale by link density and keep the best.
    // Strict comparison makes the first node win exact ties. The body leads
    // the traversal since it may carry a score of its own.
    let mut best: Option<(NodeRef<'a>, f64)> = None;
    for node in std::iter::once(body_node).chain(body_node.descendants()) {
        if !node.is_element() {
            continue;
        }
        let Some(raw) = scores.get(node.id) else {
            continue;
        };
        let scaled = raw * (1.0 - link_density(&Selection::from(node)));
        scores.add(node.id, || 0.0, scaled - raw);
        if best.is_none_or(|(_, best_score)| scaled > best_score) {
            best = Some((node, scaled));
        }
    }

    let (mut top, mut top_score) = best?;
    if top_score < opts.min_candidate_score {
        debug!(score = top_score, "best candidate below minimum viable score");
        return None;
    }

    (top, top_score) = promote_through_ancestry(top, top_score, &body_node, &scores);

    let path = diagnostic_path(&top);
    debug!(score = top_score, path = %path, "candidate located");

    Some(Candidate {
        selection: Selection::from(top),
        score: top_score,
        path,
    })
}

/// First pass: score paragraph-bearing blocks and spread the points over
/// their ancestry.
fn score_blocks(body_node: &NodeRef, opts: &Options) -> ScoreStore {
    let mut scores = ScoreStore::new();

    for node in body_node.descendants() {
        if !node.is_element() {
            continue;
        }
        let Some(name) = node.node_name() else {
            continue;
        };
        if !tag_matches(&name, BLOCK_TAGS) {
            continue;
        }
        let Some(depth) = depth_below(&node, body_node) else {
            continue;
        };
        if depth > opts.max_depth {
            continue;
        }
        if has_skipped_ancestor(&node, body_node) {
            continue;
        }

        let text = node.text();
        let text = text.trim();
        let text_len = text.chars().count();
        if text_len < opts.char_threshold {
            continue;
        }

        // One point for existing, one per comma, one per full 100 chars
        // capped at three.
        let mut block_score = 1.0;
        block_score += COMMAS.find_iter(text).count() as f64;
        block_score += ((text_len / 100).min(3)) as f64;

        // The body itself is the last eligible ancestor; without it, a page
        // whose paragraphs sit directly under <body> could never score.
        let mut level = 0usize;
        let mut ancestor = node.parent();
        while let Some(anc) = ancestor {
            if !anc.is_element() || level >= opts.max_ancestor_levels {
                break;
            }
            let divider = match level {
                0 => 1.0,
                1 => 2.0,
                deeper => (deeper as f64) * 3.0,
            };
            let init = || initial_score(&anc, opts);
            scores.add(anc.id, init, block_score / divider);
            if anc.id == body_node.id {
                break;
            }
            level += 1;
            ancestor = anc.parent();
        }
    }

    scores
}

/// Base score of a container before any block contributions: tag weight
/// plus class/id keyword weight.
fn initial_score(node: &NodeRef, opts: &Options) -> f64 {
    let mut score = match node.node_name().as_deref() {
        Some("article" | "section" | "main") => 8.0,
        Some("div") => 5.0,
        Some("pre" | "td" | "blockquote") => 3.0,
        Some("address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form") => -3.0,
        Some("h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th") => -5.0,
        _ => 0.0,
    };
    score += class_id_weight(&Selection::from(*node), opts);
    score
}

/// Keyword weight of an element's `class` and `id` attributes.
///
/// Each attribute contributes at most once in each direction; tokens are
/// matched case-insensitively as substrings against the caller's lists.
pub(crate) fn class_id_weight(sel: &Selection, opts: &Options) -> f64 {
    let mut weight = 0.0;
    for attr in ["class", "id"] {
        let Some(value) = sel.attr(attr) else {
            continue;
        };
        let value = value.to_lowercase();
        if value.is_empty() {
            continue;
        }
        if opts.negative_keywords.iter().any(|k| value.contains(k.as_str())) {
            weight -= opts.keyword_weight;
        }
        if opts.positive_keywords.iter().any(|k| value.contains(k.as_str())) {
            weight += opts.keyword_weight;
        }
    }
    weight
}

/// Case-insensitive tag comparison without allocating.
fn tag_matches(name: &StrTendril, targets: &[&str]) -> bool {
    targets.iter().any(|t| name.eq_ignore_ascii_case(t))
}

/// Depth of `node` below `body`, or `None` when the node is detached from it.
fn depth_below(node: &NodeRef, body_node: &NodeRef) -> Option<usize> {
    let mut depth = 0usize;
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.id == body_node.id {
            return Some(depth);
        }
        depth += 1;
        current = parent.parent();
    }
    None
}

/// Whether any ancestor up to the body is a container we skip outright.
fn has_skipped_ancestor(node: &NodeRef, body_node: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.id == body_node.id {
            return false;
        }
        if let Some(name) = parent.node_name() {
            if tag_matches(&name, SKIPPED_CONTAINERS) {
                return true;
            }
        }
        current = parent.parent();
    }
    false
}

/// Walk up from the raw winner when its ancestry tells a better story.
///
/// Scores propagate upward, so a parent that still scores higher than the
/// winner usually means the article spans more of the wrapper than the
/// winner alone. An only child likewise adds no information over its parent.
fn promote_through_ancestry<'a>(
    mut top: NodeRef<'a>,
    mut top_score: f64,
    body_node: &NodeRef<'a>,
    scores: &ScoreStore,
) -> (NodeRef<'a>, f64) {
    let floor = top_score / 3.0;
    let mut last_score = top_score;
    let mut parent = top.parent();
    while let Some(p) = parent {
        if !p.is_element() || p.id == body_node.id {
            break;
        }
        let Some(parent_score) = scores.get(p.id) else {
            parent = p.parent();
            continue;
        };
        if parent_score < floor {
            break;
        }
        if parent_score > last_score {
            top = p;
            top_score = parent_score;
            break;
        }
        last_score = parent_score;
        parent = p.parent();
    }

    // A wrapper with a single element child is the same content, one level up.
    loop {
        let Some(p) = top.parent() else { break };
        if !p.is_element() || p.id == body_node.id {
            break;
        }
        let mut element_children = 0usize;
        for child in p.children() {
            if child.is_element() {
                element_children += 1;
            }
        }
        if element_children == 1 {
            top = p;
        } else {
            break;
        }
    }

    (top, top_score)
}

/// Render a node's ancestry as `html > body > div#main.content > article`.
///
/// Purely diagnostic; nothing downstream consumes it.
fn diagnostic_path(node: &NodeRef) -> String {
    let mut parts = vec![render_step(node)];
    for anc in node.ancestors(None) {
        if anc.is_element() {
            parts.push(render_step(&anc));
        }
    }
    parts.reverse();
    parts.join(" > ")
}

fn render_step(node: &NodeRef) -> String {
    let sel = Selection::from(*node);
    let mut step = node
        .node_name()
        .map_or_else(|| "?".to_string(), |name| name.to_string());
    if let Some(id) = sel.attr("id") {
        let id = id.trim().to_string();
        if !id.is_empty() {
            step.push('#');
            step.push_str(&id);
        }
    }
    if let Some(class) = sel.attr("class") {
        for token in class.split_whitespace().take(3) {
            step.push('.');
            step.push_str(token);
        }
    }
    step
}

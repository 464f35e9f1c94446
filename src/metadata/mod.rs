//! Metadata resolution.
//!
//! Metadata comes from three tiers, consulted in order of trustworthiness:
//! JSON-LD blocks, `<meta>` tags (Open Graph, Twitter Cards, Dublin Core,
//! Parsely), and finally heuristics over the document body. A later tier
//! only fills fields the earlier tiers left empty; what an author declared
//! in structured data is never overridden by a guess from the markup.
//!
//! Resolution is independent of content extraction: it works on the original
//! document and succeeds (possibly with sparse results) even when no article
//! candidate was found.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use dom_query::{Document, Selection};
use tracing::debug;
use url::Url;

use crate::article::ArticleInfo;
use crate::options::Options;
use crate::patterns::collapse_whitespace;
use crate::url_utils;

mod dom_fallback;
mod json_ld;
mod meta_tags;

/// Raw field values gathered from one metadata tier, before normalization.
///
/// Timestamps stay as strings until the end so that every tier competes on
/// the same footing and only the winning value is parsed.
#[derive(Debug, Default)]
pub(crate) struct Harvest {
    pub title: Option<String>,
    pub byline: Option<String>,
    pub excerpt: Option<String>,
    pub site_name: Option<String>,
    pub published: Option<String>,
    pub modified: Option<String>,
    pub language: Option<String>,
}

impl Harvest {
    /// Adopt values from a lower-priority tier for fields still unset.
    fn fill_missing(&mut self, lower: Harvest) {
        fill(&mut self.title, lower.title);
        fill(&mut self.byline, lower.byline);
        fill(&mut self.excerpt, lower.excerpt);
        fill(&mut self.site_name, lower.site_name);
        fill(&mut self.published, lower.published);
        fill(&mut self.modified, lower.modified);
        fill(&mut self.language, lower.language);
    }
}

fn fill(slot: &mut Option<String>, value: Option<String>) {
    if slot.is_none() {
        if let Some(v) = value {
            if !v.trim().is_empty() {
                *slot = Some(v);
            }
        }
    }
}

/// Resolve the metadata for a document.
///
/// `candidate` is the located article root when one exists; body heuristics
/// (excerpt, byline, direction) prefer it over the whole document.
#[must_use]
pub fn resolve(
    doc: &Document,
    candidate: Option<&Selection>,
    base: Option<&Url>,
    opts: &Options,
) -> ArticleInfo {
    let mut harvest = json_ld::harvest(doc);
    harvest.fill_missing(meta_tags::harvest(doc));
    dom_fallback::fill(doc, candidate, &mut harvest, opts);

    let title = dom_fallback::reconcile_title(doc, harvest.title.as_deref(), harvest.site_name.as_deref());

    let site_name = harvest
        .site_name
        .map(|s| collapse_whitespace(&s))
        .filter(|s| !s.is_empty())
        .or_else(|| base.and_then(url_utils::host_name));

    let published = harvest
        .published
        .as_deref()
        .or(harvest.modified.as_deref())
        .and_then(parse_timestamp);
    if published.is_none() && harvest.published.is_some() {
        debug!(raw = ?harvest.published, "unparseable publication timestamp dropped");
    }

    let (dir, language_attr) = dom_fallback::direction_and_language(doc, candidate);

    ArticleInfo {
        title,
        byline: harvest
            .byline
            .map(|s| collapse_whitespace(&s))
            .filter(|s| is_valid_byline(s)),
        excerpt: harvest
            .excerpt
            .map(|s| collapse_whitespace(&s))
            .unwrap_or_default(),
        site_name,
        dir,
        language: harvest
            .language
            .map(|s| collapse_whitespace(&s))
            .filter(|s| !s.is_empty())
            .or(language_attr),
        published,
    }
}

/// A plausible author string: non-empty, shorter than a paragraph, and not
/// leaked structured data (profile URLs, raw JSON).
pub(crate) fn is_valid_byline(s: &str) -> bool {
    let s = s.trim();
    let len = s.chars().count();
    len > 0
        && len < 100
        && !s.starts_with("http://")
        && !s.starts_with("https://")
        && !s.starts_with('{')
        && !s.starts_with('[')
}

/// Parse a timestamp in the formats seen in the wild.
///
/// Values without an explicit offset are taken as UTC. Anything else is
/// dropped rather than guessed at.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(naive.and_utc().fixed_offset());
    }

    None
}

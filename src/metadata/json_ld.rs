//! JSON-LD harvesting.
//!
//! Publishers embed schema.org descriptions in
//! `<script type="application/ld+json">` blocks. The first object of an
//! article-like `@type` wins, whether it sits at the top level, inside an
//! array, or under `@graph`. Malformed JSON is skipped silently; a broken
//! script block is the publisher's bug, not ours to surface.

use dom_query::{Document, Selection};
use serde_json::Value;
use tracing::trace;

use super::Harvest;

const ARTICLE_TYPES: &[&str] = &[
    "Article",
    "NewsArticle",
    "BlogPosting",
    "ScholarlyArticle",
    "TechArticle",
    "Report",
];

/// Gather metadata from the document's JSON-LD blocks.
pub(super) fn harvest(doc: &Document) -> Harvest {
    for node in doc.select(r#"script[type="application/ld+json"]"#).nodes() {
        let raw = Selection::from(*node).text();
        let Ok(value) = serde_json::from_str::<Value>(raw.trim()) else {
            trace!("skipping malformed JSON-LD block");
            continue;
        };
        if let Some(article) = find_article(&value) {
            return harvest_article(article);
        }
    }
    Harvest::default()
}

/// Locate the first article-typed object in a JSON-LD value.
fn find_article(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(map) => {
            if is_article_type(map.get("@type")) {
                return Some(value);
            }
            if let Some(graph) = map.get("@graph") {
                return find_article(graph);
            }
            None
        }
        Value::Array(items) => items.iter().find_map(find_article),
        _ => None,
    }
}

/// `@type` may be a single string or an array of strings.
fn is_article_type(type_value: Option<&Value>) -> bool {
    match type_value {
        Some(Value::String(s)) => ARTICLE_TYPES.contains(&s.as_str()),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .any(|s| ARTICLE_TYPES.contains(&s)),
        _ => false,
    }
}

fn harvest_article(article: &Value) -> Harvest {
    let string_field = |key: &str| -> Option<String> {
        article
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
    };

    Harvest {
        title: string_field("headline").or_else(|| string_field("name")),
        byline: article.get("author").and_then(person_names),
        excerpt: string_field("description"),
        site_name: article
            .get("publisher")
            .and_then(|p| entity_name(p))
            .or_else(|| string_field("sourceOrganization")),
        published: string_field("datePublished"),
        modified: string_field("dateModified"),
        language: string_field("inLanguage"),
    }
}

/// Render an `author` value as a byline.
///
/// Accepts a bare string, a `Person`/`Organization` object, or an array of
/// either; multiple names are joined with commas.
fn person_names(author: &Value) -> Option<String> {
    match author {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Object(_) => entity_name(author),
        Value::Array(items) => {
            let names: Vec<String> = items.iter().filter_map(person_names).collect();
            (!names.is_empty()).then(|| names.join(", "))
        }
        _ => None,
    }
}

/// The `name` of a schema.org entity object.
fn entity_name(entity: &Value) -> Option<String> {
    entity
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

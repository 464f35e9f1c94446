//! `<meta>` tag harvesting.
//!
//! Collects every `name=`/`property=`/`itemprop=` key the head declares,
//! then answers each field from a fixed priority list. Keys are normalized
//! (lowercased, `.` folded to `:`) so `DC.title`, `dc:title` and `dcterm.title`
//! land on the same entries, and a `property` attribute may carry several
//! space-separated keys, each of which is recorded.

use dom_query::Document;

use super::Harvest;

const TITLE_KEYS: &[&str] = &[
    "og:title",
    "twitter:title",
    "dc:title",
    "dcterm:title",
    "parsely-title",
    "weibo:article:title",
];

const BYLINE_KEYS: &[&str] = &[
    "dc:creator",
    "dcterm:creator",
    "author",
    "parsely-author",
    "article:author",
];

const DESCRIPTION_KEYS: &[&str] = &[
    "og:description",
    "twitter:description",
    "dc:description",
    "dcterm:description",
    "description",
    "parsely-description",
];

const SITE_NAME_KEYS: &[&str] = &["og:site_name", "site_name", "twitter:site"];

const PUBLISHED_KEYS: &[&str] = &[
    "article:published_time",
    "parsely-pub-date",
    "datepublished",
];

const MODIFIED_KEYS: &[&str] = &["article:modified_time", "og:updated_time", "datemodified"];

const LANGUAGE_KEYS: &[&str] = &["og:locale", "dc:language", "dcterm:language"];

/// Gather metadata declared through `<meta>` tags.
pub(super) fn harvest(doc: &Document) -> Harvest {
    let mut entries: Vec<(String, String)> = Vec::new();

    for node in doc.select("meta[content]").nodes() {
        let sel = dom_query::Selection::from(*node);
        let Some(content) = sel.attr("content") else {
            continue;
        };
        let content = content.trim().to_string();
        if content.is_empty() {
            continue;
        }
        for attr in ["name", "property", "itemprop"] {
            let Some(raw_key) = sel.attr(attr) else {
                continue;
            };
            for token in raw_key.split_whitespace() {
                let key = token.to_lowercase().replace('.', ":");
                // First declaration wins; document order keeps this stable.
                if !entries.iter().any(|(k, _)| *k == key) {
                    entries.push((key, content.clone()));
                }
            }
        }
    }

    let pick = |keys: &[&str]| -> Option<String> {
        keys.iter().find_map(|key| {
            entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    };

    Harvest {
        title: pick(TITLE_KEYS),
        byline: pick(BYLINE_KEYS).filter(|v| !looks_like_url(v)),
        excerpt: pick(DESCRIPTION_KEYS),
        site_name: pick(SITE_NAME_KEYS)
            .map(|v| v.trim_start_matches('@').trim().to_string())
            .filter(|v| !v.is_empty()),
        published: pick(PUBLISHED_KEYS),
        modified: pick(MODIFIED_KEYS),
        language: pick(LANGUAGE_KEYS).map(normalize_locale),
    }
}

/// `article:author` is specified as a profile URL; such values are not
/// human-readable bylines.
fn looks_like_url(s: &str) -> bool {
    let s = s.trim();
    s.starts_with("http://") || s.starts_with("https://")
}

/// `og:locale` uses underscore territory form (`en_US`); fold it into the
/// hyphenated tag form used everywhere else.
fn normalize_locale(s: String) -> String {
    s.replace('_', "-")
}

//! Lazy-image normalization.
//!
//! Lazy loaders park the real URL in `data-src`/`data-srcset` and leave a
//! placeholder (or nothing) in `src`. Without the loader script, which the
//! strip pass already removed, the placeholder is what a reader would see.
//! This pass promotes the parked URLs into the standard attributes and drops
//! the lazy ones, so a rerun finds nothing left to promote. The URL pass has
//! already run by this point, so promoted values are resolved against the
//! base here.

use dom_query::{Document, Selection};
use url::Url;

use super::SanitizeContext;
use crate::url_utils::create_absolute_url;

const LAZY_SRC_ATTRS: &[&str] = &["data-src", "data-lazy-src", "data-original", "data-hi-res-src"];
const LAZY_SRCSET_ATTRS: &[&str] = &["data-srcset", "data-lazy-srcset"];

pub(super) fn run(doc: Document, ctx: &SanitizeContext) -> Document {
    for node in doc.select("img, picture source").nodes() {
        let img = Selection::from(*node);

        if !img.has_attr("srcset") {
            for attr in LAZY_SRCSET_ATTRS {
                if let Some(value) = img.attr(attr) {
                    let value = value.trim().to_string();
                    if !value.is_empty() {
                        let promoted = match ctx.base {
                            Some(base) => rewrite_srcset(&value, base),
                            None => value,
                        };
                        img.set_attr("srcset", &promoted);
                        break;
                    }
                }
            }
        }

        if !has_usable_src(&img) {
            let parked = LAZY_SRC_ATTRS
                .iter()
                .find_map(|attr| img.attr(attr))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .or_else(|| {
                    img.attr("srcset")
                        .and_then(|s| best_srcset_url(&s).map(ToString::to_string))
                });
            if let Some(url) = parked {
                let promoted = match ctx.base {
                    Some(base) => create_absolute_url(&url, base),
                    None => url,
                };
                img.set_attr("src", &promoted);
            }
        }

        for attr in LAZY_SRC_ATTRS.iter().chain(LAZY_SRCSET_ATTRS) {
            img.remove_attr(attr);
        }
    }

    doc
}

/// Whether the element already points at a real image.
///
/// Empty values and inline GIF placeholders do not count.
fn has_usable_src(img: &Selection) -> bool {
    let Some(src) = img.attr("src") else {
        return false;
    };
    let src = src.trim();
    if src.is_empty() || src == "about:blank" {
        return false;
    }
    !src.starts_with("data:image/gif")
}

/// Split a `srcset` value into `(url, descriptor)` pairs.
///
/// Entries are comma-separated; the descriptor (`480w`, `2x`) is optional.
fn parse_srcset(value: &str) -> Vec<(&str, Option<&str>)> {
    value
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split_whitespace();
            let url = parts.next()?;
            Some((url, parts.next()))
        })
        .collect()
}

/// Rewrite every URL in a `srcset` value against `base`, preserving the
/// descriptors and entry order.
pub(super) fn rewrite_srcset(value: &str, base: &Url) -> String {
    parse_srcset(value)
        .into_iter()
        .map(|(url, descriptor)| {
            let resolved = create_absolute_url(url, base);
            match descriptor {
                Some(d) => format!("{resolved} {d}"),
                None => resolved,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The widest entry of a `srcset`, used to synthesize a missing `src`.
///
/// Width descriptors (`480w`) order numerically; density descriptors (`2x`)
/// likewise. Descriptor-less entries count as width zero, so any described
/// entry beats them.
fn best_srcset_url(value: &str) -> Option<&str> {
    parse_srcset(value)
        .into_iter()
        .max_by(|(_, a), (_, b)| {
            descriptor_weight(*a)
                .partial_cmp(&descriptor_weight(*b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(url, _)| url)
}

fn descriptor_weight(descriptor: Option<&str>) -> f64 {
    let Some(d) = descriptor else {
        return 0.0;
    };
    let digits = d.trim_end_matches(['w', 'x', 'W', 'X']);
    digits.parse::<f64>().unwrap_or(0.0)
}

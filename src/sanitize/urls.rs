//! Link and media URL resolution.
//!
//! Every `href`, `src` and `srcset` in the working copy is rewritten to
//! absolute form against the effective base. Attributes are only written
//! back when the value actually changes, so a rerun over already-absolute
//! URLs leaves the tree untouched. Without a base the pass is a no-op:
//! relative URLs are kept as-is rather than guessed at.

use dom_query::{Document, Selection};

use super::images::rewrite_srcset;
use super::SanitizeContext;
use crate::url_utils::create_absolute_url;

pub(super) fn run(doc: Document, ctx: &SanitizeContext) -> Document {
    let Some(base) = ctx.base else {
        return doc;
    };

    for attr in ["href", "src"] {
        let selector = format!("[{attr}]");
        for node in doc.select(&selector).nodes() {
            let sel = Selection::from(*node);
            let Some(value) = sel.attr(attr) else {
                continue;
            };
            let resolved = create_absolute_url(&value, base);
            if resolved != *value {
                sel.set_attr(attr, &resolved);
            }
        }
    }

    for node in doc.select("[srcset]").nodes() {
        let sel = Selection::from(*node);
        let Some(value) = sel.attr("srcset") else {
            continue;
        };
        let resolved = rewrite_srcset(&value, base);
        if resolved != *value {
            sel.set_attr("srcset", &resolved);
        }
    }

    doc
}

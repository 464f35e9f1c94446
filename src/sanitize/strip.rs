//! Structural removal: nodes that can never be article content.
//!
//! Scripts, styles and embeds go first, then anything the page itself marks
//! as hidden. Removal is by subtree, so a hidden wrapper takes its visible
//! descendants with it; a page that hides real content behind a consent
//! wall is presenting the hidden state, and that is what we extract.

use dom_query::{Document, Selection};

use super::SanitizeContext;
use crate::patterns::HIDDEN_STYLE;

/// Element types that carry no renderable article content.
const DISCARDED_TAGS: &str = "script, style, noscript, template, link, iframe, object, embed";

pub(super) fn run(doc: Document, _ctx: &SanitizeContext) -> Document {
    doc.select(DISCARDED_TAGS).remove();
    doc.select("[hidden]").remove();
    doc.select(r#"[aria-hidden="true"]"#).remove();

    // Inline styles are matched textually; the working copy has no CSS
    // cascade, so `style="display:none"` is the strongest signal available.
    let styled = doc.select("[style]");
    for node in styled.nodes() {
        let sel = Selection::from(*node);
        if let Some(style) = sel.attr("style") {
            if HIDDEN_STYLE.is_match(&style) {
                sel.remove();
            }
        }
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn ctx_opts() -> Options {
        Options::default()
    }

    fn run_on(html: &str) -> Document {
        let opts = ctx_opts();
        let ctx = SanitizeContext {
            base: None,
            opts: &opts,
        };
        run(Document::from(html), &ctx)
    }

    #[test]
    fn scripts_and_styles_are_removed() {
        let doc = run_on(
            "<div><script>x()</script><style>p{}</style><noscript>n</noscript><p>Keep</p></div>",
        );
        let html = doc.html().to_string();
        assert!(!html.contains("script"));
        assert!(!html.contains("style"));
        assert!(html.contains("<p>Keep</p>"));
    }

    #[test]
    fn hidden_markers_take_their_subtree() {
        let doc = run_on(
            "<div>\
             <div hidden><p>gone</p></div>\
             <div aria-hidden=\"true\"><p>also gone</p></div>\
             <p style=\"display: none\">styled away</p>\
             <p style=\"color: red\">Keep</p>\
             </div>",
        );
        let text = doc.select("body").text().to_string();
        assert!(!text.contains("gone"));
        assert!(!text.contains("styled away"));
        assert!(text.contains("Keep"));
    }
}

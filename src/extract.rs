//! Extraction orchestration.
//!
//! Wires the stages together: parse once, locate the candidate, resolve
//! metadata, sanitize. Metadata runs whether or not a candidate was found,
//! so a page with no recognizable article still yields its title and
//! description. The one hard failure is an unparseable caller base URL,
//! rejected before any work happens.

use dom_query::Document;
use tracing::debug;
use url::Url;

use crate::article::Article;
use crate::error::{Error, Result};
use crate::locator;
use crate::metadata;
use crate::options::Options;
use crate::sanitize;
use crate::url_utils;

pub(crate) fn run(html: &str, base_url: Option<&str>, opts: &Options) -> Result<Article> {
    let caller_base = base_url
        .map(|raw| {
            Url::parse(raw.trim()).map_err(|source| Error::InvalidBaseUrl {
                url: raw.to_string(),
                source,
            })
        })
        .transpose()?;

    let doc = Document::from(html);
    let base = url_utils::effective_base(&doc, caller_base.as_ref());

    let candidate = locator::try_find_candidate_with_options(&doc, opts);

    let info = metadata::resolve(
        &doc,
        candidate.as_ref().map(|c| &c.selection),
        base.as_ref(),
        opts,
    );

    let content = match &candidate {
        Some(c) => {
            debug!(score = c.score, path = %c.path, "sanitizing located candidate");
            Some(sanitize::sanitize(&c.selection, base.as_ref(), opts))
        }
        None => {
            debug!("no candidate located; returning metadata only");
            None
        }
    };

    Ok(Article { info, content })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROSE: &str = "The committee heard four hours of testimony on Tuesday, \
        covering the design of the system, the warnings that preceded the failure, \
        and the decisions that allowed it to stay in service.";

    #[test]
    fn invalid_base_url_is_rejected_up_front() {
        let err = run("<html></html>", Some("not a url"), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    fn metadata_survives_a_contentless_page() {
        let html = r#"<html><head>
            <title>Only Navigation | Example</title>
            <meta property="og:title" content="Only Navigation">
            </head><body><nav><a href="/">Home</a></nav></body></html>"#;
        let article = run(html, None, &Options::default()).unwrap();
        assert!(article.content.is_none());
        assert_eq!(article.info.title, "Only Navigation");
    }

    #[test]
    fn full_pipeline_produces_cleaned_content() {
        let html = format!(
            r#"<html><head><title>Story</title></head><body>
            <div id="main"><article>
            <p>{PROSE}</p><p>{PROSE}</p>
            <a href="/more">Read more</a>
            </article></div></body></html>"#
        );
        let article = run(&html, Some("https://example.org/a/b.html"), &Options::default())
            .unwrap();
        let content = article.content_html().unwrap();
        assert!(content.contains("testimony"));
        assert!(content.contains("https://example.org/more"));
    }
}

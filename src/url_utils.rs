//! URL utilities for validation and resolution.
//!
//! Relative URLs in the cleaned content are rewritten against an *effective*
//! base: the document's own `<base href>` element when present (itself
//! resolved against the caller-supplied base if relative), otherwise the
//! caller-supplied base directly.

use dom_query::Document;
use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - whether the URL is absolute and the parsed
///   URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Convert a relative or absolute URL to absolute form.
///
/// Special schemes (`data:`, `javascript:`, `mailto:`, `tel:`) and URLs that
/// are already absolute pass through unchanged. A URL that cannot be resolved
/// is also returned unchanged; a broken link is better than a fabricated one.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    if url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    let (is_abs, _) = is_absolute_url(url_str);
    if is_abs {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Compute the effective base for a document.
///
/// The first `<base href>` element wins when its value is absolute, or when
/// it resolves against the caller base. Otherwise the caller base is used
/// as-is.
#[must_use]
pub fn effective_base(doc: &Document, caller: Option<&Url>) -> Option<Url> {
    let base_el = doc.select_single("base[href]");
    if let Some(href) = base_el.attr("href") {
        let href = href.trim();
        let (is_abs, parsed) = is_absolute_url(href);
        if is_abs {
            return parsed;
        }
        if let Some(caller) = caller {
            if let Ok(resolved) = caller.join(href) {
                return Some(resolved);
            }
        }
    }
    caller.cloned()
}

/// Extract the host name from a URL, for the site-name fallback.
#[must_use]
pub fn host_name(url: &Url) -> Option<String> {
    url.host_str().map(|host| {
        host.strip_prefix("www.")
            .filter(|rest| rest.contains('.'))
            .unwrap_or(host)
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_detection() {
        let (is_abs, parsed) = is_absolute_url("https://example.org/a");
        assert!(is_abs);
        assert!(parsed.is_some());

        assert!(!is_absolute_url("/img/x.png").0);
        assert!(!is_absolute_url("ftp://example.org").0);
        assert!(!is_absolute_url("").0);
    }

    #[test]
    fn relative_urls_resolve_against_base() {
        let base = Url::parse("http://example.org/a/b.html").unwrap();
        assert_eq!(
            create_absolute_url("/img/x.png", &base),
            "http://example.org/img/x.png"
        );
        assert_eq!(
            create_absolute_url("y.png", &base),
            "http://example.org/a/y.png"
        );
    }

    #[test]
    fn special_schemes_pass_through() {
        let base = Url::parse("http://example.org/").unwrap();
        assert_eq!(
            create_absolute_url("data:image/gif;base64,R0lGOD", &base),
            "data:image/gif;base64,R0lGOD"
        );
        assert_eq!(
            create_absolute_url("mailto:a@example.org", &base),
            "mailto:a@example.org"
        );
    }

    #[test]
    fn base_element_overrides_caller_base() {
        let doc = Document::from(
            r#"<html><head><base href="https://cdn.example.org/"></head><body></body></html>"#,
        );
        let caller = Url::parse("http://example.org/a/b.html").unwrap();
        let base = effective_base(&doc, Some(&caller)).unwrap();
        assert_eq!(base.as_str(), "https://cdn.example.org/");
    }

    #[test]
    fn relative_base_element_resolves_against_caller() {
        let doc = Document::from(
            r#"<html><head><base href="/static/"></head><body></body></html>"#,
        );
        let caller = Url::parse("http://example.org/a/b.html").unwrap();
        let base = effective_base(&doc, Some(&caller)).unwrap();
        assert_eq!(base.as_str(), "http://example.org/static/");
    }

    #[test]
    fn missing_base_element_falls_back_to_caller() {
        let doc = Document::from("<html><head></head><body></body></html>");
        let caller = Url::parse("http://example.org/a/b.html").unwrap();
        let base = effective_base(&doc, Some(&caller)).unwrap();
        assert_eq!(base.as_str(), "http://example.org/a/b.html");
    }

    #[test]
    fn host_name_strips_www() {
        let url = Url::parse("https://www.example.org/x").unwrap();
        assert_eq!(host_name(&url).unwrap(), "example.org");
        let bare = Url::parse("https://example.org/x").unwrap();
        assert_eq!(host_name(&bare).unwrap(), "example.org");
    }
}

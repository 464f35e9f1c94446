//! End-to-end extraction tests over complete pages.

use readerview::{extract, extract_with_options, Direction, Options};

const PROSE: &str = "The committee heard four hours of testimony on Tuesday, \
    covering the design of the system, the warnings that preceded the failure, \
    and the decisions that allowed it to stay in service despite them.";

fn page(head: &str, body: &str) -> String {
    format!("<html><head>{head}</head><body>{body}</body></html>")
}

fn article_body(extra: &str) -> String {
    format!(
        "<nav><a href='/'>Home</a><a href='/news'>News</a></nav>\
         <div id='main'><article class='post'>\
         <p>{PROSE}</p><p>{PROSE}</p><p>{PROSE}</p>{extra}\
         </article></div>\
         <footer><p>All rights reserved, contact us, terms of use.</p></footer>"
    )
}

#[test]
fn declared_metadata_beats_body_heuristics() {
    let html = page(
        "<title>Something Else | Example News</title>\
         <meta property='og:title' content='Declared Title'>\
         <meta property='og:description' content='Declared description.'>\
         <meta name='author' content='Jo Writer'>\
         <meta property='og:site_name' content='Example News'>",
        &article_body("<div class='byline'>By Somebody Else</div><h1>Body Heading</h1>"),
    );
    let article = extract(&html, None).unwrap();

    assert_eq!(article.info.title, "Declared Title");
    assert_eq!(article.info.excerpt, "Declared description.");
    assert_eq!(article.info.byline.as_deref(), Some("Jo Writer"));
    assert_eq!(article.info.site_name.as_deref(), Some("Example News"));
}

#[test]
fn title_is_reconciled_against_the_site_name() {
    let html = page(
        "<title>Example \u{2014} Example News</title>\
         <meta property='og:site_name' content='Example News'>",
        &article_body(""),
    );
    let article = extract(&html, None).unwrap();
    assert_eq!(article.info.title, "Example");
}

#[test]
fn nav_only_page_yields_metadata_without_content() {
    let html = page(
        "<title>Site Map | Example</title>",
        "<nav><a href='/'>Home</a><a href='/a'>A</a><a href='/b'>B</a></nav>",
    );
    let article = extract(&html, None).unwrap();

    assert!(article.content.is_none());
    assert!(article.content_html().is_none());
    assert_eq!(article.info.title, "Site Map");
}

#[test]
fn paragraphs_directly_under_body_are_extracted() {
    let html = page(
        "<title>Bare Page</title>",
        &format!("<p>{PROSE}</p><p>{PROSE}</p><p>{PROSE}</p>"),
    );
    let article = extract(&html, None).unwrap();

    let text = article.content_text().unwrap();
    assert!(text.contains("testimony"));
    // The synthesized wrapper keeps the content rooted at one element.
    let root = article.content_root().unwrap();
    assert_eq!(root.select("p").length(), 3);
}

#[test]
fn identical_siblings_resolve_first_in_document_order() {
    let html = page(
        "<title>T</title>",
        &format!(
            "<div id='first'><p>{PROSE}</p></div>\
             <div id='second'><p>{PROSE}</p></div>"
        ),
    );
    let article = extract(&html, None).unwrap();
    let root = article.content_root().unwrap();
    assert_eq!(root.attr("id").as_deref(), Some("first"));
}

#[test]
fn extraction_is_deterministic() {
    let html = page(
        "<title>Story | Site</title><meta name='description' content='D.'>",
        &article_body("<p>Short tail with a <a href='/x'>link</a>, for variety.</p>"),
    );
    let first = extract(&html, Some("https://example.org/a")).unwrap();
    let second = extract(&html, Some("https://example.org/a")).unwrap();

    assert_eq!(first.info, second.info);
    assert_eq!(first.content_html(), second.content_html());
}

#[test]
fn relative_urls_resolve_against_the_caller_base() {
    let html = page(
        "<title>T</title>",
        &article_body(
            "<p>Read the <a href='/report'>report</a> and the <a href='notes.html'>notes</a> \
             for the full background on the hearings described above.</p>",
        ),
    );
    let article = extract(&html, Some("https://example.org/posts/one.html")).unwrap();
    let content = article.content_html().unwrap();

    assert!(content.contains("https://example.org/report"));
    assert!(content.contains("https://example.org/posts/notes.html"));
}

#[test]
fn base_element_overrides_the_caller_base() {
    let html = page(
        "<title>T</title><base href='https://cdn.example.org/assets/'>",
        &article_body("<p>See the <a href='guide.html'>guide</a> for details, please.</p>"),
    );
    let article = extract(&html, Some("https://example.org/posts/one.html")).unwrap();
    let content = article.content_html().unwrap();

    assert!(content.contains("https://cdn.example.org/assets/guide.html"));
}

#[test]
fn without_a_base_relative_urls_are_kept() {
    let html = page("<title>T</title>", &article_body("<p>A <a href='/x'>link</a> stays put here.</p>"));
    let article = extract(&html, None).unwrap();
    assert!(article.content_html().unwrap().contains("href=\"/x\""));
}

#[test]
fn lazy_images_are_promoted_and_resolved() {
    let html = page(
        "<title>T</title>",
        &article_body(
            "<img data-src='/img/real.png' src='data:image/gif;base64,R0lGOD' alt='photo'>",
        ),
    );
    let article = extract(&html, Some("https://example.org/")).unwrap();
    let content = article.content_html().unwrap();

    assert!(content.contains("https://example.org/img/real.png"));
    assert!(!content.contains("data-src"));
    assert!(!content.contains("data:image/gif"));
}

#[test]
fn scripts_styles_and_hidden_nodes_are_cleaned() {
    let html = page(
        "<title>T</title>",
        &article_body(
            "<script>track()</script>\
             <style>p { color: red }</style>\
             <p style='display:none'>hidden sentence</p>\
             <div hidden><p>also hidden</p></div>\
             <font size='2'>legacy styled</font>",
        ),
    );
    let article = extract(&html, None).unwrap();
    let content = article.content_html().unwrap();

    assert!(!content.contains("track()"));
    assert!(!content.contains("color: red"));
    assert!(!content.contains("hidden sentence"));
    assert!(!content.contains("also hidden"));
    assert!(!content.contains("<font"));
    assert!(content.contains("legacy styled"));
}

#[test]
fn br_runs_become_paragraph_boundaries() {
    let html = page(
        "<title>T</title>",
        &article_body(&format!("<p>First half here<br><br>Second half there, {PROSE}</p>")),
    );
    let article = extract(&html, None).unwrap();
    let content = article.content_html().unwrap();

    assert!(!content.to_lowercase().contains("<br><br>"));
    assert!(content.contains("First half here"));
    assert!(content.contains("Second half there"));
}

#[test]
fn share_widgets_inside_the_article_are_pruned() {
    let html = page(
        "<title>T</title>",
        &article_body(
            "<div class='social-share'>\
             <a href='#'>Tweet</a><a href='#'>Share</a></div>",
        ),
    );
    let article = extract(&html, None).unwrap();
    assert!(!article.content_html().unwrap().contains("social-share"));
}

#[test]
fn sanitized_content_is_stable_under_reextraction() {
    let html = page(
        "<title>Story | Site</title>",
        &article_body(
            "<script>x()</script><img data-src='/i.png'>\
             <div class='share-bar'><a href='#'>Share</a></div>",
        ),
    );
    let article = extract(&html, Some("https://example.org/")).unwrap();
    let once = article.content_html().unwrap();

    let rewrapped =
        format!("<html><head><title>Story | Site</title></head><body>{once}</body></html>");
    let again = extract(&rewrapped, Some("https://example.org/")).unwrap();
    let twice = again.content_html().unwrap();

    assert_eq!(once, twice);
}

#[test]
fn rtl_direction_and_language_are_detected() {
    let html = format!(
        "<html lang='ar'><head><title>T</title></head><body dir='rtl'>\
         <div id='main'><article><p>{PROSE}</p><p>{PROSE}</p></article></div>\
         </body></html>"
    );
    let article = extract(&html, None).unwrap();

    assert_eq!(article.info.dir, Some(Direction::Rtl));
    assert_eq!(article.info.language.as_deref(), Some("ar"));
}

#[test]
fn published_time_prefers_structured_declarations() {
    let html = page(
        "<title>T</title>\
         <meta property='article:published_time' content='2024-03-05T10:30:00+02:00'>",
        &article_body("<time datetime='2020-01-01T00:00:00Z'>old date in body</time>"),
    );
    let article = extract(&html, None).unwrap();
    let published = article.info.published.unwrap();
    assert_eq!(published.to_rfc3339(), "2024-03-05T10:30:00+02:00");
}

#[test]
fn excerpt_falls_back_to_the_first_substantial_paragraph() {
    let html = page("<title>T</title>", &article_body(""));
    let article = extract(&html, None).unwrap();
    assert!(article.info.excerpt.starts_with("The committee heard"));
}

#[test]
fn caller_options_raise_the_bar() {
    let html = page(
        "<title>T</title>",
        &format!("<div><p>{PROSE}</p></div>"),
    );
    let strict = Options {
        min_candidate_score: 1000.0,
        ..Options::default()
    };
    let article = extract_with_options(&html, None, &strict).unwrap();
    assert!(article.content.is_none());

    let relaxed = extract(&html, None).unwrap();
    assert!(relaxed.content.is_some());
}

#[test]
fn invalid_base_url_is_an_error() {
    let err = extract("<html></html>", Some("::not a url::")).unwrap_err();
    assert!(err.to_string().contains("invalid base URL"));
}

//! Reader-mode article extraction for HTML pages.
//!
//! `readerview` takes raw HTML and produces the article a reader came for:
//! the main content subtree, cleaned of navigation, share widgets, hidden
//! nodes and lazy-loading scaffolding, together with resolved metadata
//! (title, byline, excerpt, site name, language, direction, publication
//! time).
//!
//! The pipeline has three independent stages:
//!
//! * **locator** scores paragraph-bearing containers and picks the most
//!   article-like one, or reports that none qualifies;
//! * **metadata** resolves the descriptive fields, preferring structured
//!   declarations (JSON-LD, Open Graph, Dublin Core) over body heuristics;
//! * **sanitize** rewrites a private copy of the candidate through a fixed
//!   sequence of idempotent cleaning passes.
//!
//! A page without a recognizable article is not an error: extraction
//! returns an [`Article`] with `content: None` and whatever metadata the
//! head declared. The only failure mode is a base URL the caller supplies
//! that does not parse.
//!
//! # Example
//!
//! ```
//! let html = r#"<html><head>
//!     <title>Storm Closes Mountain Pass - The Gazette</title>
//!     <meta property="og:site_name" content="The Gazette">
//!     </head><body>
//!     <nav><a href="/">Home</a><a href="/weather">Weather</a></nav>
//!     <article>
//!     <p>Heavy snowfall closed the mountain pass on Tuesday morning,
//!     stranding dozens of vehicles and forcing crews to work through
//!     the night, officials said, with no reopening date announced.</p>
//!     <p>The closure, the third this winter, renewed calls for the
//!     avalanche galleries promised after the 2019 season, a project
//!     that remains unfunded despite repeated commitments.</p>
//!     <p>See the <a href="/road-status">road status page</a> for
//!     updates as conditions change through the week.</p>
//!     </article></body></html>"#;
//!
//! let article = readerview::extract(html, Some("https://gazette.example/news/pass"))?;
//!
//! assert_eq!(article.info.title, "Storm Closes Mountain Pass");
//! assert_eq!(article.info.site_name.as_deref(), Some("The Gazette"));
//!
//! let content = article.content_html().expect("article content");
//! assert!(content.contains("https://gazette.example/road-status"));
//! assert!(!content.contains("<nav"));
//! # Ok::<(), readerview::Error>(())
//! ```

mod article;
mod error;
mod extract;
mod options;
mod patterns;

pub mod link_density;
pub mod locator;
pub mod metadata;
pub mod sanitize;
pub mod url_utils;

pub use article::{Article, ArticleInfo, Direction};
pub use error::{Error, Result};
pub use options::Options;

/// Extract the article from an HTML page using default options.
///
/// `base_url` is the address the page was fetched from; links in the
/// cleaned content are resolved against it (or against a `<base href>`
/// element when the page declares one). Pass `None` to leave relative
/// URLs untouched.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `base_url` does not parse.
pub fn extract(html: &str, base_url: Option<&str>) -> Result<Article> {
    extract::run(html, base_url, &Options::default())
}

/// Extract the article with caller-supplied options.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `base_url` does not parse.
pub fn extract_with_options(
    html: &str,
    base_url: Option<&str>,
    options: &Options,
) -> Result<Article> {
    extract::run(html, base_url, options)
}

//! Error types for readerview.
//!
//! Extraction is deliberately total: a page without a recognizable article
//! yields an [`crate::Article`] with `content: None`, and missing metadata
//! fields stay `None`. The only condition surfaced as an error is a caller
//! contract violation - a base URL that cannot be parsed, since every link
//! in the cleaned content depends on it.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller-supplied base URL could not be parsed.
    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl {
        /// The offending URL string as supplied.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

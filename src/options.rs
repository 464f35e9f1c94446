//! Configuration options for content extraction.
//!
//! The keyword lists and score thresholds are heuristics calibrated against a
//! corpus of real pages, and sites differ; everything here can be overridden
//! by the caller without recompilation. An `Options` value is threaded into
//! the locator and sanitizer by reference and never stored in process-wide
//! state, so concurrent extractions with different tunables cannot interfere.

use crate::patterns::{DEFAULT_NEGATIVE_KEYWORDS, DEFAULT_POSITIVE_KEYWORDS};

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use readerview::Options;
///
/// let options = Options {
///     max_depth: 20,
///     min_candidate_score: 25.0,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum depth below `<body>` the candidate search descends.
    ///
    /// Bounds total work on pathologically nested pages.
    ///
    /// Default: `100`
    pub max_depth: usize,

    /// Minimum score a candidate must reach to be considered an article root.
    ///
    /// The best node scoring below this yields a not-found result, not an
    /// error.
    ///
    /// Default: `10.0`
    pub min_candidate_score: f64,

    /// Class/id tokens that raise a container's score (matched
    /// case-insensitively as substrings).
    pub positive_keywords: Vec<String>,

    /// Class/id tokens that lower a container's score and mark link clusters
    /// for removal during sanitization.
    pub negative_keywords: Vec<String>,

    /// Score added (positive match) or subtracted (negative match) per
    /// class/id attribute.
    ///
    /// Default: `25.0`
    pub keyword_weight: f64,

    /// Minimum character count for a text block to contribute to scoring,
    /// and for a paragraph to qualify as an excerpt fallback.
    ///
    /// Default: `25`
    pub char_threshold: usize,

    /// How many ancestor levels receive a share of a block's score.
    ///
    /// Default: `5`
    pub max_ancestor_levels: usize,

    /// Maximum proportion of link text tolerated in a block before it is
    /// treated as navigation during sanitization.
    ///
    /// Default: `0.8`
    pub max_link_density: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: 100,
            min_candidate_score: 10.0,
            positive_keywords: DEFAULT_POSITIVE_KEYWORDS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            negative_keywords: DEFAULT_NEGATIVE_KEYWORDS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            keyword_weight: 25.0,
            char_threshold: 25,
            max_ancestor_levels: 5,
            max_link_density: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.max_depth, 100);
        assert!((opts.min_candidate_score - 10.0).abs() < f64::EPSILON);
        assert!((opts.keyword_weight - 25.0).abs() < f64::EPSILON);
        assert_eq!(opts.char_threshold, 25);
        assert_eq!(opts.max_ancestor_levels, 5);
        assert!((opts.max_link_density - 0.8).abs() < f64::EPSILON);
        assert!(opts.positive_keywords.iter().any(|k| k == "article"));
        assert!(opts.negative_keywords.iter().any(|k| k == "sidebar"));
    }

    #[test]
    fn keyword_lists_are_caller_replaceable() {
        let opts = Options {
            positive_keywords: vec!["prose".to_string()],
            negative_keywords: vec!["chrome".to_string()],
            ..Options::default()
        };

        assert_eq!(opts.positive_keywords, vec!["prose"]);
        assert_eq!(opts.negative_keywords, vec!["chrome"]);
    }
}

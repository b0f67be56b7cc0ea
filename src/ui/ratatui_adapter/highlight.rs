//! Match highlighting for rendered titles
//!
//! Filtering is decided by the selector's scorer. This only finds which
//! title characters to emphasise, using nucleo's fuzzy matcher.

use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};

/// Reusable highlighter for one query
pub struct Highlighter {
    pattern: Option<Pattern>,
    matcher: Matcher,
    buf: Vec<char>,
}

impl Highlighter {
    #[must_use]
    pub fn new(query: &str) -> Self {
        let pattern = (!query.trim().is_empty())
            .then(|| Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart));
        Self {
            pattern,
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
        }
    }

    /// Sorted, de-duplicated char positions in `text` matched by the query
    pub fn indices(&mut self, text: &str) -> Vec<usize> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };
        let mut indices = Vec::new();
        let haystack = Utf32Str::new(text, &mut self.buf);
        if pattern.indices(haystack, &mut self.matcher, &mut indices).is_none() {
            return Vec::new();
        }
        indices.sort_unstable();
        indices.dedup();
        indices.into_iter().map(|i| i as usize).collect()
    }
}

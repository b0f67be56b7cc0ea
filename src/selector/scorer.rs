//! Fuzzy match scoring for case records
//!
//! A case matches a query when the best partial alignment of the query
//! against the case's composite text (`id lp title desc`) has a normalized
//! Indel similarity strictly above [`MATCH_THRESHOLD`].
//!
//! Scoring only decides membership. It never reorders the visible list.

use crate::cases::Case;

/// Minimum score (exclusive) for a case to be shown
pub const MATCH_THRESHOLD: f64 = 0.8;

/// Normalize text for comparison
///
/// Lower-cases alphanumerics, turns every other character into a space and
/// trims the ends. Inner runs of spaces are kept as-is.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                ' '
            }
        })
        .collect();
    mapped.trim().to_string()
}

/// The text a case is matched against
#[must_use]
pub fn composite(case: &Case) -> String {
    [
        case.id.as_str(),
        case.lp.as_str(),
        case.title.as_str(),
        case.desc.as_str(),
    ]
    .join(" ")
}

/// Best similarity in `[0, 1]` of the shorter string against any window of the longer
///
/// Both inputs are normalized first. Two empty strings are identical; an
/// empty string against a non-empty one scores zero.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();
    partial_ratio_chars(&a, &b)
}

fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    let (needle, haystack) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if needle.is_empty() {
        return if haystack.is_empty() { 1.0 } else { 0.0 };
    }

    let best = best_window(needle, haystack);
    if a.len() == b.len() && best < 1.0 {
        return best.max(best_window(haystack, needle));
    }
    best
}

/// Slide `needle` across `haystack`, including the ragged edges
fn best_window(needle: &[char], haystack: &[char]) -> f64 {
    let n = needle.len();
    let h = haystack.len();

    let prefixes = (1..n).map(|end| &haystack[..end]);
    let full = (0..=h - n).map(|start| &haystack[start..start + n]);
    let suffixes = (h - n + 1..h).map(|start| &haystack[start..]);

    let mut best = 0.0_f64;
    for window in prefixes.chain(full).chain(suffixes) {
        let ratio = rapidfuzz::fuzz::ratio(needle.iter().copied(), window.iter().copied());
        if ratio > best {
            best = ratio;
            if best >= 1.0 {
                break;
            }
        }
    }
    best
}

/// Score a case against a non-empty query
///
/// Callers treat the empty query as "match everything" and never score it.
/// A query made only of whitespace or punctuation is still scored (and
/// matches nothing).
#[must_use]
pub fn score(case: &Case, query: &str) -> f64 {
    QueryScorer::new(query).score(case)
}

/// Whether a case clears the match threshold for a query
#[must_use]
pub fn is_match(case: &Case, query: &str) -> bool {
    clears_threshold(score(case, query))
}

/// Strict comparison against [`MATCH_THRESHOLD`]
#[must_use]
pub fn clears_threshold(score: f64) -> bool {
    score > MATCH_THRESHOLD
}

/// A query normalized once and reused across many cases
#[derive(Debug, Clone)]
pub struct QueryScorer {
    query: Vec<char>,
}

impl QueryScorer {
    /// Prepare a query for scoring
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            query: normalize(query).chars().collect(),
        }
    }

    /// Score one case
    #[must_use]
    pub fn score(&self, case: &Case) -> f64 {
        let text: Vec<char> = normalize(&composite(case)).chars().collect();
        partial_ratio_chars(&text, &self.query)
    }

    /// Whether one case clears the threshold
    #[must_use]
    pub fn matches(&self, case: &Case) -> bool {
        clears_threshold(self.score(case))
    }
}

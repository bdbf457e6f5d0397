//! Text normalization ahead of sequence comparison.
//!
//! Comparison runs over lowercased text with collapsed whitespace so that
//! casing and formatting differences never count as divergence.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Multiple whitespace pattern
    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize text for sequence comparison: lowercase, trim the ends,
/// collapse every whitespace run to a single space.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    MULTI_SPACE.replace_all(lowered.trim(), " ").to_string()
}

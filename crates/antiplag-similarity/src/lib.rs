//! Antiplag Similarity: LCS-Based Overlap Scoring
//!
//! Scores the literal overlap of two texts as a percentage of their
//! combined normalized length, using the longest common subsequence of the
//! character sequences. Subsequence, not substring: reordered but
//! overlapping content still scores non-trivially.
//!
//! ```
//! use antiplag_similarity::similarity;
//!
//! assert_eq!(similarity("The CAT sat", "the cat  sat"), 100.0);
//! assert_eq!(similarity("", "anything"), 0.0);
//! ```
//!
//! The engine is a total function over string inputs. Verdict bands for
//! the resulting percentage live in [`antiplag_core::Verdict`].

pub mod lcs;
pub mod normalizer;

pub use antiplag_core::verdict::{Verdict, PLAGIARISM_THRESHOLD, SUSPICIOUS_THRESHOLD};
pub use normalizer::normalize;

/// Similarity of two texts as a percentage in [0, 100], rounded to two
/// decimals (half-up on the hundredths digit).
///
/// Both inputs are normalized independently before comparison; if either
/// side normalizes to nothing, the score is 0.0 and no comparison runs.
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    let norm_a = normalize(text_a);
    let norm_b = normalize(text_b);
    if norm_a.is_empty() || norm_b.is_empty() {
        return 0.0;
    }

    let a: Vec<char> = norm_a.chars().collect();
    let b: Vec<char> = norm_b.chars().collect();
    let lcs_len = lcs::lcs_length(&a, &b);
    let raw = (2.0 * lcs_len as f64) / (a.len() + b.len()) as f64 * 100.0;
    round_two_decimals(raw)
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

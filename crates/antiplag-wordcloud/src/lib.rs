//! Antiplag Wordcloud: Ranked Word Frequencies
//!
//! Turns raw submission text into a ranked word-frequency summary for
//! display: tokenize, drop short tokens and stop words, count, rank,
//! truncate, and scale each retained word into a display size.
//!
//! ```
//! use antiplag_wordcloud::{word_cloud, DEFAULT_MAX_WORDS};
//!
//! let result = word_cloud("Cats chase cats, dogs watch cats.", DEFAULT_MAX_WORDS);
//! assert_eq!(result.words[0].word, "cats");
//! assert_eq!(result.words[0].count, 3);
//! ```
//!
//! The engine is a total function: any input, including empty text, yields
//! a well-formed (possibly empty) result.

pub mod stopwords;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use stopwords::{is_stop_word, STOP_WORDS};

/// Cap on retained words when the caller does not give one.
pub const DEFAULT_MAX_WORDS: usize = 30;

/// Tokens shorter than this never survive filtering.
const MIN_WORD_LEN: usize = 3;

lazy_static! {
    /// Anything that is not a basic Latin letter, a Cyrillic letter, or
    /// whitespace. Applied to lowercased text, so uppercase ranges are
    /// already folded away.
    static ref NON_LETTERS: Regex = Regex::new(r"[^a-zа-яё\s]").unwrap();
}

/// One ranked word with its display size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The word, lowercased.
    pub word: String,
    /// Occurrences among the filtered tokens.
    pub count: u32,
    /// Display size in [12, 48]; a flat 24 when all retained counts are
    /// equal.
    pub size: u32,
}

/// Ranked word frequencies for one text, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequencyResult {
    /// Retained entries in rank order.
    pub words: Vec<WordEntry>,
    /// Sum of occurrence counts across the retained entries.
    pub total_words: u32,
}

impl WordFrequencyResult {
    /// Number of distinct retained words.
    pub fn unique_words(&self) -> usize {
        self.words.len()
    }
}

/// Rank the words of `text` by frequency, keeping at most `max_words`
/// entries.
///
/// Tokenization lowercases the text and treats every non-letter character
/// as a separator. Tokens under three characters and stop words are
/// dropped before counting. Ranking is by descending count with
/// lexicographic order as the deterministic tie-break.
pub fn word_cloud(text: &str, max_words: usize) -> WordFrequencyResult {
    if text.trim().is_empty() || max_words == 0 {
        return WordFrequencyResult::default();
    }

    let lowered = text.to_lowercase();
    let letters_only = NON_LETTERS.replace_all(&lowered, " ");

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for token in letters_only.split_whitespace() {
        if token.chars().count() < MIN_WORD_LEN || is_stop_word(token) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, u32)> = counts.into_iter().collect();
    ranked.sort_by(|(word_a, count_a), (word_b, count_b)| {
        count_b.cmp(count_a).then_with(|| word_a.cmp(word_b))
    });
    ranked.truncate(max_words);

    if ranked.is_empty() {
        return WordFrequencyResult::default();
    }

    let max_count = ranked[0].1;
    let min_count = ranked[ranked.len() - 1].1;
    let total_words = ranked.iter().map(|(_, count)| count).sum();

    let words = ranked
        .into_iter()
        .map(|(word, count)| WordEntry {
            word: word.to_string(),
            count,
            size: display_size(count, min_count, max_count),
        })
        .collect();

    WordFrequencyResult { words, total_words }
}

/// Linear interpolation of a count into the display range [12, 48].
fn display_size(count: u32, min_count: u32, max_count: u32) -> u32 {
    if max_count == min_count {
        24
    } else {
        12 + (count - min_count) * 36 / (max_count - min_count)
    }
}

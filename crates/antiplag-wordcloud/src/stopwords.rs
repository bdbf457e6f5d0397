//! Stop words excluded from frequency ranking.
//!
//! Short function words in Russian and English: articles, conjunctions,
//! pronouns, auxiliary verb forms. Static configuration, never derived at
//! runtime.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Words never counted by the frequency engine.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // Russian
        "и", "в", "на", "с", "по", "для", "от", "к", "из", "о", "за", "при", "до",
        "не", "но", "а", "или", "что", "как", "это", "так", "же", "то", "все",
        "она", "он", "они", "мы", "вы", "я", "ты", "его", "её", "их", "ее",
        "был", "была", "было", "были", "быть", "есть", "будет",
        // English
        "the", "a", "an", "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "do", "does", "did", "will", "would", "could", "should",
        "of", "to", "in", "for", "on", "with", "at", "by", "from", "as", "into",
        "that", "which", "this", "these", "those", "it", "its",
        "and", "or", "but", "if", "then", "else", "when", "where", "who", "what",
    ])
});

/// Check membership in the stop-word set.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

//! Verdict classification for similarity scores
//!
//! Maps a similarity percentage onto the ORIGINAL / SUSPICIOUS / PLAGIARISM
//! bands used by reports and match details.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Similarity at or above this marks a pair as a reportable match.
pub const SUSPICIOUS_THRESHOLD: f64 = 50.0;

/// Similarity at or above this marks a pair as outright plagiarism.
pub const PLAGIARISM_THRESHOLD: f64 = 80.0;

/// Classification of a similarity percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Below the suspicious band: the work stands on its own.
    Original,
    /// In [50, 80): significant overlap worth a human look.
    Suspicious,
    /// At or above 80: overwhelming overlap.
    Plagiarism,
}

impl Verdict {
    /// Classify a similarity percentage. Band boundaries are inclusive on
    /// the lower end: 50.0 is already SUSPICIOUS, 80.0 already PLAGIARISM.
    pub fn for_similarity(similarity: f64) -> Self {
        if similarity >= PLAGIARISM_THRESHOLD {
            Verdict::Plagiarism
        } else if similarity >= SUSPICIOUS_THRESHOLD {
            Verdict::Suspicious
        } else {
            Verdict::Original
        }
    }

    /// Check whether the verdict flags the work at all (suspicious or worse).
    pub fn is_flagged(&self) -> bool {
        matches!(self, Verdict::Suspicious | Verdict::Plagiarism)
    }

    /// Canonical uppercase label, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Original => "ORIGINAL",
            Verdict::Suspicious => "SUSPICIOUS",
            Verdict::Plagiarism => "PLAGIARISM",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Verdict::for_similarity(49.99), Verdict::Original);
        assert_eq!(Verdict::for_similarity(50.00), Verdict::Suspicious);
        assert_eq!(Verdict::for_similarity(79.99), Verdict::Suspicious);
        assert_eq!(Verdict::for_similarity(80.00), Verdict::Plagiarism);
    }

    #[test]
    fn test_band_extremes() {
        assert_eq!(Verdict::for_similarity(0.0), Verdict::Original);
        assert_eq!(Verdict::for_similarity(100.0), Verdict::Plagiarism);
    }

    #[test]
    fn test_flagged() {
        assert!(!Verdict::Original.is_flagged());
        assert!(Verdict::Suspicious.is_flagged());
        assert!(Verdict::Plagiarism.is_flagged());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Verdict::Plagiarism).unwrap();
        assert_eq!(json, "\"PLAGIARISM\"");

        let parsed: Verdict = serde_json::from_str("\"SUSPICIOUS\"").unwrap();
        assert_eq!(parsed, Verdict::Suspicious);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Verdict::Original), "ORIGINAL");
        assert_eq!(Verdict::Plagiarism.as_str(), "PLAGIARISM");
    }
}

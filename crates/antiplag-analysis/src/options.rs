//! Tuning knobs for the orchestrator
use serde::{Deserialize, Serialize};

/// Bounded-concurrency settings for one analysis run.
///
/// Deserializable so an embedding layer can take these from its own
/// configuration source; every field has a working default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Candidate fetch-and-compare tasks allowed in flight at once.
    #[serde(default = "default_candidate_concurrency")]
    pub candidate_concurrency: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            candidate_concurrency: default_candidate_concurrency(),
        }
    }
}

fn default_candidate_concurrency() -> usize {
    8
}

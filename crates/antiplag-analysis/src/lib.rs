//! Antiplag Analysis: Corpus Comparison Orchestration
//!
//! Drives one submission's plagiarism check end to end: select predecessor
//! candidates, fetch their content, score each pair with the similarity
//! engine, aggregate the matches, and settle the resulting report in its
//! terminal status. The word-frequency read side lives here too.
//!
//! Storage and transport stay behind the `antiplag-core` collaborator
//! traits; [`AnalysisService`] receives them once at construction.

pub mod options;
pub mod service;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use antiplag_core::{AnalysisError, Report, ReportStatus, Verdict, Work};
pub use antiplag_wordcloud::{WordEntry, WordFrequencyResult};
pub use options::AnalysisOptions;
pub use service::AnalysisService;

/// Status message carried by the trigger acknowledgment.
pub const ANALYSIS_STARTED: &str = "Analysis started";

/// Acknowledgment returned when an analysis is triggered.
///
/// Echoes the work's identifying fields; the analysis outcome itself is
/// observed later through the report read side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStarted {
    /// The work the analysis was triggered for.
    pub work_id: Uuid,
    /// Label of the owning student.
    pub student: String,
    /// Assignment the work was submitted under.
    pub assignment_id: String,
    /// Submission instant, as recorded on the work.
    pub submitted_at: DateTime<Utc>,
    /// Fixed acknowledgment message.
    pub status: String,
}

impl AnalysisStarted {
    /// Acknowledgment for a work, with the fixed status message.
    pub fn for_work(work: &Work) -> Self {
        Self {
            work_id: work.id,
            student: work.student.clone(),
            assignment_id: work.assignment_id.clone(),
            submitted_at: work.submitted_at,
            status: ANALYSIS_STARTED.to_string(),
        }
    }
}

/// Ranked word frequencies for one work's content, resolved through the
/// corpus lookup and content store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkWordCloud {
    /// The work whose content was summarized.
    pub work_id: Uuid,
    /// Retained entries in rank order.
    pub words: Vec<WordEntry>,
    /// Sum of occurrence counts across the retained entries.
    pub total_words_analyzed: u32,
    /// Number of distinct retained words.
    pub unique_words: usize,
}

impl WorkWordCloud {
    /// Wrap an engine result for one work.
    pub fn new(work_id: Uuid, result: WordFrequencyResult) -> Self {
        Self {
            work_id,
            unique_words: result.unique_words(),
            total_words_analyzed: result.total_words,
            words: result.words,
        }
    }
}

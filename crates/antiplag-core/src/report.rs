//! Report lifecycle for one analyzed work
//!
//! A report is created PENDING before any comparison starts and moves to
//! exactly one terminal status:
//!
//!   PENDING --> COMPLETED (outcome recorded)
//!       \
//!        --> FAILED (no outcome, completion instant only)
//!
//! Terminal states never regress; an attempted regression is a programming
//! error and is rejected with [`AnalysisError::InvalidTransition`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::AnalysisError;
use crate::verdict::Verdict;

/// Processing status of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Created, analysis not yet finished.
    Pending,
    /// Analysis ran to the end; outcome fields are populated.
    Completed,
    /// Analysis aborted; only the completion instant is recorded.
    Failed,
}

impl ReportStatus {
    /// Check whether the status is an end state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReportStatus::Completed | ReportStatus::Failed)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "PENDING"),
            ReportStatus::Completed => write!(f, "COMPLETED"),
            ReportStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// One prior work that scored at or above the match threshold.
///
/// Built during a single analysis run and embedded immutably into the
/// finished report; never shared outside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    /// Identifier of the matched prior work.
    pub matched_work_id: Uuid,
    /// Label of the matched work's owner.
    pub matched_student: String,
    /// Pairwise similarity, two-decimal precision.
    pub similarity_percent: f64,
    /// Submission instant of the matched work, as originally recorded.
    pub matched_submitted_at: DateTime<Utc>,
    /// Verdict derived from this pairwise similarity alone.
    pub verdict: Verdict,
}

/// Aggregated outcome of one analysis run, folded into the report on
/// completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    /// 100 minus the strongest qualifying similarity, floored at 0.
    pub originality_percent: f64,
    /// Whether any candidate reached the suspicious band.
    pub plagiarism_detected: bool,
    /// Verdict for the strongest qualifying similarity.
    pub verdict: Verdict,
    /// Qualifying matches, ascending by submission time of the matched work.
    pub matches: Vec<MatchDetail>,
}

/// Analysis outcome record for one work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Unique identifier, assigned once at creation.
    pub id: Uuid,
    /// The work this report evaluates.
    pub work_id: Uuid,
    /// Current lifecycle status.
    pub status: ReportStatus,
    /// Originality percentage, populated on COMPLETED only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originality_percent: Option<f64>,
    /// Plagiarism flag, populated on COMPLETED only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plagiarism_detected: Option<bool>,
    /// Overall verdict, populated on COMPLETED only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    /// Qualifying matches, populated on COMPLETED only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchDetail>>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Terminal-transition instant, set exactly once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Report {
    /// Create the PENDING report for a work, stamped with a fresh
    /// identifier and the current instant.
    pub fn pending(work_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            work_id,
            status: ReportStatus::Pending,
            originality_percent: None,
            plagiarism_detected: None,
            verdict: None,
            matches: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Transition PENDING -> COMPLETED, recording the aggregated outcome
    /// and the completion instant.
    pub fn complete(&mut self, outcome: AnalysisOutcome) -> Result<(), AnalysisError> {
        self.ensure_pending(ReportStatus::Completed)?;
        self.status = ReportStatus::Completed;
        self.originality_percent = Some(outcome.originality_percent);
        self.plagiarism_detected = Some(outcome.plagiarism_detected);
        self.verdict = Some(outcome.verdict);
        self.matches = Some(outcome.matches);
        self.completed_at = Some(Utc::now());
        Ok(())
    }

    /// Transition PENDING -> FAILED. Outcome fields stay empty; only the
    /// completion instant is recorded.
    pub fn fail(&mut self) -> Result<(), AnalysisError> {
        self.ensure_pending(ReportStatus::Failed)?;
        self.status = ReportStatus::Failed;
        self.completed_at = Some(Utc::now());
        Ok(())
    }

    /// Check whether the report reached an end state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    fn ensure_pending(&self, to: ReportStatus) -> Result<(), AnalysisError> {
        if self.status != ReportStatus::Pending {
            return Err(AnalysisError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        Ok(())
    }
}

//! Unified Error Model
use thiserror::Error;
use uuid::Uuid;

use crate::report::ReportStatus;

/// Errors surfaced by the analysis core and its collaborators.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The referenced work does not exist.
    #[error("work {0} not found")]
    WorkNotFound(Uuid),

    /// The referenced report does not exist.
    #[error("report {0} not found")]
    ReportNotFound(Uuid),

    /// No stored content behind the given reference.
    #[error("content {0} not found")]
    ContentNotFound(String),

    /// A collaborator could not be reached at all.
    #[error("{collaborator} unavailable: {reason}")]
    Unavailable {
        collaborator: &'static str,
        reason: String,
    },

    /// A report was asked to leave a terminal status.
    #[error("invalid report transition: {from} -> {to}")]
    InvalidTransition {
        from: ReportStatus,
        to: ReportStatus,
    },

    /// A comparison task failed outside its own fetch/compare logic.
    #[error("internal analysis failure: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Unreachable-collaborator error with a reason taken from the
    /// underlying failure.
    pub fn unavailable(collaborator: &'static str, reason: impl Into<String>) -> Self {
        AnalysisError::Unavailable {
            collaborator,
            reason: reason.into(),
        }
    }
}

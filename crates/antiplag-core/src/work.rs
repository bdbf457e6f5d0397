//! Work: a submitted text artifact
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One student's submitted text artifact, tied to an assignment.
///
/// Owned by the surrounding submission-management layer; the analysis core
/// reads works but never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    /// Unique identifier, assigned once at creation.
    pub id: Uuid,
    /// Label of the owning student.
    pub student: String,
    /// Assignment the work was submitted under.
    pub assignment_id: String,
    /// Opaque reference to the stored text in the content store.
    pub content_ref: String,
    /// Submission instant, recorded once and never changed.
    pub submitted_at: DateTime<Utc>,
}

impl Work {
    /// Create a work with a fresh identifier and the current instant.
    pub fn new(
        student: impl Into<String>,
        assignment_id: impl Into<String>,
        content_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student: student.into(),
            assignment_id: assignment_id.into(),
            content_ref: content_ref.into(),
            submitted_at: Utc::now(),
        }
    }

    /// Replace the submission instant while constructing a work.
    ///
    /// Used when replaying works whose timestamps were recorded elsewhere.
    pub fn with_submitted_at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = submitted_at;
        self
    }
}

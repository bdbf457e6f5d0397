//! Collaborator traits the analysis core depends on
//!
//! Storage and transport live outside this workspace; the core only ever
//! talks to these three seams. In-process implementations for embedding and
//! tests are in `antiplag-memory`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AnalysisError;
use crate::report::Report;
use crate::work::Work;

/// Trait for retrieving stored work content.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch the text behind a work's content reference.
    async fn fetch_content(&self, content_ref: &str) -> Result<String, AnalysisError>;
}

/// Trait for resolving works and their assignment grouping.
#[async_trait]
pub trait CorpusLookup: Send + Sync {
    /// All works submitted under an assignment. Order is unspecified;
    /// callers re-derive it when they depend on it.
    async fn works_for_assignment(&self, assignment_id: &str)
        -> Result<Vec<Work>, AnalysisError>;

    /// Resolve a single work by its identifier.
    async fn work_by_id(&self, work_id: Uuid) -> Result<Option<Work>, AnalysisError>;
}

/// Trait for report persistence.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Save a report. Overwrites if the identifier already exists.
    async fn save(&self, report: &Report) -> Result<(), AnalysisError>;

    /// All reports for a work, in creation order.
    async fn find_by_work_id(&self, work_id: Uuid) -> Result<Vec<Report>, AnalysisError>;

    /// Retrieve a report by its identifier.
    async fn find_by_id(&self, report_id: Uuid) -> Result<Option<Report>, AnalysisError>;
}

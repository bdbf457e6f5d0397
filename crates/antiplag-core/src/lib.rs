//! Antiplag Core: Data Model, Error Taxonomy, and Collaborator Traits
//!
//! Shared contracts for the plagiarism analysis pipeline. The engines and
//! the orchestrator build on the types defined here; storage and transport
//! stay behind the traits in [`ports`].

pub mod error;
pub mod ports;
pub mod report;
pub mod verdict;
pub mod work;

pub use error::AnalysisError;
pub use ports::{ContentStore, CorpusLookup, ReportStore};
pub use report::{AnalysisOutcome, MatchDetail, Report, ReportStatus};
pub use verdict::Verdict;
pub use work::Work;

/// Version of the analysis core
pub const ANTIPLAG_VERSION: &str = "0.1.0";

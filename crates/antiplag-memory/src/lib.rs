//! Antiplag Memory: In-Process Collaborators
//!
//! Process-local implementations of the three storage traits, for embedding
//! the pipeline without external services and for integration tests. State
//! lives behind `tokio::sync::RwLock`; nothing here is durable.

pub mod content;
pub mod corpus;
pub mod reports;

pub use content::MemoryContentStore;
pub use corpus::MemoryCorpusLookup;
pub use reports::MemoryReportStore;

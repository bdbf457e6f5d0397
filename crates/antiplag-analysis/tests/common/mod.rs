//! Shared mock collaborators for the analysis integration tests
//!
//! Thin wrappers over the `antiplag-memory` stores that add scripted
//! failures, plus a corpus lookup that hands works back in whatever order
//! it was given.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use antiplag_core::{AnalysisError, ContentStore, CorpusLookup, Report, ReportStore, Work};
use antiplag_memory::{MemoryContentStore, MemoryReportStore};

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Content store that refuses a chosen set of references and serves the
/// rest from an in-memory map.
pub struct FlakyContentStore {
    inner: MemoryContentStore,
    failing_refs: HashSet<String>,
}

impl FlakyContentStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryContentStore::new(),
            failing_refs: HashSet::new(),
        }
    }

    pub async fn put(&self, content_ref: &str, text: &str) {
        self.inner.put(content_ref, text).await;
    }

    /// Make every fetch of `content_ref` fail as unavailable.
    pub fn fail_for(mut self, content_ref: &str) -> Self {
        self.failing_refs.insert(content_ref.to_string());
        self
    }
}

#[async_trait]
impl ContentStore for FlakyContentStore {
    async fn fetch_content(&self, content_ref: &str) -> Result<String, AnalysisError> {
        if self.failing_refs.contains(content_ref) {
            return Err(AnalysisError::unavailable(
                "content store",
                format!("simulated outage for {}", content_ref),
            ));
        }
        self.inner.fetch_content(content_ref).await
    }
}

/// Report store that fails chosen save calls and delegates everything
/// else to the in-memory store. Save calls are counted from 1.
pub struct ScriptedReportStore {
    inner: MemoryReportStore,
    fail_on_saves: HashSet<usize>,
    save_calls: AtomicUsize,
}

impl ScriptedReportStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryReportStore::new(),
            fail_on_saves: HashSet::new(),
            save_calls: AtomicUsize::new(0),
        }
    }

    /// Fail the nth save call.
    pub fn fail_on_save(mut self, nth: usize) -> Self {
        self.fail_on_saves.insert(nth);
        self
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportStore for ScriptedReportStore {
    async fn save(&self, report: &Report) -> Result<(), AnalysisError> {
        let call = self.save_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_saves.contains(&call) {
            return Err(AnalysisError::unavailable(
                "report store",
                format!("simulated outage on save {}", call),
            ));
        }
        self.inner.save(report).await
    }

    async fn find_by_work_id(&self, work_id: Uuid) -> Result<Vec<Report>, AnalysisError> {
        self.inner.find_by_work_id(work_id).await
    }

    async fn find_by_id(&self, report_id: Uuid) -> Result<Option<Report>, AnalysisError> {
        self.inner.find_by_id(report_id).await
    }
}

/// Corpus lookup that returns works exactly as given, exercising the
/// orchestrator's own candidate ordering.
pub struct FixedCorpusLookup {
    works: Vec<Work>,
}

impl FixedCorpusLookup {
    pub fn new(works: Vec<Work>) -> Self {
        Self { works }
    }
}

#[async_trait]
impl CorpusLookup for FixedCorpusLookup {
    async fn works_for_assignment(&self, assignment_id: &str) -> Result<Vec<Work>, AnalysisError> {
        Ok(self
            .works
            .iter()
            .filter(|work| work.assignment_id == assignment_id)
            .cloned()
            .collect())
    }

    async fn work_by_id(&self, work_id: Uuid) -> Result<Option<Work>, AnalysisError> {
        Ok(self.works.iter().find(|work| work.id == work_id).cloned())
    }
}

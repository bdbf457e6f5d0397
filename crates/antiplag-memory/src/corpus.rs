//! In-memory corpus lookup
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use antiplag_core::{AnalysisError, CorpusLookup, Work};

/// Corpus lookup backed by a process-local map of registered works.
#[derive(Default)]
pub struct MemoryCorpusLookup {
    works: RwLock<HashMap<Uuid, Work>>,
}

impl MemoryCorpusLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a work, replacing any previous record under the same
    /// identifier.
    pub async fn register(&self, work: Work) {
        tracing::debug!("registering work {} for {}", work.id, work.assignment_id);
        self.works.write().await.insert(work.id, work);
    }
}

#[async_trait]
impl CorpusLookup for MemoryCorpusLookup {
    async fn works_for_assignment(
        &self,
        assignment_id: &str,
    ) -> Result<Vec<Work>, AnalysisError> {
        let works = self.works.read().await;
        let mut matching: Vec<Work> = works
            .values()
            .filter(|work| work.assignment_id == assignment_id)
            .cloned()
            .collect();
        matching.sort_by_key(|work| work.submitted_at);
        Ok(matching)
    }

    async fn work_by_id(&self, work_id: Uuid) -> Result<Option<Work>, AnalysisError> {
        Ok(self.works.read().await.get(&work_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_filters_by_assignment_and_sorts_ascending() {
        let lookup = MemoryCorpusLookup::new();
        let base = Utc::now();

        let late = Work::new("b", "hw-1", "f2").with_submitted_at(base + Duration::seconds(20));
        let early = Work::new("a", "hw-1", "f1").with_submitted_at(base);
        let other = Work::new("c", "hw-2", "f3").with_submitted_at(base + Duration::seconds(5));

        // Registration order deliberately differs from submission order
        lookup.register(late.clone()).await;
        lookup.register(other).await;
        lookup.register(early.clone()).await;

        let works = lookup.works_for_assignment("hw-1").await.unwrap();
        let ids: Vec<Uuid> = works.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![early.id, late.id]);
    }

    #[tokio::test]
    async fn test_work_by_id() {
        let lookup = MemoryCorpusLookup::new();
        let work = Work::new("a", "hw-1", "f1");
        lookup.register(work.clone()).await;

        assert_eq!(lookup.work_by_id(work.id).await.unwrap(), Some(work));
        assert_eq!(lookup.work_by_id(Uuid::new_v4()).await.unwrap(), None);
    }
}

//! In-memory content store
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use antiplag_core::{AnalysisError, ContentStore};

/// Content store backed by a process-local map, keyed by content reference.
#[derive(Default)]
pub struct MemoryContentStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store text under a content reference, replacing any previous value.
    pub async fn put(&self, content_ref: impl Into<String>, text: impl Into<String>) {
        let content_ref = content_ref.into();
        tracing::debug!("storing content under {}", content_ref);
        self.blobs.write().await.insert(content_ref, text.into());
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn fetch_content(&self, content_ref: &str) -> Result<String, AnalysisError> {
        self.blobs
            .read()
            .await
            .get(content_ref)
            .cloned()
            .ok_or_else(|| AnalysisError::ContentNotFound(content_ref.to_string()))
    }
}

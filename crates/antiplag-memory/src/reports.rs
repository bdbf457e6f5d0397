//! In-memory report store
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use antiplag_core::{AnalysisError, Report, ReportStore};

/// Report store preserving creation order. Saving an already-known report
/// replaces it in place, so status transitions never reorder the list.
#[derive(Default)]
pub struct MemoryReportStore {
    reports: RwLock<Vec<Report>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn save(&self, report: &Report) -> Result<(), AnalysisError> {
        let mut reports = self.reports.write().await;
        match reports.iter_mut().find(|stored| stored.id == report.id) {
            Some(slot) => *slot = report.clone(),
            None => reports.push(report.clone()),
        }
        Ok(())
    }

    async fn find_by_work_id(&self, work_id: Uuid) -> Result<Vec<Report>, AnalysisError> {
        Ok(self
            .reports
            .read()
            .await
            .iter()
            .filter(|report| report.work_id == work_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, report_id: Uuid) -> Result<Option<Report>, AnalysisError> {
        Ok(self
            .reports
            .read()
            .await
            .iter()
            .find(|report| report.id == report_id)
            .cloned())
    }
}

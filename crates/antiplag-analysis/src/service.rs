//! Analysis orchestration
//!
//! Home of the pipeline's entry points. A run compares one submitted work
//! against every earlier submission under the same assignment, fanning the
//! fetch-and-compare work out over a bounded number of concurrent tasks.
//! The read side exposes the stored reports and a word-cloud summary of a
//! work's content.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use antiplag_core::{
    AnalysisError, AnalysisOutcome, ContentStore, CorpusLookup, MatchDetail, Report, ReportStore,
    Verdict, Work,
};
use antiplag_similarity::{similarity, SUSPICIOUS_THRESHOLD};
use antiplag_wordcloud::{word_cloud, DEFAULT_MAX_WORDS};

use crate::options::AnalysisOptions;
use crate::{AnalysisStarted, WorkWordCloud};

/// Orchestrates plagiarism analysis runs and the associated read side.
///
/// Collaborators arrive as shared trait objects once at construction; the
/// service is cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct AnalysisService {
    content_store: Arc<dyn ContentStore>,
    corpus: Arc<dyn CorpusLookup>,
    reports: Arc<dyn ReportStore>,
    options: AnalysisOptions,
}

impl AnalysisService {
    /// Build a service over the given collaborators with default options.
    pub fn new(
        content_store: Arc<dyn ContentStore>,
        corpus: Arc<dyn CorpusLookup>,
        reports: Arc<dyn ReportStore>,
    ) -> Self {
        Self {
            content_store,
            corpus,
            reports,
            options: AnalysisOptions::default(),
        }
    }

    /// Replace the run options while constructing a service.
    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    /// Trigger an analysis run for a submitted work and acknowledge it.
    ///
    /// The PENDING report is persisted before anything else; failure to do
    /// so is the only error surfaced here. A failure later in the run
    /// settles the report FAILED and is observed through the read side,
    /// not through this call.
    pub async fn start_analysis(&self, work: &Work) -> Result<AnalysisStarted, AnalysisError> {
        let report = Report::pending(work.id);
        self.reports.save(&report).await?;

        if let Err(err) = self.drive(work, report).await {
            warn!("Analysis run for work {} did not complete: {}", work.id, err);
        }
        Ok(AnalysisStarted::for_work(work))
    }

    /// Run an analysis to its terminal status and return the settled
    /// report.
    ///
    /// Same pipeline as [`AnalysisService::start_analysis`], except that a
    /// run failure surfaces to the caller after the report settles FAILED.
    pub async fn run_analysis(&self, work: &Work) -> Result<Report, AnalysisError> {
        let report = Report::pending(work.id);
        self.reports.save(&report).await?;
        self.drive(work, report).await
    }

    /// All reports recorded for a work, in creation order. A work nothing
    /// was triggered for simply has no reports yet.
    pub async fn reports_for_work(&self, work_id: Uuid) -> Result<Vec<Report>, AnalysisError> {
        self.reports.find_by_work_id(work_id).await
    }

    /// A single report by its identifier.
    pub async fn report_by_id(&self, report_id: Uuid) -> Result<Report, AnalysisError> {
        self.reports
            .find_by_id(report_id)
            .await?
            .ok_or(AnalysisError::ReportNotFound(report_id))
    }

    /// Ranked word frequencies for a work's content, capped at `max_words`
    /// entries ([`DEFAULT_MAX_WORDS`] when the caller gives none).
    pub async fn word_cloud_for_work(
        &self,
        work_id: Uuid,
        max_words: Option<usize>,
    ) -> Result<WorkWordCloud, AnalysisError> {
        let work = self
            .corpus
            .work_by_id(work_id)
            .await?
            .ok_or(AnalysisError::WorkNotFound(work_id))?;
        let content = self.content_store.fetch_content(&work.content_ref).await?;
        let cap = max_words.unwrap_or(DEFAULT_MAX_WORDS);
        Ok(WorkWordCloud::new(work.id, word_cloud(&content, cap)))
    }

    /// Drive a persisted PENDING report to its terminal status.
    async fn drive(&self, work: &Work, report: Report) -> Result<Report, AnalysisError> {
        info!(
            "Starting plagiarism analysis for work {} (student {}, assignment {})",
            work.id, work.student, work.assignment_id
        );

        let outcome = match self.execute(work).await {
            Ok(outcome) => outcome,
            Err(err) => {
                self.settle_failed(report).await?;
                return Err(err);
            }
        };

        let verdict = outcome.verdict;
        let originality = outcome.originality_percent;

        // Complete a copy; the kept PENDING report settles FAILED when the
        // save does not land.
        let mut completed = report.clone();
        completed.complete(outcome)?;
        if let Err(save_err) = self.reports.save(&completed).await {
            self.settle_failed(report).await?;
            return Err(save_err);
        }

        info!(
            "Analysis for work {} completed: verdict {}, originality {:.2}%",
            work.id, verdict, originality
        );
        Ok(completed)
    }

    /// Settle a PENDING report as FAILED, persisting best-effort.
    async fn settle_failed(&self, mut report: Report) -> Result<(), AnalysisError> {
        report.fail()?;
        if let Err(save_err) = self.reports.save(&report).await {
            error!(
                "Could not persist FAILED report {} for work {}: {}",
                report.id, report.work_id, save_err
            );
        }
        Ok(())
    }

    /// Fetch, compare, and aggregate, without touching report state.
    async fn execute(&self, work: &Work) -> Result<AnalysisOutcome, AnalysisError> {
        let own_content = self.content_store.fetch_content(&work.content_ref).await?;
        let corpus = self.corpus.works_for_assignment(&work.assignment_id).await?;
        let candidates = eligible_candidates(corpus, work);
        debug!(
            "Work {} has {} comparison candidates",
            work.id,
            candidates.len()
        );

        let matches = self
            .compare_candidates(work.id, own_content, candidates)
            .await?;
        Ok(aggregate(matches))
    }

    /// Score the work against each candidate, keeping at most
    /// `candidate_concurrency` comparisons in flight.
    ///
    /// A candidate whose content cannot be fetched is skipped with a
    /// warning and the remaining comparisons still count. Returned matches
    /// keep the candidate order handed in.
    async fn compare_candidates(
        &self,
        work_id: Uuid,
        own_content: String,
        candidates: Vec<Work>,
    ) -> Result<Vec<MatchDetail>, AnalysisError> {
        let total = candidates.len();
        let own_content = Arc::new(own_content);
        let semaphore = Arc::new(Semaphore::new(self.options.candidate_concurrency.max(1)));
        let mut join_set: JoinSet<Result<(usize, Option<MatchDetail>), AnalysisError>> =
            JoinSet::new();

        for (index, candidate) in candidates.into_iter().enumerate() {
            let permit = Arc::clone(&semaphore);
            let content_store = Arc::clone(&self.content_store);
            let own_content = Arc::clone(&own_content);

            join_set.spawn(async move {
                let _permit = permit
                    .acquire()
                    .await
                    .map_err(|e| AnalysisError::Internal(e.to_string()))?;

                let candidate_content =
                    match content_store.fetch_content(&candidate.content_ref).await {
                        Ok(content) => content,
                        Err(err) => {
                            warn!(
                                "Skipping candidate {} for work {}: {}",
                                candidate.id, work_id, err
                            );
                            return Ok((index, None));
                        }
                    };

                let score = similarity(&own_content, &candidate_content);
                debug!(
                    "Work {} vs candidate {}: similarity {:.2}%",
                    work_id, candidate.id, score
                );

                let detail = (score >= SUSPICIOUS_THRESHOLD).then(|| MatchDetail {
                    matched_work_id: candidate.id,
                    matched_student: candidate.student,
                    similarity_percent: score,
                    matched_submitted_at: candidate.submitted_at,
                    verdict: Verdict::for_similarity(score),
                });
                Ok((index, detail))
            });
        }

        let mut slots: Vec<Option<MatchDetail>> = vec![None; total];
        while let Some(joined) = join_set.join_next().await {
            let (index, detail) = joined.map_err(|e| AnalysisError::Internal(e.to_string()))??;
            slots[index] = detail;
        }
        Ok(slots.into_iter().flatten().collect())
    }
}

/// Predecessors of `work` under the same assignment, ascending by
/// submission time.
///
/// The work itself is excluded by identifier, and only strictly earlier
/// submissions qualify; a simultaneous submission is nobody's predecessor.
fn eligible_candidates(mut corpus: Vec<Work>, work: &Work) -> Vec<Work> {
    corpus.sort_by_key(|candidate| candidate.submitted_at);
    corpus.retain(|candidate| {
        candidate.id != work.id && candidate.submitted_at < work.submitted_at
    });
    corpus
}

/// Fold qualifying matches into the aggregate outcome. The strongest
/// similarity decides verdict and originality; no matches at all means a
/// fully original work.
fn aggregate(matches: Vec<MatchDetail>) -> AnalysisOutcome {
    let mut max_similarity = 0.0_f64;
    for detail in &matches {
        if detail.similarity_percent > max_similarity {
            max_similarity = detail.similarity_percent;
        }
    }

    AnalysisOutcome {
        originality_percent: (100.0 - max_similarity).max(0.0),
        plagiarism_detected: !matches.is_empty(),
        verdict: Verdict::for_similarity(max_similarity),
        matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn work_at(secs: i64) -> Work {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Work::new("student", "hw-1", "ref").with_submitted_at(base + Duration::seconds(secs))
    }

    fn match_scoring(similarity_percent: f64) -> MatchDetail {
        MatchDetail {
            matched_work_id: Uuid::new_v4(),
            matched_student: "peer".to_string(),
            similarity_percent,
            matched_submitted_at: Utc::now(),
            verdict: Verdict::for_similarity(similarity_percent),
        }
    }

    #[test]
    fn test_candidates_are_earlier_works_in_submission_order() {
        let target = work_at(100);
        let earlier_b = work_at(50);
        let earlier_a = work_at(10);
        let later = work_at(200);

        let corpus = vec![
            later.clone(),
            earlier_b.clone(),
            target.clone(),
            earlier_a.clone(),
        ];
        let candidates = eligible_candidates(corpus, &target);

        let ids: Vec<_> = candidates.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![earlier_a.id, earlier_b.id]);
    }

    #[test]
    fn test_simultaneous_submission_is_not_a_candidate() {
        let target = work_at(100);
        let twin = work_at(100);
        assert!(eligible_candidates(vec![twin], &target).is_empty());
    }

    #[test]
    fn test_target_itself_is_excluded() {
        let target = work_at(100);
        // A corpus row carrying the target's own id is dropped even when
        // its recorded instant differs.
        let mut stale_row = target.clone();
        stale_row.submitted_at = target.submitted_at - Duration::seconds(5);
        assert!(eligible_candidates(vec![stale_row], &target).is_empty());
    }

    #[test]
    fn test_aggregate_without_matches_is_fully_original() {
        let outcome = aggregate(Vec::new());
        assert_eq!(outcome.originality_percent, 100.0);
        assert!(!outcome.plagiarism_detected);
        assert_eq!(outcome.verdict, Verdict::Original);
        assert!(outcome.matches.is_empty());
    }

    #[test]
    fn test_aggregate_takes_strongest_match() {
        let outcome = aggregate(vec![
            match_scoring(55.0),
            match_scoring(91.5),
            match_scoring(80.0),
        ]);
        assert_eq!(outcome.originality_percent, 8.5);
        assert!(outcome.plagiarism_detected);
        assert_eq!(outcome.verdict, Verdict::Plagiarism);
        assert_eq!(outcome.matches.len(), 3);
    }

    #[test]
    fn test_aggregate_suspicious_band() {
        let outcome = aggregate(vec![match_scoring(62.0)]);
        assert_eq!(outcome.originality_percent, 38.0);
        assert_eq!(outcome.verdict, Verdict::Suspicious);
        assert!(outcome.plagiarism_detected);
    }

    #[test]
    fn test_aggregate_originality_never_negative() {
        let outcome = aggregate(vec![match_scoring(100.0)]);
        assert_eq!(outcome.originality_percent, 0.0);
    }
}

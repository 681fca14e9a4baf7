//! Run orchestration.
//!
//! One tokio task per rubric entry, dispatched together and joined
//! explicitly at the end of the run so shutdown is deterministic and no
//! entry's work is silently dropped. No ordering is guaranteed between
//! entries; within an entry the runner keeps its steps strictly ordered.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::HarnessConfig;
use crate::report::flat;
use crate::rubric::{rubric_digest, RubricEntry};
use crate::runner::{self, EntryOutcome, HarnessContext};

/// Summary of a completed grading run.
#[derive(Debug)]
pub struct HarnessResult {
    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,

    /// Digest of the rubric that produced this result set.
    pub rubric_digest: String,

    /// Per-entry outcomes, in completion-collection order.
    pub outcomes: Vec<EntryOutcome>,
}

impl HarnessResult {
    /// Entries that completed and passed.
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Entries that completed and failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !o.passed() && !o.errored())
            .count()
    }

    /// Entries that did not complete.
    pub fn errored_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.errored()).count()
    }
}

/// Grading run orchestrator.
pub struct HarnessPipeline;

impl HarnessPipeline {
    /// Execute every rubric entry and settle all of their work.
    ///
    /// Pre-run cleanup removes stale flat report files. Each entry runs
    /// as its own task behind an isolating boundary; a failing entry is
    /// recorded, never escalated. The pipeline itself therefore always
    /// returns a result.
    pub async fn run(config: HarnessConfig, rubric: Vec<RubricEntry>) -> HarnessResult {
        let started_at = Utc::now();
        let start = Instant::now();
        let digest = rubric_digest(&rubric);

        info!(rubric_digest = %digest, entries = rubric.len(), "starting grading run");

        if let Err(err) = flat::reset(&config.report_dir).await {
            warn!(error = %err, "flat report cleanup failed");
        }

        let ctx = Arc::new(HarnessContext::new(config));

        let mut tasks: Vec<(String, JoinHandle<EntryOutcome>)> = Vec::new();
        for entry in rubric {
            let ctx = Arc::clone(&ctx);
            let name = entry.name.clone();
            let task = tokio::spawn(async move { runner::run_entry(&ctx, &entry).await });
            tasks.push((name, task));
        }

        // Join every dispatched entry, collecting individual failures.
        let mut outcomes = Vec::new();
        for (name, task) in tasks {
            match task.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => {
                    error!(entry = %name, error = %err, "entry task did not complete");
                }
            }
        }

        let result = HarnessResult {
            started_at,
            duration_ms: start.elapsed().as_millis() as u64,
            rubric_digest: digest,
            outcomes,
        };

        info!(
            passed = result.passed_count(),
            failed = result.failed_count(),
            errored = result.errored_count(),
            duration_ms = result.duration_ms,
            "grading run complete"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webgrade_core::{Category, Status};

    fn outcome(status: Option<Status>, error: Option<&str>) -> EntryOutcome {
        EntryOutcome {
            name: "entry".to_string(),
            category: Category::Boundary,
            status,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_result_counts() {
        let result = HarnessResult {
            started_at: Utc::now(),
            duration_ms: 12,
            rubric_digest: "abc".to_string(),
            outcomes: vec![
                outcome(Some(Status::Passed), None),
                outcome(Some(Status::Passed), None),
                outcome(Some(Status::Failed), None),
                outcome(None, Some("failed to load index.html")),
            ],
        };

        assert_eq!(result.passed_count(), 2);
        assert_eq!(result.failed_count(), 1);
        assert_eq!(result.errored_count(), 1);
    }
}

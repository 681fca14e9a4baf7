//! Per-entry execution with an isolating error boundary.
//!
//! Within one entry the steps are strictly ordered: load, analyze,
//! aggregate, report. Any load, parse, or execution failure is fatal to
//! that entry alone; it is logged and recorded, and the run continues.
//! The reporter sinks are individually best-effort: a failed push does
//! not stop the local report files from being written, and vice versa.

use tracing::{error, info, warn};

use webgrade_core::{aggregate, Category, ReportBundle, Status};

use crate::artifacts;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::report::{console, flat, remote::RemoteSink, xml};
use crate::rubric::RubricEntry;

/// Shared, read-only state for a run: configuration plus the one HTTP
/// client all entries push through.
pub struct HarnessContext {
    pub config: HarnessConfig,
    pub remote: RemoteSink,
}

impl HarnessContext {
    pub fn new(config: HarnessConfig) -> Self {
        let remote = RemoteSink::new(&config.endpoint);
        Self { config, remote }
    }
}

/// What became of one rubric entry.
#[derive(Debug, Clone)]
pub struct EntryOutcome {
    pub name: String,
    pub category: Category,

    /// Verdict, when the entry ran to completion.
    pub status: Option<Status>,

    /// Error text, when the entry failed before scoring.
    pub error: Option<String>,
}

impl EntryOutcome {
    /// Whether the entry completed and passed.
    pub fn passed(&self) -> bool {
        self.status.map_or(false, Status::passed)
    }

    /// Whether the entry failed to run at all.
    pub fn errored(&self) -> bool {
        self.error.is_some()
    }
}

/// Run one rubric entry to completion, containing every failure mode.
pub async fn run_entry(ctx: &HarnessContext, entry: &RubricEntry) -> EntryOutcome {
    match grade(ctx, entry).await {
        Ok(status) => EntryOutcome {
            name: entry.name.clone(),
            category: entry.category,
            status: Some(status),
            error: None,
        },
        Err(err) => {
            error!(entry = %entry.name, error = %err, "rubric entry failed");
            console::print_entry_error(&entry.name, &err);
            EntryOutcome {
                name: entry.name.clone(),
                category: entry.category,
                status: None,
                error: Some(err.to_string()),
            }
        }
    }
}

async fn grade(ctx: &HarnessContext, entry: &RubricEntry) -> Result<Status, HarnessError> {
    let text = artifacts::load_artifact(&ctx.config, entry.analyzer.artifact()).await?;
    let results = entry.analyzer.analyze(&text)?;
    let record = aggregate(&results, &entry.name, entry.category);
    let status = record.status;

    let payload = artifacts::load_payload(&ctx.config).await?;
    let bundle = ReportBundle::new(record.clone(), payload);

    console::print_results(entry.category, &results);
    console::print_bundle(&bundle);

    match ctx.remote.push(&bundle).await {
        Ok(body) => {
            info!(entry = %entry.name, "report bundle accepted");
            console::print_response(entry.category, &body);
        }
        Err(err) => warn!(entry = %entry.name, error = %err, "remote push failed"),
    }

    if let Err(err) = xml::write_report(&ctx.config.report_dir, &record).await {
        warn!(entry = %entry.name, error = %err, "xml report write failed");
    }
    if let Err(err) = flat::append(&ctx.config.report_dir, &record).await {
        warn!(entry = %entry.name, error = %err, "flat report write failed");
    }

    Ok(status)
}

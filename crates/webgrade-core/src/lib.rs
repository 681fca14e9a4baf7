//! Webgrade Core
//!
//! Domain logic for the webgrade grading harness:
//! - Check outcomes, scoring records, and report bundles
//! - Static analyzers over markup, stylesheet, and script artifacts
//! - A synthetic document runtime that executes the subject script
//!   for the dynamic checks

pub mod analyzers;
pub mod domain;
pub mod runtime;
pub mod telemetry;

// Re-export key types
pub use analyzers::{AnalyzerKind, ArtifactKind, Sequence, StyleRule};
pub use domain::error::AnalyzerError;
pub use domain::result::{Category, CheckOutcome, CheckResults};
pub use domain::scoring::{aggregate, ReportBundle, ScoringRecord, Status};
pub use runtime::document::SyntheticDocument;
pub use runtime::interp::ScriptHost;
pub use telemetry::init_tracing;

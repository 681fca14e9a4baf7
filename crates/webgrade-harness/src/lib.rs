//! Webgrade Harness
//!
//! Orchestration layer of the grading harness:
//! - The builtin rubric (data, not code) and its identity digest
//! - Artifact loading
//! - Per-entry execution with an isolating error boundary
//! - Reporter sinks: remote push, XML documents, flat files, console

pub mod artifacts;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod rubric;
pub mod runner;

// Re-export key types
pub use config::HarnessConfig;
pub use error::HarnessError;
pub use pipeline::{HarnessPipeline, HarnessResult};
pub use rubric::{builtin_rubric, rubric_digest, RubricEntry};
pub use runner::EntryOutcome;

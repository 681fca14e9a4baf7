//! Harness error taxonomy.
//!
//! Every rubric entry runs inside its own isolating boundary: any of
//! these surface as a logged per-entry failure, never as an abort of
//! the overall run.

use std::path::PathBuf;

use webgrade_core::AnalyzerError;

/// Errors raised while grading a single rubric entry.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    #[error("remote push failed: {0}")]
    Push(#[from] reqwest::Error),

    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_names_path() {
        let err = HarnessError::Load {
            path: PathBuf::from("missing/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing/index.html"));
    }

    #[test]
    fn test_analyzer_error_passes_through() {
        let err = HarnessError::from(AnalyzerError::ScriptParse("syntax error at 1:1".into()));
        assert!(err.to_string().contains("script parse error"));
    }
}

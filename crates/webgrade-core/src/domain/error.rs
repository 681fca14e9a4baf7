//! Analyzer error taxonomy.

/// Errors raised by the script-based analyzers.
///
/// The policy is deliberately asymmetric: the markup and stylesheet
/// analyzers degrade malformed input into per-label `fail` outcomes and
/// never error, while the declaration and dynamic analyzers have no
/// fallback and propagate instead. A parse failure and a thrown script
/// are execution errors for the rubric entry, not `fail` results.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("script parse error: {0}")]
    ScriptParse(String),

    #[error("script execution error: {0}")]
    ScriptRuntime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_error_display() {
        let err = AnalyzerError::ScriptParse("syntax error at 3:14".to_string());
        assert!(err.to_string().contains("script parse error"));

        let err = AnalyzerError::ScriptRuntime("foo is not defined".to_string());
        assert!(err.to_string().contains("script execution error"));
        assert!(err.to_string().contains("foo is not defined"));
    }
}

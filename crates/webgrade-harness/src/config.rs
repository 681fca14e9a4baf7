//! Harness configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use webgrade_core::ArtifactKind;

/// Default grading endpoint; override per config or via the
/// `WEBGRADE_ENDPOINT` environment variable.
pub const DEFAULT_ENDPOINT: &str = "https://grader.example.com/v1/results/push";

/// Paths and endpoints a grading run needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Markup artifact (read-only).
    pub markup_path: PathBuf,
    /// Stylesheet artifact (read-only).
    pub stylesheet_path: PathBuf,
    /// Script artifact (read-only).
    pub script_path: PathBuf,
    /// Side-channel payload copied into every bundle's `customData`,
    /// read fresh per rubric entry.
    pub payload_path: PathBuf,
    /// Grading endpoint receiving one POST per rubric entry.
    pub endpoint: String,
    /// Directory receiving XML and flat report files.
    pub report_dir: PathBuf,
}

impl HarnessConfig {
    /// Build a config for the given artifacts with default endpoint and
    /// report directory.
    pub fn new(
        markup_path: PathBuf,
        stylesheet_path: PathBuf,
        script_path: PathBuf,
        payload_path: PathBuf,
    ) -> Self {
        Self {
            markup_path,
            stylesheet_path,
            script_path,
            payload_path,
            endpoint: endpoint_from_env(),
            report_dir: PathBuf::from("."),
        }
    }

    /// Override the grading endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Override the report directory.
    pub fn with_report_dir(mut self, report_dir: PathBuf) -> Self {
        self.report_dir = report_dir;
        self
    }

    /// Path of the artifact a given analyzer consumes.
    pub fn artifact_path(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Markup => &self.markup_path,
            ArtifactKind::Stylesheet => &self.stylesheet_path,
            ArtifactKind::Script => &self.script_path,
        }
    }
}

fn endpoint_from_env() -> String {
    std::env::var("WEBGRADE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> HarnessConfig {
        HarnessConfig::new(
            PathBuf::from("index.html"),
            PathBuf::from("style.css"),
            PathBuf::from("script.js"),
            PathBuf::from("custom.ih"),
        )
    }

    #[test]
    fn test_artifact_routing() {
        let config = config();
        assert_eq!(
            config.artifact_path(ArtifactKind::Markup),
            Path::new("index.html")
        );
        assert_eq!(
            config.artifact_path(ArtifactKind::Stylesheet),
            Path::new("style.css")
        );
        assert_eq!(
            config.artifact_path(ArtifactKind::Script),
            Path::new("script.js")
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = config()
            .with_endpoint("http://127.0.0.1:9000/push")
            .with_report_dir(PathBuf::from("reports"));
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/push");
        assert_eq!(config.report_dir, PathBuf::from("reports"));
    }
}

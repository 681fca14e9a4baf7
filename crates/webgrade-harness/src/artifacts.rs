//! Artifact and payload loading.
//!
//! Artifacts are UTF-8 text files consumed read-only. A missing or
//! unreadable file is fatal to the rubric entry that needed it, and to
//! that entry only.

use std::path::Path;

use webgrade_core::ArtifactKind;

use crate::config::HarnessConfig;
use crate::error::HarnessError;

/// Load the artifact a rubric entry's analyzer consumes.
pub async fn load_artifact(
    config: &HarnessConfig,
    kind: ArtifactKind,
) -> Result<String, HarnessError> {
    read_text(config.artifact_path(kind)).await
}

/// Load the opaque payload carried as `customData`. Read fresh for every
/// rubric entry, never cached.
pub async fn load_payload(config: &HarnessConfig) -> Result<String, HarnessError> {
    read_text(&config.payload_path).await
}

async fn read_text(path: &Path) -> Result<String, HarnessError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| HarnessError::Load {
            path: path.to_path_buf(),
            source,
        })
}

//! Flat-file report sink.
//!
//! One `name=PASS|FAIL` line appended per rubric entry, routed by
//! category into one of three files. Entries append concurrently with
//! no ordering discipline; each line is written in a single call so an
//! entry's line stays intact even when runs interleave.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use webgrade_core::{Category, ScoringRecord};

use crate::error::HarnessError;

/// Category-routed report filename.
pub fn file_name(category: Category) -> &'static str {
    match category {
        Category::Functional => "output_revised.txt",
        Category::Boundary => "output_boundary_revised.txt",
        Category::Exception => "output_exception_revised.txt",
    }
}

/// Delete all three report files and recreate them empty, so a category
/// with no routed entries still ends the run with an empty file and no
/// stale lines accumulate across runs.
pub async fn reset(dir: &Path) -> Result<(), HarnessError> {
    for category in [
        Category::Functional,
        Category::Boundary,
        Category::Exception,
    ] {
        let path = dir.join(file_name(category));
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(HarnessError::ReportWrite {
                    path: path.clone(),
                    source,
                })
            }
        }
        tokio::fs::File::create(&path)
            .await
            .map_err(|source| HarnessError::ReportWrite {
                path: path.clone(),
                source,
            })?;
    }
    Ok(())
}

/// Append one record's line to its category file.
pub async fn append(dir: &Path, record: &ScoringRecord) -> Result<PathBuf, HarnessError> {
    let path = dir.join(file_name(record.method_type));
    let token = if record.status.passed() { "PASS" } else { "FAIL" };
    let line = format!("{}={}\n", record.method_name, token);

    let write = async {
        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    };
    write.await.map_err(|source| HarnessError::ReportWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use webgrade_core::Status;

    fn record(name: &str, category: Category, status: Status) -> ScoringRecord {
        ScoringRecord {
            id: Uuid::new_v4(),
            method_name: name.to_string(),
            method_type: category,
            actual_score: 1,
            earned_score: u32::from(status.passed()),
            status,
            is_mandatory: true,
            error_message: String::new(),
        }
    }

    #[tokio::test]
    async fn test_reset_creates_empty_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("output_revised.txt"), "stale=PASS\n").expect("seed");

        reset(dir.path()).await.expect("reset failed");

        for category in [
            Category::Functional,
            Category::Boundary,
            Category::Exception,
        ] {
            let contents = std::fs::read_to_string(dir.path().join(file_name(category)))
                .expect("file must exist");
            assert!(contents.is_empty(), "{category:?} not empty");
        }
    }

    #[tokio::test]
    async fn test_append_routes_by_category() {
        let dir = tempfile::tempdir().expect("tempdir");
        reset(dir.path()).await.expect("reset failed");

        append(
            dir.path(),
            &record("appendNumber Functionality Test", Category::Functional, Status::Passed),
        )
        .await
        .expect("append failed");
        append(
            dir.path(),
            &record("HTML Tags Test", Category::Boundary, Status::Failed),
        )
        .await
        .expect("append failed");

        let functional =
            std::fs::read_to_string(dir.path().join("output_revised.txt")).expect("read");
        assert_eq!(functional, "appendNumber Functionality Test=PASS\n");

        let boundary =
            std::fs::read_to_string(dir.path().join("output_boundary_revised.txt")).expect("read");
        assert_eq!(boundary, "HTML Tags Test=FAIL\n");

        let exception =
            std::fs::read_to_string(dir.path().join("output_exception_revised.txt")).expect("read");
        assert!(exception.is_empty());
    }

    #[tokio::test]
    async fn test_lines_match_expected_format() {
        let dir = tempfile::tempdir().expect("tempdir");
        reset(dir.path()).await.expect("reset failed");

        for (name, status) in [("First Test", Status::Passed), ("Second Test", Status::Failed)] {
            append(dir.path(), &record(name, Category::Boundary, status))
                .await
                .expect("append failed");
        }

        let contents =
            std::fs::read_to_string(dir.path().join("output_boundary_revised.txt")).expect("read");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let (name, token) = line.split_once('=').expect("line format");
            assert!(!name.is_empty());
            assert!(token == "PASS" || token == "FAIL");
        }
    }
}

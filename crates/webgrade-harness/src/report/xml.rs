//! XML report sink.
//!
//! One document per rubric entry, named `<category>-test-report.xml`.
//! The element content mirrors what the grading service's consumer
//! expects: `test-case-type` and `status` both carry the record status,
//! `name` the entry name.

use std::path::{Path, PathBuf};

use webgrade_core::ScoringRecord;

use crate::error::HarnessError;

/// Render the report document for one scoring record.
pub fn render(record: &ScoringRecord) -> String {
    let status = record.status.as_str();
    format!(
        "<?xml version=\"1.0\"?>\n\
         <test-cases>\n\
         \x20\x20<case>\n\
         \x20\x20\x20\x20<test-case-type>{}</test-case-type>\n\
         \x20\x20\x20\x20<name>{}</name>\n\
         \x20\x20\x20\x20<status>{}</status>\n\
         \x20\x20</case>\n\
         </test-cases>",
        escape(status),
        escape(&record.method_name),
        escape(status)
    )
}

/// Filename for a record's report, derived from its category
/// (lower-cased, spaces replaced).
pub fn report_filename(record: &ScoringRecord) -> String {
    let category = record.method_type.as_str().to_lowercase().replace(' ', "-");
    format!("{category}-test-report.xml")
}

/// Write the report document into the given directory.
pub async fn write_report(dir: &Path, record: &ScoringRecord) -> Result<PathBuf, HarnessError> {
    let path = dir.join(report_filename(record));
    tokio::fs::write(&path, render(record))
        .await
        .map_err(|source| HarnessError::ReportWrite {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use webgrade_core::{Category, Status};

    fn record(status: Status) -> ScoringRecord {
        ScoringRecord {
            id: Uuid::new_v4(),
            method_name: "HTML Tags Test".to_string(),
            method_type: Category::Boundary,
            actual_score: 1,
            earned_score: u32::from(status.passed()),
            status,
            is_mandatory: true,
            error_message: String::new(),
        }
    }

    #[test]
    fn test_render_passed() {
        let xml = render(&record(Status::Passed));
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?>\n\
             <test-cases>\n\
             \x20\x20<case>\n\
             \x20\x20\x20\x20<test-case-type>Passed</test-case-type>\n\
             \x20\x20\x20\x20<name>HTML Tags Test</name>\n\
             \x20\x20\x20\x20<status>Passed</status>\n\
             \x20\x20</case>\n\
             </test-cases>"
        );
    }

    #[test]
    fn test_render_escapes_markup() {
        let mut r = record(Status::Failed);
        r.method_name = "a < b & c".to_string();
        let xml = render(&r);
        assert!(xml.contains("<name>a &lt; b &amp; c</name>"));
        assert!(xml.contains("<status>Failed</status>"));
    }

    #[test]
    fn test_filename_from_category() {
        assert_eq!(
            report_filename(&record(Status::Passed)),
            "boundary-test-report.xml"
        );

        let mut functional = record(Status::Passed);
        functional.method_type = Category::Functional;
        assert_eq!(
            report_filename(&functional),
            "functional-test-report.xml"
        );
    }

    #[tokio::test]
    async fn test_write_report() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_report(dir.path(), &record(Status::Passed))
            .await
            .expect("write failed");
        assert!(path.ends_with("boundary-test-report.xml"));

        let written = std::fs::read_to_string(path).expect("read back");
        assert!(written.starts_with("<?xml version=\"1.0\"?>"));
        assert!(written.contains("<name>HTML Tags Test</name>"));
    }
}

//! Scoring records, report bundles, and the result aggregator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::result::{Category, CheckResults};

/// Overall verdict for a rubric entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    Passed,
    Failed,
}

impl Status {
    /// Whether the entry passed.
    pub fn passed(self) -> bool {
        matches!(self, Status::Passed)
    }

    /// String form matching the wire format.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Passed => "Passed",
            Status::Failed => "Failed",
        }
    }
}

/// Computed verdict and metadata for one rubric entry.
///
/// Field names follow the grading service wire format. The id travels as
/// the bundle map key, not as a body field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRecord {
    #[serde(skip)]
    pub id: Uuid,

    /// Rubric entry name.
    pub method_name: String,

    /// Rubric entry category.
    pub method_type: Category,

    /// Available score. Entries are unweighted: always 1.
    pub actual_score: u32,

    /// Earned score: 1 iff no check in the entry's result map failed.
    pub earned_score: u32,

    /// Verdict mirroring `earned_score`.
    pub status: Status,

    /// Reserved discriminant, always true.
    pub is_mandatory: bool,

    /// Reserved discriminant, always empty.
    pub error_message: String,
}

/// A scoring record packaged for transmission, keyed by its fresh id,
/// together with the opaque payload read at reporting time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBundle {
    pub test_case_results: HashMap<Uuid, ScoringRecord>,
    pub custom_data: String,
}

impl ReportBundle {
    /// Wrap a single scoring record with its payload.
    pub fn new(record: ScoringRecord, custom_data: String) -> Self {
        let mut test_case_results = HashMap::new();
        test_case_results.insert(record.id, record);
        Self {
            test_case_results,
            custom_data,
        }
    }

    /// The single record carried by this bundle.
    pub fn record(&self) -> Option<&ScoringRecord> {
        self.test_case_results.values().next()
    }
}

/// Convert a check-result map into a scoring record.
///
/// `earned_score` is 0 if any check failed, else 1; `status` mirrors it.
/// A fresh id is generated per record.
pub fn aggregate(results: &CheckResults, name: &str, category: Category) -> ScoringRecord {
    let earned = u32::from(!results.values().any(|outcome| outcome.is_fail()));
    ScoringRecord {
        id: Uuid::new_v4(),
        method_name: name.to_string(),
        method_type: category,
        actual_score: 1,
        earned_score: earned,
        status: if earned == 1 {
            Status::Passed
        } else {
            Status::Failed
        },
        is_mandatory: true,
        error_message: String::new(),
    }
}

//! Check outcomes and per-entry result maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Outcome of one named check inside a rubric entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    Pass,
    Fail,
}

impl CheckOutcome {
    /// Map a boolean condition onto a check outcome.
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            CheckOutcome::Pass
        } else {
            CheckOutcome::Fail
        }
    }

    /// Whether this outcome is a failure.
    pub fn is_fail(self) -> bool {
        matches!(self, CheckOutcome::Fail)
    }
}

/// Rubric entry category.
///
/// Drives the wire `methodType` field, flat-file routing, and the XML
/// report filename.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Functional,
    Boundary,
    Exception,
}

impl Category {
    /// Lowercase string form, matching the wire format.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Functional => "functional",
            Category::Boundary => "boundary",
            Category::Exception => "exception",
        }
    }
}

/// Ordered mapping from check label to outcome.
///
/// Produced fresh by an analyzer for each rubric entry and consumed once
/// by the aggregator. Insertion order follows the rubric parameters so
/// console output lists checks in the order they were requested.
pub type CheckResults = IndexMap<String, CheckOutcome>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_bool() {
        assert_eq!(CheckOutcome::from_bool(true), CheckOutcome::Pass);
        assert_eq!(CheckOutcome::from_bool(false), CheckOutcome::Fail);
        assert!(CheckOutcome::Fail.is_fail());
        assert!(!CheckOutcome::Pass.is_fail());
    }

    #[test]
    fn test_category_str_forms() {
        assert_eq!(Category::Functional.as_str(), "functional");
        assert_eq!(Category::Boundary.as_str(), "boundary");
        assert_eq!(Category::Exception.as_str(), "exception");
    }

    #[test]
    fn test_check_results_preserve_insertion_order() {
        let mut results = CheckResults::new();
        results.insert("html".to_string(), CheckOutcome::Pass);
        results.insert("body".to_string(), CheckOutcome::Pass);
        results.insert("button".to_string(), CheckOutcome::Fail);

        let labels: Vec<&str> = results.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["html", "body", "button"]);
    }
}

//! Operator console sink.
//!
//! Mirrors every entry's check results with colorized PASS/FAIL tokens,
//! then the full bundle and the grading service's reply. Output from
//! concurrently running entries may interleave; that is accepted.

use webgrade_core::{Category, CheckOutcome, CheckResults, ReportBundle};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Colorized PASS/FAIL token for one check outcome.
pub fn token(outcome: CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Pass => format!("{GREEN}PASS{RESET}"),
        CheckOutcome::Fail => format!("{RED}FAIL{RESET}"),
    }
}

/// Print an entry's per-check results.
pub fn print_results(category: Category, results: &CheckResults) {
    println!("{} Results:", category.as_str());
    for (label, outcome) in results {
        println!("  {}: {}", label, token(*outcome));
    }
    println!("=================");
}

/// Print the serialised bundle for operator visibility.
pub fn print_bundle(bundle: &ReportBundle) {
    match serde_json::to_string_pretty(bundle) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{bundle:?}"),
    }
}

/// Print the grading service's response body.
pub fn print_response(category: Category, body: &str) {
    println!("{} Test Case Server Response: {}", category.as_str(), body);
}

/// Print a labeled error line for a fatally failed entry.
pub fn print_entry_error(name: &str, error: &dyn std::fmt::Display) {
    eprintln!("Error executing {name} test case: {error}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_colorized() {
        assert_eq!(token(CheckOutcome::Pass), "\x1b[32mPASS\x1b[0m");
        assert_eq!(token(CheckOutcome::Fail), "\x1b[31mFAIL\x1b[0m");
    }
}

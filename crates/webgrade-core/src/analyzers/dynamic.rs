//! Dynamic analyzer: scripted interaction sequences against a fresh
//! synthetic document.
//!
//! Each sequence instantiates its own document; no state survives from
//! one sequence to the next. An assertion mismatch is a `fail` outcome;
//! a script that fails to parse or throws is an [`AnalyzerError`], so a
//! crashed submission is distinguishable from a wrong one.

use crate::analyzers::Sequence;
use crate::domain::error::AnalyzerError;
use crate::domain::result::{CheckOutcome, CheckResults};
use crate::runtime::document::SyntheticDocument;
use crate::runtime::interp::ScriptHost;

/// Id of the input element every sequence observes.
const DISPLAY_ID: &str = "display";

/// Execute one canned sequence, yielding its single named check result.
pub fn run_sequence(script: &str, sequence: Sequence) -> Result<CheckResults, AnalyzerError> {
    match sequence {
        Sequence::Append => check_append(script),
        Sequence::Compute => check_compute(script),
        Sequence::Clear => check_clear(script),
    }
}

/// Append `"4"`; the display must read `"4"`.
fn check_append(script: &str) -> Result<CheckResults, AnalyzerError> {
    let document = SyntheticDocument::with_input(DISPLAY_ID, "");
    let mut host = ScriptHost::load(script, document)?;
    host.call("appendNumber", &["4"])?;
    Ok(single("appendNumber", display_equals(&host, "4")))
}

/// `10 * 2` through append/operator/append/compute; display `"20"`.
fn check_compute(script: &str) -> Result<CheckResults, AnalyzerError> {
    let document = SyntheticDocument::with_input(DISPLAY_ID, "");
    let mut host = ScriptHost::load(script, document)?;
    host.call("appendNumber", &["10"])?;
    host.call("operator", &["*"])?;
    host.call("appendNumber", &["2"])?;
    host.call("calculateResult", &[])?;
    Ok(single("calculateResult", display_equals(&host, "20")))
}

/// Clear a display pre-seeded with `"123"`; it must end up empty.
fn check_clear(script: &str) -> Result<CheckResults, AnalyzerError> {
    let document = SyntheticDocument::with_input(DISPLAY_ID, "123");
    let mut host = ScriptHost::load(script, document)?;
    host.call("clearDisplay", &[])?;
    Ok(single("clearDisplay", display_equals(&host, "")))
}

fn display_equals(host: &ScriptHost, expected: &str) -> CheckOutcome {
    CheckOutcome::from_bool(host.document().value_of(DISPLAY_ID) == Some(expected))
}

fn single(label: &str, outcome: CheckOutcome) -> CheckResults {
    let mut results = CheckResults::new();
    results.insert(label.to_string(), outcome);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALCULATOR: &str = r#"
let currentInput = "";
let currentOperator = "";
let firstOperand = null;

function appendNumber(number) {
    currentInput += number;
    display.value = currentInput;
}

function operator(op) {
    if (firstOperand === null) {
        firstOperand = currentInput;
        currentInput = "";
        currentOperator = op;
    } else {
        calculateResult();
        currentOperator = op;
    }
}

function calculateResult() {
    if (currentOperator && firstOperand !== null) {
        let result;
        switch (currentOperator) {
            case '+':
                result = parseFloat(firstOperand) + parseFloat(currentInput);
                break;
            case '*':
                result = parseFloat(firstOperand) * parseFloat(currentInput);
                break;
            case '/':
                if (currentInput === "0") {
                    alert("Cannot divide by zero!");
                    return;
                }
                result = parseFloat(firstOperand) / parseFloat(currentInput);
                break;
            default:
                return;
        }
        display.value = result;
        firstOperand = result;
        currentInput = "";
        currentOperator = "";
    }
}

function clearDisplay() {
    display.value = "";
    currentInput = "";
    firstOperand = null;
    currentOperator = "";
}
"#;

    #[test]
    fn test_append_sequence_passes() {
        let results = run_sequence(CALCULATOR, Sequence::Append).expect("sequence failed");
        assert_eq!(results["appendNumber"], CheckOutcome::Pass);
    }

    #[test]
    fn test_compute_sequence_passes() {
        let results = run_sequence(CALCULATOR, Sequence::Compute).expect("sequence failed");
        assert_eq!(results["calculateResult"], CheckOutcome::Pass);
    }

    #[test]
    fn test_clear_sequence_passes() {
        let results = run_sequence(CALCULATOR, Sequence::Clear).expect("sequence failed");
        assert_eq!(results["clearDisplay"], CheckOutcome::Pass);
    }

    #[test]
    fn test_wrong_behaviour_fails_not_errors() {
        // A clear that leaves the display untouched is a fail, not an error.
        let script = r#"
            function clearDisplay() {}
        "#;
        let results = run_sequence(script, Sequence::Clear).expect("sequence failed");
        assert_eq!(results["clearDisplay"], CheckOutcome::Fail);
    }

    #[test]
    fn test_throwing_script_is_an_execution_error() {
        // appendNumber trips over an undefined identifier at call time.
        let script = r#"
            function appendNumber(n) {
                missing.value = n;
            }
        "#;
        let err = run_sequence(script, Sequence::Append).expect_err("must propagate");
        assert!(matches!(err, AnalyzerError::ScriptRuntime(_)));
    }

    #[test]
    fn test_unparseable_script_is_a_parse_error() {
        let err = run_sequence("function {", Sequence::Append).expect_err("must propagate");
        assert!(matches!(err, AnalyzerError::ScriptParse(_)));
    }

    #[test]
    fn test_sequences_are_isolated() {
        // Append then clear: the clear sequence starts from "123", not
        // from anything the append sequence left behind.
        run_sequence(CALCULATOR, Sequence::Append).expect("append failed");
        let results = run_sequence(CALCULATOR, Sequence::Clear).expect("clear failed");
        assert_eq!(results["clearDisplay"], CheckOutcome::Pass);
    }
}

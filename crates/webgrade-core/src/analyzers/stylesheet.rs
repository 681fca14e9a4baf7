//! Stylesheet rule analyzer.
//!
//! Line-oriented textual matching, not a stylesheet parse: the first
//! block whose selector matches wins, and cascading, specificity, and
//! nested rules are not resolved. That scope is intentional and must not
//! be widened.

use regex::Regex;

use crate::analyzers::StyleRule;
use crate::domain::result::{CheckOutcome, CheckResults};

/// Check each rule specification against raw stylesheet text, keyed by
/// selector. A rule passes iff its first matching block contains every
/// required `property: value;` declaration.
pub fn check_rules(stylesheet: &str, rules: &[StyleRule]) -> CheckResults {
    rules
        .iter()
        .map(|rule| {
            (
                rule.selector.clone(),
                CheckOutcome::from_bool(rule_satisfied(stylesheet, rule)),
            )
        })
        .collect()
}

fn rule_satisfied(stylesheet: &str, rule: &StyleRule) -> bool {
    let Some(block) = first_block(stylesheet, &rule.selector) else {
        return false;
    };
    rule.properties
        .iter()
        .all(|(property, value)| has_declaration(&block, property, value))
}

/// Body of the first `selector { ... }` block. Selectors may contain
/// regex-special characters (`*`, `(`, `.`), so the selector is escaped
/// before searching.
fn first_block(stylesheet: &str, selector: &str) -> Option<String> {
    let pattern = format!(r"{}\s*\{{([^}}]+)\}}", regex::escape(selector));
    let re = Regex::new(&pattern).ok()?;
    re.captures(stylesheet)
        .map(|caps| caps[1].to_string())
}

/// Whether `property: value;` appears in the block, whitespace-tolerant.
fn has_declaration(block: &str, property: &str, value: &str) -> bool {
    let pattern = format!(
        r"{}\s*:\s*{}\s*;",
        regex::escape(property),
        regex::escape(value)
    );
    Regex::new(&pattern).map_or(false, |re| re.is_match(block))
}

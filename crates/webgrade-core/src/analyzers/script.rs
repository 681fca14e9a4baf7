//! Script declaration analyzer backed by a tree-sitter parse.
//!
//! Unlike the markup analyzers this one has no fallback: a script that
//! does not parse is an execution error for the rubric entry, not a
//! fail-map.

use tree_sitter::{Node, Tree};

use crate::domain::error::AnalyzerError;
use crate::domain::result::{CheckOutcome, CheckResults};

/// Report `pass` for each name bound by a top-level `function`
/// declaration with exactly that identifier. Nested declarations and
/// expression-form bindings (`const f = () => {}`) do not count.
pub fn check_declarations(
    source: &str,
    functions: &[String],
) -> Result<CheckResults, AnalyzerError> {
    let tree = parse(source)?;
    let declared = top_level_declarations(&tree, source);
    Ok(functions
        .iter()
        .map(|name| {
            let found = declared.iter().any(|decl| decl == name);
            (name.clone(), CheckOutcome::from_bool(found))
        })
        .collect())
}

/// Parse JavaScript source into a syntax tree, rejecting trees that
/// contain syntax errors.
pub(crate) fn parse(source: &str) -> Result<Tree, AnalyzerError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .map_err(|e| AnalyzerError::ScriptParse(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| AnalyzerError::ScriptParse("parser produced no tree".to_string()))?;

    if tree.root_node().has_error() {
        let position = first_error(tree.root_node())
            .map(|node| node.start_position())
            .unwrap_or_else(|| tree.root_node().start_position());
        return Err(AnalyzerError::ScriptParse(format!(
            "syntax error at {}:{}",
            position.row + 1,
            position.column + 1
        )));
    }

    Ok(tree)
}

/// Names of all top-level function declarations.
fn top_level_declarations(tree: &Tree, source: &str) -> Vec<String> {
    let root = tree.root_node();
    let mut cursor = root.walk();
    let mut names = Vec::new();
    for child in root.children(&mut cursor) {
        if child.kind() != "function_declaration" {
            continue;
        }
        if let Some(name) = child.child_by_field_name("name") {
            if let Ok(text) = name.utf8_text(source.as_bytes()) {
                names.push(text.to_string());
            }
        }
    }
    names
}

/// Depth-first search for the first error or missing node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

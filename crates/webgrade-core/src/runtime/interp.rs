//! JavaScript-subset interpreter driving the synthetic document.
//!
//! Covers the statement and expression forms a calculator submission
//! uses: variable and function declarations, assignments, arithmetic
//! and equality operators with string/number coercion, `if`/`else`,
//! `switch`, `while`, `return`, calls, member access on document
//! elements, and the `parseFloat`/`parseInt`/`Number`/`String`/`isNaN`/
//! `alert`/`document.getElementById` builtins. Elements with an id are
//! reachable as globals, matching browser named access.
//!
//! Unsupported syntax raises a runtime error instead of being skipped,
//! so an exotic or crashing script surfaces as an execution error for
//! the rubric entry rather than a silent wrong answer.

use std::collections::HashMap;

use tree_sitter::{Node, Tree};

use crate::analyzers::script;
use crate::domain::error::AnalyzerError;
use crate::runtime::document::SyntheticDocument;
use crate::runtime::value::{self, Value};

/// Call-stack depth bound for runaway recursion.
const MAX_CALL_DEPTH: usize = 100;

/// Iteration bound for `while` loops; the harness has no other way to
/// interrupt a non-terminating submission.
const LOOP_LIMIT: usize = 100_000;

/// Executes a parsed script against an explicitly supplied document.
///
/// The document is owned by the host for the lifetime of the sequence
/// and handed back (or inspected in place) when the sequence finishes.
#[derive(Debug)]
pub struct ScriptHost {
    source: String,
    tree: Tree,
    document: SyntheticDocument,
    globals: HashMap<String, Value>,
}

impl ScriptHost {
    /// Parse the script and evaluate its top-level statements against
    /// the given document.
    pub fn load(script_source: &str, document: SyntheticDocument) -> Result<Self, AnalyzerError> {
        let tree = script::parse(script_source)?;
        let mut host = Self {
            source: script_source.to_string(),
            tree,
            document,
            globals: HashMap::new(),
        };
        host.run_top_level()?;
        Ok(host)
    }

    /// Invoke a global function with string arguments.
    pub fn call(&mut self, name: &str, args: &[&str]) -> Result<Value, AnalyzerError> {
        let values = args
            .iter()
            .map(|arg| Value::Str((*arg).to_string()))
            .collect();
        self.call_with(name, values)
    }

    /// Invoke a global function with already-built values.
    pub fn call_with(&mut self, name: &str, args: Vec<Value>) -> Result<Value, AnalyzerError> {
        let tree = self.tree.clone();
        let root = tree.root_node();
        let mut interp = Interp {
            source: self.source.as_bytes(),
            root,
            document: &mut self.document,
            globals: &mut self.globals,
            frames: Vec::new(),
        };
        interp.call_named(root, name, args)
    }

    /// The document as the script has left it.
    pub fn document(&self) -> &SyntheticDocument {
        &self.document
    }

    /// Tear down the host, releasing the document.
    pub fn into_document(self) -> SyntheticDocument {
        self.document
    }

    fn run_top_level(&mut self) -> Result<(), AnalyzerError> {
        let tree = self.tree.clone();
        let root = tree.root_node();
        let mut interp = Interp {
            source: self.source.as_bytes(),
            root,
            document: &mut self.document,
            globals: &mut self.globals,
            frames: Vec::new(),
        };
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            interp.exec_stmt(child)?;
        }
        Ok(())
    }
}

/// Control-flow signal threaded through statement execution.
enum Flow {
    Normal,
    Break,
    Return(Value),
}

struct Interp<'a> {
    source: &'a [u8],
    root: Node<'a>,
    document: &'a mut SyntheticDocument,
    globals: &'a mut HashMap<String, Value>,
    /// One frame per active function call; empty at top level.
    frames: Vec<HashMap<String, Value>>,
}

fn runtime_err(node: Node<'_>, message: &str) -> AnalyzerError {
    let position = node.start_position();
    AnalyzerError::ScriptRuntime(format!(
        "{} at {}:{}",
        message,
        position.row + 1,
        position.column + 1
    ))
}

impl<'a> Interp<'a> {
    fn text(&self, node: Node<'a>) -> &'a str {
        node.utf8_text(self.source).unwrap_or("")
    }

    // ── statements ────────────────────────────────────────────────────

    fn exec_stmt(&mut self, node: Node<'a>) -> Result<Flow, AnalyzerError> {
        match node.kind() {
            // Function declarations are resolved lazily at call sites.
            "function_declaration" | "comment" | "empty_statement" => Ok(Flow::Normal),
            "lexical_declaration" | "variable_declaration" => {
                self.exec_declaration(node)?;
                Ok(Flow::Normal)
            }
            "expression_statement" => {
                if let Some(expr) = node.named_child(0) {
                    self.eval(expr)?;
                }
                Ok(Flow::Normal)
            }
            "statement_block" => self.exec_block(node),
            "if_statement" => self.exec_if(node),
            "switch_statement" => self.exec_switch(node),
            "while_statement" => self.exec_while(node),
            "return_statement" => {
                let value = match node.named_child(0) {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Undefined,
                };
                Ok(Flow::Return(value))
            }
            "break_statement" => Ok(Flow::Break),
            kind => Err(runtime_err(node, &format!("unsupported statement `{kind}`"))),
        }
    }

    fn exec_declaration(&mut self, node: Node<'a>) -> Result<(), AnalyzerError> {
        let mut cursor = node.walk();
        let declarators: Vec<Node<'a>> = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "variable_declarator")
            .collect();
        for declarator in declarators {
            let name_node = declarator
                .child_by_field_name("name")
                .ok_or_else(|| runtime_err(declarator, "declarator without a name"))?;
            let name = self.text(name_node).to_string();
            let value = match declarator.child_by_field_name("value") {
                Some(init) => self.eval(init)?,
                None => Value::Undefined,
            };
            self.declare(name, value);
        }
        Ok(())
    }

    fn exec_block(&mut self, node: Node<'a>) -> Result<Flow, AnalyzerError> {
        let mut cursor = node.walk();
        let statements: Vec<Node<'a>> = node.named_children(&mut cursor).collect();
        for stmt in statements {
            match self.exec_stmt(stmt)? {
                Flow::Normal => {}
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_if(&mut self, node: Node<'a>) -> Result<Flow, AnalyzerError> {
        let condition = node
            .child_by_field_name("condition")
            .ok_or_else(|| runtime_err(node, "if without condition"))?;
        if self.eval(condition)?.truthy() {
            let consequence = node
                .child_by_field_name("consequence")
                .ok_or_else(|| runtime_err(node, "if without consequence"))?;
            self.exec_stmt(consequence)
        } else if let Some(alternative) = node.child_by_field_name("alternative") {
            // else_clause wraps the else-branch statement
            match alternative.named_child(0) {
                Some(stmt) => self.exec_stmt(stmt),
                None => Ok(Flow::Normal),
            }
        } else {
            Ok(Flow::Normal)
        }
    }

    fn exec_while(&mut self, node: Node<'a>) -> Result<Flow, AnalyzerError> {
        let condition = node
            .child_by_field_name("condition")
            .ok_or_else(|| runtime_err(node, "while without condition"))?;
        let body = node
            .child_by_field_name("body")
            .ok_or_else(|| runtime_err(node, "while without body"))?;
        let mut iterations = 0usize;
        while self.eval(condition)?.truthy() {
            iterations += 1;
            if iterations > LOOP_LIMIT {
                return Err(runtime_err(node, "loop iteration limit exceeded"));
            }
            match self.exec_stmt(body)? {
                Flow::Normal => {}
                Flow::Break => break,
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    /// `switch` matches with strict equality, runs from the matching case
    /// (or `default` when none matches) and falls through until `break`.
    fn exec_switch(&mut self, node: Node<'a>) -> Result<Flow, AnalyzerError> {
        let discriminant = node
            .child_by_field_name("value")
            .ok_or_else(|| runtime_err(node, "switch without value"))?;
        let subject = self.eval(discriminant)?;

        let body = node
            .child_by_field_name("body")
            .ok_or_else(|| runtime_err(node, "switch without body"))?;
        let mut cursor = body.walk();
        let cases: Vec<Node<'a>> = body
            .named_children(&mut cursor)
            .filter(|child| matches!(child.kind(), "switch_case" | "switch_default"))
            .collect();

        let mut start = None;
        for (index, case) in cases.iter().enumerate() {
            if case.kind() != "switch_case" {
                continue;
            }
            let case_value = case
                .child_by_field_name("value")
                .ok_or_else(|| runtime_err(*case, "case without value"))?;
            if self.eval(case_value)?.strict_eq(&subject) {
                start = Some(index);
                break;
            }
        }
        let start = start.or_else(|| cases.iter().position(|c| c.kind() == "switch_default"));

        let Some(start) = start else {
            return Ok(Flow::Normal);
        };
        for case in &cases[start..] {
            let value_id = case.child_by_field_name("value").map(|n| n.id());
            let mut case_cursor = case.walk();
            let statements: Vec<Node<'a>> = case
                .named_children(&mut case_cursor)
                .filter(|child| Some(child.id()) != value_id && child.kind() != "comment")
                .collect();
            for stmt in statements {
                match self.exec_stmt(stmt)? {
                    Flow::Normal => {}
                    Flow::Break => return Ok(Flow::Normal),
                    flow @ Flow::Return(_) => return Ok(flow),
                }
            }
        }
        Ok(Flow::Normal)
    }

    // ── expressions ───────────────────────────────────────────────────

    fn eval(&mut self, node: Node<'a>) -> Result<Value, AnalyzerError> {
        match node.kind() {
            "identifier" => {
                let name = self.text(node).to_string();
                self.lookup(&name, node)
            }
            "number" => {
                let text = self.text(node);
                let parsed = if text.starts_with("0x") || text.starts_with("0X") {
                    value::parse_int(text)
                } else {
                    text.parse::<f64>().unwrap_or(f64::NAN)
                };
                Ok(Value::Num(parsed))
            }
            "string" => Ok(Value::Str(self.string_literal(node))),
            "template_string" => self.eval_template(node),
            "null" => Ok(Value::Null),
            "undefined" => Ok(Value::Undefined),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "parenthesized_expression" => {
                let inner = node
                    .named_child(0)
                    .ok_or_else(|| runtime_err(node, "empty parenthesized expression"))?;
                self.eval(inner)
            }
            "binary_expression" => self.eval_binary(node),
            "unary_expression" => self.eval_unary(node),
            "ternary_expression" => {
                let condition = node
                    .child_by_field_name("condition")
                    .ok_or_else(|| runtime_err(node, "ternary without condition"))?;
                let branch = if self.eval(condition)?.truthy() {
                    node.child_by_field_name("consequence")
                } else {
                    node.child_by_field_name("alternative")
                };
                let branch = branch.ok_or_else(|| runtime_err(node, "ternary without branch"))?;
                self.eval(branch)
            }
            "assignment_expression" => self.eval_assignment(node),
            "augmented_assignment_expression" => self.eval_augmented(node),
            "update_expression" => self.eval_update(node),
            "call_expression" => self.eval_call(node),
            "member_expression" => self.eval_member(node),
            kind => Err(runtime_err(node, &format!("unsupported expression `{kind}`"))),
        }
    }

    fn string_literal(&self, node: Node<'a>) -> String {
        let mut out = String::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "string_fragment" => out.push_str(self.text(child)),
                "escape_sequence" => out.push_str(&unescape(self.text(child))),
                _ => {}
            }
        }
        out
    }

    fn eval_template(&mut self, node: Node<'a>) -> Result<Value, AnalyzerError> {
        let mut out = String::new();
        let mut cursor = node.walk();
        let parts: Vec<Node<'a>> = node.named_children(&mut cursor).collect();
        for part in parts {
            match part.kind() {
                "string_fragment" => out.push_str(self.text(part)),
                "escape_sequence" => out.push_str(&unescape(self.text(part))),
                "template_substitution" => {
                    let inner = part
                        .named_child(0)
                        .ok_or_else(|| runtime_err(part, "empty template substitution"))?;
                    let value = self.eval(inner)?;
                    out.push_str(&value.as_string());
                }
                _ => {}
            }
        }
        Ok(Value::Str(out))
    }

    fn eval_binary(&mut self, node: Node<'a>) -> Result<Value, AnalyzerError> {
        let left = node
            .child_by_field_name("left")
            .ok_or_else(|| runtime_err(node, "binary expression without left operand"))?;
        let right = node
            .child_by_field_name("right")
            .ok_or_else(|| runtime_err(node, "binary expression without right operand"))?;
        let operator = node
            .child_by_field_name("operator")
            .map(|op| op.kind())
            .ok_or_else(|| runtime_err(node, "binary expression without operator"))?;

        // Logical operators short-circuit.
        if operator == "&&" {
            let lhs = self.eval(left)?;
            return if lhs.truthy() { self.eval(right) } else { Ok(lhs) };
        }
        if operator == "||" {
            let lhs = self.eval(left)?;
            return if lhs.truthy() { Ok(lhs) } else { self.eval(right) };
        }

        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;
        let result = match operator {
            "+" => {
                if matches!(lhs, Value::Str(_)) || matches!(rhs, Value::Str(_)) {
                    Value::Str(format!("{}{}", lhs.as_string(), rhs.as_string()))
                } else {
                    Value::Num(lhs.as_number() + rhs.as_number())
                }
            }
            "-" => Value::Num(lhs.as_number() - rhs.as_number()),
            "*" => Value::Num(lhs.as_number() * rhs.as_number()),
            "/" => Value::Num(lhs.as_number() / rhs.as_number()),
            "%" => Value::Num(lhs.as_number() % rhs.as_number()),
            "===" => Value::Bool(lhs.strict_eq(&rhs)),
            "!==" => Value::Bool(!lhs.strict_eq(&rhs)),
            "==" => Value::Bool(lhs.loose_eq(&rhs)),
            "!=" => Value::Bool(!lhs.loose_eq(&rhs)),
            "<" | "<=" | ">" | ">=" => compare(&lhs, &rhs, operator),
            _ => {
                return Err(runtime_err(
                    node,
                    &format!("unsupported operator `{operator}`"),
                ))
            }
        };
        Ok(result)
    }

    fn eval_unary(&mut self, node: Node<'a>) -> Result<Value, AnalyzerError> {
        let operator = node
            .child_by_field_name("operator")
            .map(|op| op.kind())
            .ok_or_else(|| runtime_err(node, "unary expression without operator"))?;
        let argument = node
            .child_by_field_name("argument")
            .ok_or_else(|| runtime_err(node, "unary expression without argument"))?;
        let value = self.eval(argument)?;
        match operator {
            "-" => Ok(Value::Num(-value.as_number())),
            "+" => Ok(Value::Num(value.as_number())),
            "!" => Ok(Value::Bool(!value.truthy())),
            "typeof" => Ok(Value::Str(value.type_of().to_string())),
            _ => Err(runtime_err(
                node,
                &format!("unsupported unary operator `{operator}`"),
            )),
        }
    }

    fn eval_assignment(&mut self, node: Node<'a>) -> Result<Value, AnalyzerError> {
        let left = node
            .child_by_field_name("left")
            .ok_or_else(|| runtime_err(node, "assignment without target"))?;
        let right = node
            .child_by_field_name("right")
            .ok_or_else(|| runtime_err(node, "assignment without value"))?;
        let value = self.eval(right)?;
        self.store(left, value.clone())?;
        Ok(value)
    }

    fn eval_augmented(&mut self, node: Node<'a>) -> Result<Value, AnalyzerError> {
        let left = node
            .child_by_field_name("left")
            .ok_or_else(|| runtime_err(node, "assignment without target"))?;
        let right = node
            .child_by_field_name("right")
            .ok_or_else(|| runtime_err(node, "assignment without value"))?;
        let operator = node
            .child_by_field_name("operator")
            .map(|op| op.kind())
            .ok_or_else(|| runtime_err(node, "assignment without operator"))?;

        let current = self.load(left)?;
        let rhs = self.eval(right)?;
        let value = match operator {
            "+=" => {
                if matches!(current, Value::Str(_)) || matches!(rhs, Value::Str(_)) {
                    Value::Str(format!("{}{}", current.as_string(), rhs.as_string()))
                } else {
                    Value::Num(current.as_number() + rhs.as_number())
                }
            }
            "-=" => Value::Num(current.as_number() - rhs.as_number()),
            "*=" => Value::Num(current.as_number() * rhs.as_number()),
            "/=" => Value::Num(current.as_number() / rhs.as_number()),
            _ => {
                return Err(runtime_err(
                    node,
                    &format!("unsupported operator `{operator}`"),
                ))
            }
        };
        self.store(left, value.clone())?;
        Ok(value)
    }

    fn eval_update(&mut self, node: Node<'a>) -> Result<Value, AnalyzerError> {
        let operator = node
            .child_by_field_name("operator")
            .map(|op| op.kind())
            .ok_or_else(|| runtime_err(node, "update without operator"))?;
        let argument = node
            .child_by_field_name("argument")
            .ok_or_else(|| runtime_err(node, "update without argument"))?;
        let current = self.load(argument)?.as_number();
        let updated = match operator {
            "++" => current + 1.0,
            "--" => current - 1.0,
            _ => {
                return Err(runtime_err(
                    node,
                    &format!("unsupported operator `{operator}`"),
                ))
            }
        };
        self.store(argument, Value::Num(updated))?;
        Ok(Value::Num(updated))
    }

    fn eval_member(&mut self, node: Node<'a>) -> Result<Value, AnalyzerError> {
        let object = node
            .child_by_field_name("object")
            .ok_or_else(|| runtime_err(node, "member access without object"))?;
        let property = node
            .child_by_field_name("property")
            .ok_or_else(|| runtime_err(node, "member access without property"))?;
        let target = self.eval(object)?;
        let name = self.text(property);

        match (&target, name) {
            (Value::Element(handle), "value") => {
                Ok(Value::Str(self.document.element(*handle).value.clone()))
            }
            (Value::Element(handle), "id") => {
                Ok(Value::Str(self.document.element(*handle).id.clone()))
            }
            (Value::Element(handle), "tagName") => Ok(Value::Str(
                self.document.element(*handle).tag.to_ascii_uppercase(),
            )),
            (Value::Str(s), "length") => Ok(Value::Num(s.chars().count() as f64)),
            _ => Err(runtime_err(
                node,
                &format!("unsupported property `{name}`"),
            )),
        }
    }

    fn eval_call(&mut self, node: Node<'a>) -> Result<Value, AnalyzerError> {
        let callee = node
            .child_by_field_name("function")
            .ok_or_else(|| runtime_err(node, "call without callee"))?;
        let args = self.eval_arguments(node)?;

        match callee.kind() {
            "identifier" => {
                let name = self.text(callee).to_string();
                self.call_builtin_or_function(node, &name, args)
            }
            "member_expression" => {
                let object = callee
                    .child_by_field_name("object")
                    .ok_or_else(|| runtime_err(callee, "method call without object"))?;
                let property = callee
                    .child_by_field_name("property")
                    .ok_or_else(|| runtime_err(callee, "method call without property"))?;
                let target = self.eval(object)?;
                let method = self.text(property);
                match (&target, method) {
                    (Value::Document, "getElementById") => {
                        let id = args
                            .first()
                            .map(Value::as_string)
                            .unwrap_or_default();
                        Ok(match self.document.find(&id) {
                            Some(handle) => Value::Element(handle),
                            None => Value::Null,
                        })
                    }
                    _ => Err(runtime_err(
                        node,
                        &format!("unsupported method `{method}`"),
                    )),
                }
            }
            kind => Err(runtime_err(node, &format!("unsupported callee `{kind}`"))),
        }
    }

    fn eval_arguments(&mut self, call: Node<'a>) -> Result<Vec<Value>, AnalyzerError> {
        let Some(arguments) = call.child_by_field_name("arguments") else {
            return Ok(Vec::new());
        };
        let mut cursor = arguments.walk();
        let nodes: Vec<Node<'a>> = arguments
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .collect();
        nodes.into_iter().map(|arg| self.eval(arg)).collect()
    }

    fn call_builtin_or_function(
        &mut self,
        site: Node<'a>,
        name: &str,
        args: Vec<Value>,
    ) -> Result<Value, AnalyzerError> {
        let first = args.first().cloned().unwrap_or(Value::Undefined);
        match name {
            "parseFloat" => Ok(Value::Num(value::parse_float(&first.as_string()))),
            "parseInt" => Ok(Value::Num(value::parse_int(&first.as_string()))),
            "Number" => Ok(Value::Num(first.as_number())),
            "String" => Ok(Value::Str(first.as_string())),
            "isNaN" => Ok(Value::Bool(first.as_number().is_nan())),
            "alert" => {
                self.document.push_alert(first.as_string());
                Ok(Value::Undefined)
            }
            _ => self.call_named(site, name, args),
        }
    }

    /// Invoke a top-level function declaration by name.
    fn call_named(
        &mut self,
        site: Node<'a>,
        name: &str,
        args: Vec<Value>,
    ) -> Result<Value, AnalyzerError> {
        if self.frames.len() >= MAX_CALL_DEPTH {
            return Err(runtime_err(site, "call stack depth exceeded"));
        }
        let declaration = self
            .find_function(name)
            .ok_or_else(|| runtime_err(site, &format!("{name} is not a function")))?;

        let mut frame = HashMap::new();
        if let Some(parameters) = declaration.child_by_field_name("parameters") {
            let mut cursor = parameters.walk();
            for (index, parameter) in parameters
                .named_children(&mut cursor)
                .filter(|child| child.kind() == "identifier")
                .enumerate()
            {
                let value = args.get(index).cloned().unwrap_or(Value::Undefined);
                frame.insert(self.text(parameter).to_string(), value);
            }
        }

        let body = declaration
            .child_by_field_name("body")
            .ok_or_else(|| runtime_err(declaration, "function without body"))?;

        self.frames.push(frame);
        let flow = self.exec_block(body);
        self.frames.pop();

        match flow? {
            Flow::Return(value) => Ok(value),
            _ => Ok(Value::Undefined),
        }
    }

    fn find_function(&self, name: &str) -> Option<Node<'a>> {
        let mut cursor = self.root.walk();
        let found = self
            .root
            .children(&mut cursor)
            .find(|child| {
                child.kind() == "function_declaration"
                    && child
                        .child_by_field_name("name")
                        .map_or(false, |n| self.text(n) == name)
            });
        found
    }

    // ── bindings ──────────────────────────────────────────────────────

    /// Evaluate an assignment target as a read (for `+=` and `++`).
    fn load(&mut self, target: Node<'a>) -> Result<Value, AnalyzerError> {
        match target.kind() {
            "identifier" => {
                let name = self.text(target).to_string();
                self.lookup(&name, target)
            }
            "member_expression" => self.eval_member(target),
            kind => Err(runtime_err(
                target,
                &format!("unsupported assignment target `{kind}`"),
            )),
        }
    }

    fn store(&mut self, target: Node<'a>, value: Value) -> Result<(), AnalyzerError> {
        match target.kind() {
            "identifier" => {
                let name = self.text(target).to_string();
                self.assign(&name, value);
                Ok(())
            }
            "member_expression" => {
                let object = target
                    .child_by_field_name("object")
                    .ok_or_else(|| runtime_err(target, "member access without object"))?;
                let property = target
                    .child_by_field_name("property")
                    .ok_or_else(|| runtime_err(target, "member access without property"))?;
                let element = self.eval(object)?;
                let name = self.text(property);
                match (&element, name) {
                    (Value::Element(handle), "value") => {
                        // DOM input values are strings; coerce on write.
                        self.document.set_value(*handle, value.as_string());
                        Ok(())
                    }
                    _ => Err(runtime_err(
                        target,
                        &format!("unsupported property `{name}`"),
                    )),
                }
            }
            kind => Err(runtime_err(
                target,
                &format!("unsupported assignment target `{kind}`"),
            )),
        }
    }

    fn declare(&mut self, name: String, value: Value) {
        match self.frames.last_mut() {
            Some(frame) => {
                frame.insert(name, value);
            }
            None => {
                self.globals.insert(name, value);
            }
        }
    }

    fn assign(&mut self, name: &str, value: Value) {
        // Scoping is lexical: only the current call frame is visible,
        // never an outer caller's locals.
        if let Some(frame) = self.frames.last_mut() {
            if frame.contains_key(name) {
                frame.insert(name.to_string(), value);
                return;
            }
        }
        // Existing global, or an implicit one (non-strict semantics).
        self.globals.insert(name.to_string(), value);
    }

    fn lookup(&self, name: &str, site: Node<'a>) -> Result<Value, AnalyzerError> {
        if let Some(value) = self.frames.last().and_then(|frame| frame.get(name)) {
            return Ok(value.clone());
        }
        if let Some(value) = self.globals.get(name) {
            return Ok(value.clone());
        }
        match name {
            "undefined" => Ok(Value::Undefined),
            "NaN" => Ok(Value::Num(f64::NAN)),
            "Infinity" => Ok(Value::Num(f64::INFINITY)),
            "document" => Ok(Value::Document),
            _ => {
                // Browser named access: elements with an id are globals.
                if let Some(handle) = self.document.find(name) {
                    return Ok(Value::Element(handle));
                }
                Err(runtime_err(site, &format!("{name} is not defined")))
            }
        }
    }
}

fn compare(lhs: &Value, rhs: &Value, operator: &str) -> Value {
    if let (Value::Str(a), Value::Str(b)) = (lhs, rhs) {
        return Value::Bool(match operator {
            "<" => a < b,
            "<=" => a <= b,
            ">" => a > b,
            _ => a >= b,
        });
    }
    let (a, b) = (lhs.as_number(), rhs.as_number());
    if a.is_nan() || b.is_nan() {
        return Value::Bool(false);
    }
    Value::Bool(match operator {
        "<" => a < b,
        "<=" => a <= b,
        ">" => a > b,
        _ => a >= b,
    })
}

/// Decode a JavaScript escape sequence (`\n`, `\t`, `\"`, ...). Unknown
/// escapes drop the backslash, matching engine behaviour.
fn unescape(escape: &str) -> String {
    let Some(rest) = escape.strip_prefix('\\') else {
        return escape.to_string();
    };
    match rest {
        "n" => "\n".to_string(),
        "t" => "\t".to_string(),
        "r" => "\r".to_string(),
        "0" => "\0".to_string(),
        "\\" => "\\".to_string(),
        "'" => "'".to_string(),
        "\"" => "\"".to_string(),
        "`" => "`".to_string(),
        other => other.to_string(),
    }
}

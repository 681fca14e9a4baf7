//! Synthetic execution environment for dynamic checks.
//!
//! A [`document::SyntheticDocument`] is a minimal in-memory document
//! (for the calculator rubric, a single `<input id="display">`) built
//! fresh per interaction sequence and passed explicitly into the
//! [`interp::ScriptHost`] that executes the subject script against it.

pub mod document;
pub mod interp;
pub mod value;

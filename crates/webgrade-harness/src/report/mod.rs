//! Reporter sinks.
//!
//! Four independent, best-effort destinations per rubric entry: the
//! remote grading endpoint, an XML document, a category-routed flat
//! file, and the operator console. A failure in one sink is logged and
//! never prevents the others.

pub mod console;
pub mod flat;
pub mod remote;
pub mod xml;

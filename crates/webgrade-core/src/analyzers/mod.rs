//! Artifact analyzers.
//!
//! Every rubric entry references one analyzer through [`AnalyzerKind`],
//! a closed set of behaviours behind the uniform
//! `analyze(text) -> CheckResults` contract. The rubric stays plain data
//! (serialisable, inspectable) instead of holding function references.

pub mod dynamic;
pub mod markup;
pub mod script;
pub mod stylesheet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::error::AnalyzerError;
use crate::domain::result::CheckResults;

/// Which artifact an analyzer consumes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Markup,
    Stylesheet,
    Script,
}

/// One stylesheet expectation: a selector plus the declarations its rule
/// block must contain. Selectors and values are plain text; escaping for
/// the textual scan is the analyzer's concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub properties: IndexMap<String, String>,
}

impl StyleRule {
    /// Build a rule from a selector and `(property, expected value)` pairs.
    pub fn new(selector: &str, properties: &[(&str, &str)]) -> Self {
        Self {
            selector: selector.to_string(),
            properties: properties
                .iter()
                .map(|(prop, value)| (prop.to_string(), value.to_string()))
                .collect(),
        }
    }
}

/// The canned dynamic interaction sequences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sequence {
    /// Append the numeral `"4"`; the display must read `"4"`.
    Append,
    /// `10 * 2` through append/operator/append/compute; display `"20"`.
    Compute,
    /// Clear a display pre-seeded with `"123"`; display must be empty.
    Clear,
}

/// Closed set of analyzer behaviours a rubric entry can name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalyzerKind {
    /// At least one element per required tag exists in the markup.
    TagPresence { tags: Vec<String> },

    /// Any element of `tag` carries each required attribute.
    AttributePresence {
        tag: String,
        attributes: Vec<String>,
    },

    /// Each rule's first matching block contains its declarations.
    StylesheetRules { rules: Vec<StyleRule> },

    /// Each name is bound by a top-level function declaration.
    ScriptDeclarations { functions: Vec<String> },

    /// One scripted interaction sequence against a fresh synthetic document.
    DynamicSequence { sequence: Sequence },
}

impl AnalyzerKind {
    /// The artifact this analyzer inspects.
    pub fn artifact(&self) -> ArtifactKind {
        match self {
            AnalyzerKind::TagPresence { .. } | AnalyzerKind::AttributePresence { .. } => {
                ArtifactKind::Markup
            }
            AnalyzerKind::StylesheetRules { .. } => ArtifactKind::Stylesheet,
            AnalyzerKind::ScriptDeclarations { .. } | AnalyzerKind::DynamicSequence { .. } => {
                ArtifactKind::Script
            }
        }
    }

    /// Run the analyzer against raw artifact text.
    ///
    /// Markup and stylesheet checks cannot fail structurally; only the
    /// script-based analyzers return errors (parse or execution).
    pub fn analyze(&self, text: &str) -> Result<CheckResults, AnalyzerError> {
        match self {
            AnalyzerKind::TagPresence { tags } => Ok(markup::check_tags(text, tags)),
            AnalyzerKind::AttributePresence { tag, attributes } => {
                Ok(markup::check_attributes(text, tag, attributes))
            }
            AnalyzerKind::StylesheetRules { rules } => Ok(stylesheet::check_rules(text, rules)),
            AnalyzerKind::ScriptDeclarations { functions } => {
                script::check_declarations(text, functions)
            }
            AnalyzerKind::DynamicSequence { sequence } => dynamic::run_sequence(text, *sequence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_routing() {
        let tags = AnalyzerKind::TagPresence { tags: vec![] };
        assert_eq!(tags.artifact(), ArtifactKind::Markup);

        let styles = AnalyzerKind::StylesheetRules { rules: vec![] };
        assert_eq!(styles.artifact(), ArtifactKind::Stylesheet);

        let decls = AnalyzerKind::ScriptDeclarations { functions: vec![] };
        assert_eq!(decls.artifact(), ArtifactKind::Script);

        let dynamic = AnalyzerKind::DynamicSequence {
            sequence: Sequence::Append,
        };
        assert_eq!(dynamic.artifact(), ArtifactKind::Script);
    }

    #[test]
    fn test_analyzer_kind_round_trips_as_data() {
        let kind = AnalyzerKind::AttributePresence {
            tag: "input".to_string(),
            attributes: vec!["type".to_string(), "id".to_string()],
        };
        let json = serde_json::to_string(&kind).expect("serialize");
        assert!(json.contains("\"kind\":\"attribute_presence\""));

        let back: AnalyzerKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, kind);
    }
}

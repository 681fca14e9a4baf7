//! The fixed grading rubric and its identity.
//!
//! Rubric entries are data, not code: each names an [`AnalyzerKind`]
//! variant with its parameters, so the whole rubric serialises for
//! inspection and its identity can be digested. Weighting policy can
//! change without touching analyzer logic.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use webgrade_core::{AnalyzerKind, Category, Sequence, StyleRule};

/// One fixed check the harness performs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RubricEntry {
    pub name: String,
    pub category: Category,
    pub analyzer: AnalyzerKind,
}

impl RubricEntry {
    fn new(name: &str, category: Category, analyzer: AnalyzerKind) -> Self {
        Self {
            name: name.to_string(),
            category,
            analyzer,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The builtin calculator rubric. Every entry is unweighted and
/// evaluated independently of the others.
pub fn builtin_rubric() -> Vec<RubricEntry> {
    vec![
        RubricEntry::new(
            "HTML Tags Test",
            Category::Boundary,
            AnalyzerKind::TagPresence {
                tags: strings(&[
                    "html", "head", "title", "link", "body", "div", "button", "script",
                ]),
            },
        ),
        RubricEntry::new(
            "Link Tag Attribute Test",
            Category::Boundary,
            AnalyzerKind::AttributePresence {
                tag: "link".to_string(),
                attributes: strings(&["rel", "href"]),
            },
        ),
        RubricEntry::new(
            "Script Tag Attribute Test",
            Category::Boundary,
            AnalyzerKind::AttributePresence {
                tag: "script".to_string(),
                attributes: strings(&["src"]),
            },
        ),
        RubricEntry::new(
            "Input Tag Attribute Test",
            Category::Boundary,
            AnalyzerKind::AttributePresence {
                tag: "input".to_string(),
                attributes: strings(&["type", "id", "disabled"]),
            },
        ),
        RubricEntry::new(
            "Button Tag Attribute Test",
            Category::Boundary,
            AnalyzerKind::AttributePresence {
                tag: "button".to_string(),
                attributes: strings(&["class", "onclick"]),
            },
        ),
        RubricEntry::new(
            "JS Calculator Function Declarations",
            Category::Boundary,
            AnalyzerKind::ScriptDeclarations {
                functions: strings(&[
                    "appendNumber",
                    "operator",
                    "calculateResult",
                    "clearDisplay",
                ]),
            },
        ),
        RubricEntry::new(
            "appendNumber Functionality Test",
            Category::Functional,
            AnalyzerKind::DynamicSequence {
                sequence: Sequence::Append,
            },
        ),
        RubricEntry::new(
            "calculateResult Functionality Test",
            Category::Functional,
            AnalyzerKind::DynamicSequence {
                sequence: Sequence::Compute,
            },
        ),
        RubricEntry::new(
            "clearDisplay Functionality Test",
            Category::Functional,
            AnalyzerKind::DynamicSequence {
                sequence: Sequence::Clear,
            },
        ),
        RubricEntry::new(
            "CSS File Style Test",
            Category::Boundary,
            AnalyzerKind::StylesheetRules {
                rules: vec![
                    StyleRule::new(
                        "*",
                        &[
                            ("margin", "0"),
                            ("padding", "0"),
                            ("box-sizing", "border-box"),
                        ],
                    ),
                    StyleRule::new(
                        "body",
                        &[
                            ("display", "flex"),
                            ("justify-content", "center"),
                            ("align-items", "center"),
                        ],
                    ),
                    StyleRule::new(
                        ".calculator",
                        &[("width", "320px"), ("border-radius", "10px")],
                    ),
                    StyleRule::new("input", &[("width", "100%"), ("height", "50px")]),
                    StyleRule::new(
                        ".buttons",
                        &[
                            ("display", "grid"),
                            ("grid-template-columns", "repeat(4, 1fr)"),
                        ],
                    ),
                    StyleRule::new("button", &[("font-size", "20px"), ("cursor", "pointer")]),
                    StyleRule::new("button:hover", &[("background-color", "#ddd")]),
                    StyleRule::new("button:active", &[("background-color", "#ccc")]),
                ],
            },
        ),
    ]
}

/// Deterministic digest of the serialised rubric, logged at run start so
/// report consumers can tell which rubric produced a result set.
pub fn rubric_digest(rubric: &[RubricEntry]) -> String {
    let mut hasher = Sha256::new();
    for entry in rubric {
        let serialised = serde_json::to_string(entry).unwrap_or_default();
        hasher.update(serialised.as_bytes());
        hasher.update(b"\0");
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use webgrade_core::ArtifactKind;

    #[test]
    fn test_builtin_rubric_shape() {
        let rubric = builtin_rubric();
        assert_eq!(rubric.len(), 10);

        let functional = rubric
            .iter()
            .filter(|e| e.category == Category::Functional)
            .count();
        assert_eq!(functional, 3);
    }

    #[test]
    fn test_rubric_is_serialisable() {
        let rubric = builtin_rubric();
        let json = serde_json::to_string(&rubric).expect("serialize rubric");
        let back: Vec<RubricEntry> = serde_json::from_str(&json).expect("deserialize rubric");
        assert_eq!(back, rubric);
    }

    #[test]
    fn test_rubric_artifacts() {
        let rubric = builtin_rubric();
        let markup = rubric
            .iter()
            .filter(|e| e.analyzer.artifact() == ArtifactKind::Markup)
            .count();
        let stylesheet = rubric
            .iter()
            .filter(|e| e.analyzer.artifact() == ArtifactKind::Stylesheet)
            .count();
        let script = rubric
            .iter()
            .filter(|e| e.analyzer.artifact() == ArtifactKind::Script)
            .count();
        assert_eq!((markup, stylesheet, script), (5, 1, 4));
    }

    #[test]
    fn test_digest_deterministic() {
        assert_eq!(
            rubric_digest(&builtin_rubric()),
            rubric_digest(&builtin_rubric())
        );
    }

    #[test]
    fn test_digest_order_sensitive() {
        let mut reversed = builtin_rubric();
        reversed.reverse();
        assert_ne!(rubric_digest(&builtin_rubric()), rubric_digest(&reversed));
    }
}

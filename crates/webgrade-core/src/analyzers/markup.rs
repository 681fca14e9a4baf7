//! Markup structure analyzers: tag presence and attribute presence.
//!
//! Parsing is permissive (html5ever error recovery): malformed markup
//! degrades into missing tags and attributes, never an analyzer error.

use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;

use crate::domain::result::{CheckOutcome, CheckResults};

/// Report `pass` for each required tag with at least one element anywhere
/// in the document.
pub fn check_tags(markup: &str, tags: &[String]) -> CheckResults {
    let document = kuchiki::parse_html().one(markup);
    tags.iter()
        .map(|tag| {
            let found = !elements_by_tag(&document, tag).is_empty();
            (tag.clone(), CheckOutcome::from_bool(found))
        })
        .collect()
}

/// Report `pass` for each attribute carried by at least one element of the
/// given tag, regardless of value. Multiple elements of the same tag are a
/// disjunction: one match suffices.
pub fn check_attributes(markup: &str, tag: &str, attributes: &[String]) -> CheckResults {
    let document = kuchiki::parse_html().one(markup);
    let elements = elements_by_tag(&document, tag);
    attributes
        .iter()
        .map(|attribute| {
            let found = elements.iter().any(|node| has_attribute(node, attribute));
            (attribute.clone(), CheckOutcome::from_bool(found))
        })
        .collect()
}

/// All elements in the document whose local name matches `tag`.
fn elements_by_tag(document: &NodeRef, tag: &str) -> Vec<NodeRef> {
    document
        .descendants()
        .filter(|node| {
            node.as_element()
                .map_or(false, |el| el.name.local.as_ref().eq_ignore_ascii_case(tag))
        })
        .collect()
}

fn has_attribute(node: &NodeRef, attribute: &str) -> bool {
    node.as_element()
        .map_or(false, |el| el.attributes.borrow().get(attribute).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_tag_presence() {
        let markup = "<html><head><title/></head><body><div/></body></html>";
        let results = check_tags(
            markup,
            &labels(&["html", "head", "title", "body", "div", "button", "script"]),
        );

        for present in ["html", "head", "title", "body", "div"] {
            assert_eq!(results[present], CheckOutcome::Pass, "{present}");
        }
        assert_eq!(results["button"], CheckOutcome::Fail);
        assert_eq!(results["script"], CheckOutcome::Fail);
    }

    #[test]
    fn test_tag_presence_malformed_markup_degrades() {
        // Unbalanced garbage still parses; absent tags simply fail.
        let markup = "<div><<><p unclosed";
        let results = check_tags(markup, &labels(&["div", "p", "button"]));
        assert_eq!(results["div"], CheckOutcome::Pass);
        assert_eq!(results["p"], CheckOutcome::Pass);
        assert_eq!(results["button"], CheckOutcome::Fail);
    }

    #[test]
    fn test_attribute_presence() {
        let markup = r#"<input type="text" id="display"/>"#;
        let results = check_attributes(markup, "input", &labels(&["type", "id", "disabled"]));

        assert_eq!(results["type"], CheckOutcome::Pass);
        assert_eq!(results["id"], CheckOutcome::Pass);
        assert_eq!(results["disabled"], CheckOutcome::Fail);
    }

    #[test]
    fn test_attribute_presence_is_disjunctive_across_elements() {
        let markup = r#"<button class="op">+</button><button onclick="x()">=</button>"#;
        let results = check_attributes(markup, "button", &labels(&["class", "onclick"]));

        // No single button has both; one match per attribute suffices.
        assert_eq!(results["class"], CheckOutcome::Pass);
        assert_eq!(results["onclick"], CheckOutcome::Pass);
    }

    #[test]
    fn test_attribute_presence_ignores_value() {
        let markup = r#"<script src=""></script>"#;
        let results = check_attributes(markup, "script", &labels(&["src"]));
        assert_eq!(results["src"], CheckOutcome::Pass);
    }

    #[test]
    fn test_attribute_presence_no_matching_elements() {
        let results = check_attributes("<div/>", "link", &labels(&["rel", "href"]));
        assert_eq!(results["rel"], CheckOutcome::Fail);
        assert_eq!(results["href"], CheckOutcome::Fail);
    }

    #[test]
    fn test_idempotent_over_unchanged_markup() {
        let markup = "<html><body><div id='a'/></body></html>";
        let wanted = labels(&["html", "div", "span"]);
        assert_eq!(check_tags(markup, &wanted), check_tags(markup, &wanted));
    }
}

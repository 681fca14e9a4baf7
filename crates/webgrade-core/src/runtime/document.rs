//! The synthetic document a dynamic sequence executes against.

/// An element in the synthetic document.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: String,
    pub value: String,
}

/// Minimal, isolated in-memory document.
///
/// Owns the elements a sequence seeds plus a log of alerts the script
/// raises. Each sequence constructs its own instance and discards it
/// afterwards; nothing is shared between sequences. The subject script
/// runs with full access to this environment; there is no sandboxing.
#[derive(Debug, Clone, Default)]
pub struct SyntheticDocument {
    elements: Vec<Element>,
    alerts: Vec<String>,
}

impl SyntheticDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document holding one input element with the given id and value.
    pub fn with_input(id: &str, value: &str) -> Self {
        let mut document = Self::new();
        document.insert(Element {
            tag: "input".to_string(),
            id: id.to_string(),
            value: value.to_string(),
        });
        document
    }

    pub fn insert(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Handle of the element with the given id, if present.
    pub(crate) fn find(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    pub(crate) fn element(&self, handle: usize) -> &Element {
        &self.elements[handle]
    }

    pub(crate) fn set_value(&mut self, handle: usize, value: String) {
        self.elements[handle].value = value;
    }

    /// Current value of the element with the given id.
    pub fn value_of(&self, id: &str) -> Option<&str> {
        self.find(id).map(|handle| self.elements[handle].value.as_str())
    }

    pub(crate) fn push_alert(&mut self, message: String) {
        self.alerts.push(message);
    }

    /// Alerts raised by the script, in order.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_input_seeds_one_element() {
        let document = SyntheticDocument::with_input("display", "123");
        assert_eq!(document.value_of("display"), Some("123"));
        assert_eq!(document.value_of("other"), None);
        assert!(document.alerts().is_empty());
    }

    #[test]
    fn test_set_value() {
        let mut document = SyntheticDocument::with_input("display", "");
        let handle = document.find("display").expect("display exists");
        document.set_value(handle, "42".to_string());
        assert_eq!(document.value_of("display"), Some("42"));
        assert_eq!(document.element(handle).tag, "input");
    }
}

//! Request-scoped attribute snapshot.
//!
//! # Responsibilities
//! - Hold the key/value data a single request exposes to header templating
//! - Tag each value as text or opaque once, at snapshot time
//!
//! # Design Decisions
//! - The snapshot is built by the hosting dispatch layer and handed to the
//!   pipeline read-only; the pipeline never mutates it
//! - Only text values participate in placeholder resolution; opaque values
//!   are visible as "present but unusable" so resolution can warn precisely

use std::collections::HashMap;

/// A single attribute value, tagged at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Text value, usable for placeholder resolution.
    Text(String),
    /// Present but not text-typed; placeholders referencing it resolve empty.
    Opaque,
}

/// Read-only key/value snapshot for one request.
#[derive(Debug, Clone, Default)]
pub struct RequestAttributes {
    values: HashMap<String, AttributeValue>,
}

impl RequestAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a text attribute.
    pub fn set_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), AttributeValue::Text(value.into()));
    }

    /// Record an attribute that exists but carries no usable text.
    pub fn set_opaque(&mut self, name: impl Into<String>) {
        self.values.insert(name.into(), AttributeValue::Opaque);
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    /// The attribute's text, if it is text-typed.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(AttributeValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lookup_ignores_opaque_values() {
        let mut attributes = RequestAttributes::new();
        attributes.set_text("userId", "42");
        attributes.set_opaque("session");

        assert_eq!(attributes.text("userId"), Some("42"));
        assert_eq!(attributes.text("session"), None);
        assert_eq!(attributes.get("session"), Some(&AttributeValue::Opaque));
        assert_eq!(attributes.get("missing"), None);
    }
}

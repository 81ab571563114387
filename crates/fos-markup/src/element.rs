//! Markup Element
//!
//! An opening element: tag name plus ordered attributes.

use crate::attribute::{self, Attribute, AttributeReadResult};
use crate::value::Expression;

/// Element node as seen by the analysis
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name exactly as written
    pub tag: String,
    pub attributes: Vec<Attribute>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    /// Add an attribute with a value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Expression>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Add a presence-only attribute
    pub fn bare(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(Attribute::bare(name));
        self
    }

    /// Add an attribute whose value is an arbitrary expression
    pub fn expr(mut self, name: impl Into<String>, value: Expression) -> Self {
        self.attributes.push(Attribute { name: name.into(), value: Some(value) });
        self
    }

    /// Attribute by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        attribute::find(&self.attributes, name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Read an attribute by name
    pub fn read(&self, name: &str) -> AttributeReadResult {
        attribute::read_named(&self.attributes, name)
    }

    /// Lower-cased tag, the form known HTML tags are compared in
    pub fn normalized_tag(&self) -> String {
        self.tag.to_ascii_lowercase()
    }
}

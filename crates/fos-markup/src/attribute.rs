//! Element Attributes
//!
//! Attribute nodes and the static reader over their values.

use crate::value::{Expression, Literal};

/// Single attribute on an element
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    /// `None` for a bare attribute (`<div aria-hidden />`)
    pub value: Option<Expression>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<Expression>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Presence-only attribute
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Read the statically known value
    pub fn read(&self) -> AttributeReadResult {
        read(Some(self))
    }
}

/// Outcome of reading one attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeReadResult {
    Literal(Literal),
    /// Present, but the value cannot be evaluated statically
    Unknown,
    Absent,
}

impl AttributeReadResult {
    pub fn literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Literal string contents
    pub fn as_str(&self) -> Option<&str> {
        self.literal().and_then(Literal::as_str)
    }

    /// Present with anything other than literal `undefined`
    pub fn is_defined(&self) -> bool {
        match self {
            Self::Literal(Literal::Undefined) | Self::Absent => false,
            Self::Literal(_) | Self::Unknown => true,
        }
    }

    /// Literal `true`, or a string equal to "true" in any case
    pub fn is_true(&self) -> bool {
        let Self::Literal(lit) = self else {
            return false;
        };
        lit.as_bool()
            .unwrap_or_else(|| lit.as_str().is_some_and(|s| s.eq_ignore_ascii_case("true")))
    }

    /// Literal whose string form equals `expected`, ignoring case.
    /// Unknown values never match.
    pub fn equals_ignore_case(&self, expected: &str) -> bool {
        match self {
            Self::Literal(Literal::String(s)) => s.eq_ignore_ascii_case(expected),
            Self::Literal(lit) if !lit.is_nullish() => lit.to_string().eq_ignore_ascii_case(expected),
            _ => false,
        }
    }
}

/// Read an attribute that may be missing.
///
/// Bare attributes read as `true`; statically foldable expressions read as
/// their literal; anything else is `Unknown`.
pub fn read(attribute: Option<&Attribute>) -> AttributeReadResult {
    let Some(attribute) = attribute else {
        return AttributeReadResult::Absent;
    };
    match &attribute.value {
        None => AttributeReadResult::Literal(Literal::Bool(true)),
        Some(expr) => match expr.fold() {
            Some(lit) => AttributeReadResult::Literal(lit),
            None => AttributeReadResult::Unknown,
        },
    }
}

/// First attribute named `name`, ignoring case
pub fn find<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attributes.iter().find(|a| a.is_named(name))
}

/// Look up and read an attribute by name
pub fn read_named(attributes: &[Attribute], name: &str) -> AttributeReadResult {
    read(find(attributes, name))
}

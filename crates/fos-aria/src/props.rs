//! ARIA Properties
//!
//! Value types of ARIA states and properties, and the validators that check
//! a statically read attribute value against them.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use fos_markup::{AttributeReadResult, Literal};

/// Value type of an ARIA state or property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaPropertyType {
    Boolean,
    String,
    /// Boolean plus "mixed"
    Tristate,
    Integer,
    Number,
    /// Exactly one of the allowed values
    Token(&'static [&'static str]),
    /// One or more of the allowed values, whitespace separated
    TokenList(&'static [&'static str]),
}

impl AriaPropertyType {
    /// Lower-case type name used in messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Tristate => "tristate",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Token(_) => "token",
            Self::TokenList(_) => "tokenlist",
        }
    }

    /// Allowed values of token and tokenlist types
    pub fn allowed_values(&self) -> &'static [&'static str] {
        match self {
            Self::Token(values) | Self::TokenList(values) => values,
            _ => &[],
        }
    }

    /// Check a literal against this type
    pub fn accepts(&self, value: &Literal) -> bool {
        match self {
            Self::Boolean => is_boolean(value),
            Self::String => matches!(value, Literal::String(s) if !s.is_empty()),
            Self::Tristate => {
                is_boolean(value) || matches!(value, Literal::String(s) if s.eq_ignore_ascii_case("mixed"))
            }
            Self::Integer => match value {
                Literal::Number(n) => n.is_finite() && n.fract() == 0.0,
                Literal::String(s) => is_integer_numeral(s.trim()),
                _ => false,
            },
            Self::Number => match value {
                Literal::Number(n) => n.is_finite(),
                Literal::String(s) => !s.trim().is_empty() && value.to_number().is_finite(),
                _ => false,
            },
            Self::Token(_) => match value {
                Literal::String(s) => is_allowed(self.allowed_values(), s),
                _ => false,
            },
            Self::TokenList(_) => match value {
                Literal::String(s) => {
                    let mut tokens = s.split_whitespace().peekable();
                    tokens.peek().is_some() && tokens.all(|t| is_allowed(self.allowed_values(), t))
                }
                _ => false,
            },
        }
    }
}

impl fmt::Display for AriaPropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_boolean(value: &Literal) -> bool {
    value.as_bool().is_some()
        || value
            .as_str()
            .is_some_and(|s| s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false"))
}

fn is_integer_numeral(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_allowed(allowed: &[&str], token: &str) -> bool {
    allowed.iter().any(|a| a.eq_ignore_ascii_case(token))
}

const BOOLEAN: &[&str] = &[
    "aria-atomic",
    "aria-busy",
    "aria-disabled",
    "aria-expanded",
    "aria-grabbed",
    "aria-hidden",
    "aria-modal",
    "aria-multiline",
    "aria-multiselectable",
    "aria-readonly",
    "aria-required",
    "aria-selected",
];

const TRISTATE: &[&str] = &["aria-checked", "aria-pressed"];

const INTEGER: &[&str] = &[
    "aria-colcount",
    "aria-colindex",
    "aria-colspan",
    "aria-level",
    "aria-posinset",
    "aria-rowcount",
    "aria-rowindex",
    "aria-rowspan",
    "aria-setsize",
];

const NUMBER: &[&str] = &["aria-valuemax", "aria-valuemin", "aria-valuenow"];

// id and idlist references are validated as plain strings
const STRING: &[&str] = &[
    "aria-activedescendant",
    "aria-controls",
    "aria-describedby",
    "aria-details",
    "aria-errormessage",
    "aria-flowto",
    "aria-keyshortcuts",
    "aria-label",
    "aria-labelledby",
    "aria-owns",
    "aria-placeholder",
    "aria-roledescription",
    "aria-valuetext",
];

const TOKENS: &[(&str, AriaPropertyType)] = &[
    ("aria-autocomplete", AriaPropertyType::Token(&["inline", "list", "both", "none"])),
    (
        "aria-current",
        AriaPropertyType::Token(&["page", "step", "location", "date", "time", "true", "false"]),
    ),
    (
        "aria-haspopup",
        AriaPropertyType::Token(&["false", "true", "menu", "listbox", "tree", "grid", "dialog"]),
    ),
    ("aria-invalid", AriaPropertyType::Token(&["grammar", "false", "spelling", "true"])),
    ("aria-live", AriaPropertyType::Token(&["assertive", "off", "polite"])),
    ("aria-orientation", AriaPropertyType::Token(&["horizontal", "vertical"])),
    ("aria-sort", AriaPropertyType::Token(&["ascending", "descending", "none", "other"])),
    (
        "aria-dropeffect",
        AriaPropertyType::TokenList(&["copy", "move", "link", "execute", "popup", "none"]),
    ),
    ("aria-relevant", AriaPropertyType::TokenList(&["additions", "all", "removals", "text"])),
];

/// Property name → value type table
#[derive(Debug)]
pub struct AriaPropertyGrammar {
    properties: HashMap<&'static str, AriaPropertyType>,
}

static SHARED: OnceLock<AriaPropertyGrammar> = OnceLock::new();

impl AriaPropertyGrammar {
    /// Process-wide grammar
    pub fn shared() -> &'static AriaPropertyGrammar {
        SHARED.get_or_init(Self::new)
    }

    pub fn new() -> Self {
        let mut properties = HashMap::new();
        let simple = [
            (BOOLEAN, AriaPropertyType::Boolean),
            (TRISTATE, AriaPropertyType::Tristate),
            (INTEGER, AriaPropertyType::Integer),
            (NUMBER, AriaPropertyType::Number),
            (STRING, AriaPropertyType::String),
        ];
        for (names, ty) in simple {
            for &name in names {
                properties.insert(name, ty);
            }
        }
        for &(name, ty) in TOKENS {
            properties.insert(name, ty);
        }
        Self { properties }
    }

    /// Type of a property, ignoring case. Unknown names have none.
    pub fn property_type(&self, name: &str) -> Option<AriaPropertyType> {
        self.properties.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Known property names
    pub fn property_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.keys().copied()
    }

    /// Validate a read value against a property's type.
    ///
    /// Values that cannot be read statically always pass, as do properties
    /// the grammar does not know.
    pub fn validate(&self, name: &str, value: &AttributeReadResult) -> bool {
        let Some(ty) = self.property_type(name) else {
            return true;
        };
        match value {
            AttributeReadResult::Literal(lit) => ty.accepts(lit),
            AttributeReadResult::Unknown | AttributeReadResult::Absent => true,
        }
    }
}

impl Default for AriaPropertyGrammar {
    fn default() -> Self {
        Self::new()
    }
}

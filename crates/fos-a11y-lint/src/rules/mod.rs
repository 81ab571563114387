//! Lint Rules
//!
//! Every rule is a stateless predicate over one element or one attribute.
//! Options are validated against the rule's schema before a rule is built.

mod img_uses_alt;
mod no_invalid_aria;
mod no_noninteractive_element_interactions;
mod no_redundant_roles;
mod role_has_required_aria_props;
mod tabindex_no_positive;
mod valid_aria_proptypes;
mod valid_aria_role;

pub use img_uses_alt::ImgUsesAlt;
pub use no_invalid_aria::NoInvalidAria;
pub use no_noninteractive_element_interactions::NoNoninteractiveElementInteractions;
pub use no_redundant_roles::NoRedundantRoles;
pub use role_has_required_aria_props::RoleHasRequiredAriaProps;
pub use tabindex_no_positive::TabindexNoPositive;
pub use valid_aria_proptypes::ValidAriaProptypes;
pub use valid_aria_role::ValidAriaRole;

use std::fmt;

use fos_aria::{AriaPropertyGrammar, InteractivityClassifier, RoleRegistry};
use fos_markup::{Attribute, AttributeReadResult, Element};
use serde_json::Value;

use crate::config::OptionsSchema;
use crate::ConfigError;

/// Shared read-only tables a rule consults
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub registry: &'a RoleRegistry,
    pub grammar: &'a AriaPropertyGrammar,
    pub classifier: &'a InteractivityClassifier<'a>,
}

/// A lint rule. Returns the diagnostic message when the check fails.
pub trait Rule: Send + Sync + fmt::Debug {
    fn id(&self) -> &'static str;

    /// Called once per opening element
    fn check_element(&self, _ctx: &RuleContext<'_>, _element: &Element) -> Option<String> {
        None
    }

    /// Called once per attribute, after the element check
    fn check_attribute(
        &self,
        _ctx: &RuleContext<'_>,
        _element: &Element,
        _attribute: &Attribute,
    ) -> Option<String> {
        None
    }
}

/// Ids of every bundled rule
pub const RULE_IDS: &[&str] = &[
    ImgUsesAlt::ID,
    NoInvalidAria::ID,
    NoNoninteractiveElementInteractions::ID,
    NoRedundantRoles::ID,
    RoleHasRequiredAriaProps::ID,
    TabindexNoPositive::ID,
    ValidAriaProptypes::ID,
    ValidAriaRole::ID,
];

/// Options schema of a bundled rule
pub fn schema_of(id: &str) -> Option<OptionsSchema> {
    Some(match id {
        ImgUsesAlt::ID => ImgUsesAlt::SCHEMA,
        NoNoninteractiveElementInteractions::ID => NoNoninteractiveElementInteractions::SCHEMA,
        NoRedundantRoles::ID => NoRedundantRoles::SCHEMA,
        NoInvalidAria::ID
        | RoleHasRequiredAriaProps::ID
        | TabindexNoPositive::ID
        | ValidAriaProptypes::ID
        | ValidAriaRole::ID => OptionsSchema::None,
        _ => return None,
    })
}

/// Validate options and build the rule
pub fn create(id: &str, options: Option<&Value>) -> Result<Box<dyn Rule>, ConfigError> {
    let schema = schema_of(id).ok_or_else(|| ConfigError::UnknownRule(id.to_string()))?;
    schema.validate(options).map_err(|reason| ConfigError::InvalidOptions {
        rule: id.to_string(),
        reason,
    })?;

    Ok(match id {
        ImgUsesAlt::ID => Box::new(ImgUsesAlt::from_options(options)),
        NoNoninteractiveElementInteractions::ID => {
            Box::new(NoNoninteractiveElementInteractions::from_options(options))
        }
        NoRedundantRoles::ID => Box::new(NoRedundantRoles::from_options(options)),
        RoleHasRequiredAriaProps::ID => Box::new(RoleHasRequiredAriaProps),
        TabindexNoPositive::ID => Box::new(TabindexNoPositive),
        ValidAriaProptypes::ID => Box::new(ValidAriaProptypes),
        ValidAriaRole::ID => Box::new(ValidAriaRole),
        NoInvalidAria::ID => Box::new(NoInvalidAria),
        _ => return Err(ConfigError::UnknownRule(id.to_string())),
    })
}

/// Readable, non-nullish `role` value in string form
pub(crate) fn explicit_role(element: &Element) -> Option<String> {
    literal_role(element.read("role"))
}

pub(crate) fn literal_role(value: AttributeReadResult) -> Option<String> {
    match value {
        AttributeReadResult::Literal(lit) if !lit.is_nullish() => Some(lit.to_string()),
        _ => None,
    }
}

/// Strings of an already validated list option
pub(crate) fn strings(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

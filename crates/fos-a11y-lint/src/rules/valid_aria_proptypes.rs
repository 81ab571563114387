//! ARIA state and property values must match the property's type.

use fos_markup::{Attribute, Element};

use super::{Rule, RuleContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidAriaProptypes;

impl ValidAriaProptypes {
    pub const ID: &'static str = "valid-aria-proptypes";
}

impl Rule for ValidAriaProptypes {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check_attribute(&self, ctx: &RuleContext<'_>, _element: &Element, attribute: &Attribute) -> Option<String> {
        let ty = ctx.grammar.property_type(&attribute.name)?;
        if ctx.grammar.validate(&attribute.name, &attribute.read()) {
            return None;
        }
        Some(format!("{} must be of type {}.", attribute.name, ty))
    }
}

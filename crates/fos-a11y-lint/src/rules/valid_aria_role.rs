//! Every token of a `role` attribute must name a concrete ARIA role.

use fos_markup::{Attribute, Element};

use super::{literal_role, Rule, RuleContext};

const MESSAGE: &str = "Elements with ARIA roles must use a valid, non-abstract ARIA role.";

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidAriaRole;

impl ValidAriaRole {
    pub const ID: &'static str = "valid-aria-role";
}

impl Rule for ValidAriaRole {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check_attribute(&self, ctx: &RuleContext<'_>, _element: &Element, attribute: &Attribute) -> Option<String> {
        if !attribute.is_named("role") {
            return None;
        }
        let value = literal_role(attribute.read())?;
        let mut tokens = value.split_whitespace().peekable();
        // An empty role names no role at all
        let valid = tokens.peek().is_some()
            && tokens.all(|token| ctx.registry.role(token).is_some() && !ctx.registry.is_abstract_role(token));
        (!valid).then(|| MESSAGE.to_string())
    }
}

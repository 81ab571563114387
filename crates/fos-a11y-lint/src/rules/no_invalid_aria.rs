//! `aria-*` attributes must be defined ARIA states or properties.

use fos_markup::{Attribute, Element};

use super::{Rule, RuleContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoInvalidAria;

impl NoInvalidAria {
    pub const ID: &'static str = "no-invalid-aria";
}

impl Rule for NoInvalidAria {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check_attribute(&self, ctx: &RuleContext<'_>, _element: &Element, attribute: &Attribute) -> Option<String> {
        let name = &attribute.name;
        let is_aria = name.get(..5).is_some_and(|prefix| prefix.eq_ignore_ascii_case("aria-"));
        if !is_aria || ctx.grammar.property_type(name).is_some() {
            return None;
        }
        Some(format!("{}: This attribute is an invalid ARIA attribute.", name))
    }
}

//! Elements with a role must define every property that role requires.

use fos_markup::{Attribute, Element};

use super::{literal_role, Rule, RuleContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct RoleHasRequiredAriaProps;

impl RoleHasRequiredAriaProps {
    pub const ID: &'static str = "role-has-required-aria-props";
}

impl Rule for RoleHasRequiredAriaProps {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check_attribute(&self, ctx: &RuleContext<'_>, element: &Element, attribute: &Attribute) -> Option<String> {
        if !attribute.is_named("role") {
            return None;
        }
        let value = literal_role(attribute.read())?;

        // First role whose requirements are not met
        let unmet = value.split_whitespace().find_map(|token| {
            let role = ctx.registry.role(token).filter(|r| !r.is_abstract)?;
            let satisfied = role.required_props.iter().all(|prop| element.has(prop));
            (!satisfied).then_some(role)
        })?;

        Some(format!(
            "Elements with the ARIA role \"{}\" must have the following attributes defined: {}",
            unmet.name.to_ascii_lowercase(),
            unmet.required_props_display()
        ))
    }
}

//! An explicit role must not repeat the element's implicit role.

use std::collections::HashMap;

use fos_aria::is_dom_element;
use fos_markup::Element;
use serde_json::Value;

use super::{explicit_role, strings, Rule, RuleContext};
use crate::config::OptionsSchema;

#[derive(Debug, Clone, Default)]
pub struct NoRedundantRoles {
    /// Lower-cased tag → roles it may state redundantly
    exemptions: HashMap<String, Vec<String>>,
}

impl NoRedundantRoles {
    pub const ID: &'static str = "no-redundant-roles";
    pub const SCHEMA: OptionsSchema = OptionsSchema::Object {
        keys: &[],
        dom_elements: true,
    };

    pub fn from_options(options: Option<&Value>) -> Self {
        let mut exemptions = HashMap::new();
        if let Some(Value::Object(map)) = options {
            for (tag, roles) in map {
                exemptions.insert(tag.to_ascii_lowercase(), strings(roles));
            }
        }
        Self { exemptions }
    }

    fn is_exempt(&self, tag: &str, role: &str) -> bool {
        self.exemptions
            .get(&tag.to_ascii_lowercase())
            .is_some_and(|roles| roles.iter().any(|r| r.eq_ignore_ascii_case(role)))
    }
}

impl Rule for NoRedundantRoles {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check_element(&self, ctx: &RuleContext<'_>, element: &Element) -> Option<String> {
        if !is_dom_element(&element.tag) {
            return None;
        }
        let value = explicit_role(element)?;
        let explicit = value.split_whitespace().find(|token| ctx.registry.role(token).is_some())?;
        let implicit = ctx.registry.implicit_role(&element.tag, &element.attributes)?;

        if !explicit.eq_ignore_ascii_case(implicit) || self.is_exempt(&element.tag, implicit) {
            return None;
        }
        Some(format!(
            "The element {} has an implicit role of {}. Defining this explicitly is redundant and should be avoided.",
            element.tag, implicit
        ))
    }
}

//! `tabIndex` must not be a positive number.

use fos_markup::{Attribute, AttributeReadResult, Element};

use super::{Rule, RuleContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct TabindexNoPositive;

impl TabindexNoPositive {
    pub const ID: &'static str = "tabindex-no-positive";
}

impl Rule for TabindexNoPositive {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check_attribute(&self, _ctx: &RuleContext<'_>, _element: &Element, attribute: &Attribute) -> Option<String> {
        if !attribute.is_named("tabIndex") {
            return None;
        }
        // Only literals; NaN compares false
        let AttributeReadResult::Literal(lit) = attribute.read() else {
            return None;
        };
        (lit.to_number() > 0.0).then(|| "Avoid positive integer values for tabIndex.".to_string())
    }
}

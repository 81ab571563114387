//! Images and configured image components must carry an `alt` attribute.

use fos_markup::{AttributeReadResult, Element};
use serde_json::Value;

use super::{strings, Rule, RuleContext};
use crate::config::OptionsSchema;

#[derive(Debug, Clone, Default)]
pub struct ImgUsesAlt {
    /// Component names checked in addition to `img`, compared exactly
    components: Vec<String>,
}

impl ImgUsesAlt {
    pub const ID: &'static str = "img-uses-alt";
    pub const SCHEMA: OptionsSchema = OptionsSchema::StringOrList;

    pub fn from_options(options: Option<&Value>) -> Self {
        Self {
            components: options.map(strings).unwrap_or_default(),
        }
    }

    fn applies_to(&self, tag: &str) -> bool {
        tag.eq_ignore_ascii_case("img") || self.components.iter().any(|c| c == tag)
    }
}

impl Rule for ImgUsesAlt {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check_element(&self, _ctx: &RuleContext<'_>, element: &Element) -> Option<String> {
        if !self.applies_to(&element.tag) {
            return None;
        }
        let missing = match element.read("alt") {
            AttributeReadResult::Absent => true,
            AttributeReadResult::Literal(lit) => lit.is_nullish(),
            AttributeReadResult::Unknown => false,
        };
        missing.then(|| format!("{} elements must have an alt tag.", element.tag))
    }
}

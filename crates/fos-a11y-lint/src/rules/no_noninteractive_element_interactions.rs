//! Non-interactive elements must not carry interaction-only event handlers.

use std::collections::HashMap;

use fos_aria::{category_of, interaction_handlers, is_dom_element, Interactivity};
use fos_markup::{AttributeReadResult, Element};
use serde_json::Value;

use super::{strings, Rule, RuleContext};
use crate::config::OptionsSchema;

const MESSAGE: &str = "Non-interactive elements should not be assigned mouse or keyboard event listeners.";

#[derive(Debug, Clone)]
pub struct NoNoninteractiveElementInteractions {
    handlers: Vec<String>,
    /// Lower-cased tag → handlers allowed on it
    exemptions: HashMap<String, Vec<String>>,
}

impl NoNoninteractiveElementInteractions {
    pub const ID: &'static str = "no-noninteractive-element-interactions";
    pub const SCHEMA: OptionsSchema = OptionsSchema::Object {
        keys: &["handlers"],
        dom_elements: true,
    };

    pub fn from_options(options: Option<&Value>) -> Self {
        let mut handlers = None;
        let mut exemptions = HashMap::new();
        if let Some(Value::Object(map)) = options {
            for (key, value) in map {
                if key == "handlers" {
                    handlers = Some(strings(value));
                } else {
                    exemptions.insert(key.to_ascii_lowercase(), strings(value));
                }
            }
        }
        Self {
            handlers: handlers
                .unwrap_or_else(|| interaction_handlers().into_iter().map(str::to_string).collect()),
            exemptions,
        }
    }

    /// First configured handler bound to something other than null/undefined
    fn interaction_handler(&self, element: &Element) -> Option<&str> {
        let exempt = self.exemptions.get(&element.normalized_tag());
        self.handlers
            .iter()
            .filter(|h| !exempt.is_some_and(|e| e.iter().any(|x| x.eq_ignore_ascii_case(h))))
            .find(|h| match element.read(h) {
                AttributeReadResult::Literal(lit) => !lit.is_nullish(),
                AttributeReadResult::Unknown => true,
                AttributeReadResult::Absent => false,
            })
            .map(String::as_str)
    }
}

impl Default for NoNoninteractiveElementInteractions {
    fn default() -> Self {
        Self::from_options(None)
    }
}

impl Rule for NoNoninteractiveElementInteractions {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check_element(&self, ctx: &RuleContext<'_>, element: &Element) -> Option<String> {
        let (tag, attributes) = (&element.tag, &element.attributes);
        if !is_dom_element(tag) {
            return None;
        }
        let handler = self.interaction_handler(element)?;
        let classifier = ctx.classifier;
        if classifier.is_hidden_from_assistive_tech(tag, attributes) || classifier.is_presentation(attributes) {
            return None;
        }
        if classifier.classify(tag, attributes) != Interactivity::NonInteractive {
            return None;
        }

        tracing::trace!(category = ?category_of(handler), "{} on non-interactive <{}>", handler, tag);
        Some(MESSAGE.to_string())
    }
}

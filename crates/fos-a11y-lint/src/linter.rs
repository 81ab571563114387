//! Linter
//!
//! Runs the enabled rules over a markup tree in one pre-order pass.

use fos_aria::{AriaPropertyGrammar, InteractivityClassifier};
use fos_markup::{Element, MarkupTree, NodeId};

use crate::config::{LintConfig, Profile};
use crate::rules::{self, Rule, RuleContext};
use crate::{ConfigError, Diagnostic, DiagnosticTarget, Severity};

#[derive(Debug)]
struct ActiveRule {
    rule: Box<dyn Rule>,
    severity: Severity,
}

/// Configured rule set, reusable across trees
#[derive(Debug)]
pub struct Linter {
    rules: Vec<ActiveRule>,
    classifier: InteractivityClassifier<'static>,
}

impl Linter {
    /// Build from a configuration. Every listed rule's options are checked,
    /// including rules that are switched off.
    pub fn new(config: &LintConfig) -> Result<Self, ConfigError> {
        let mut rules = Vec::new();
        for (id, setting) in &config.rules {
            let rule = rules::create(id, setting.options())?;
            if let Some(severity) = setting.level().severity() {
                rules.push(ActiveRule { rule, severity });
            }
        }

        tracing::debug!(
            "Linter enabled {} of {} configured rules: {:?}",
            rules.len(),
            config.rules.len(),
            rules.iter().map(|r| r.rule.id()).collect::<Vec<_>>()
        );

        Ok(Self {
            rules,
            classifier: InteractivityClassifier::shared(),
        })
    }

    pub fn from_profile(profile: Profile) -> Result<Self, ConfigError> {
        tracing::debug!("Using {} profile", profile.name());
        Self::new(&profile.config())
    }

    /// Enabled rule ids and their severities
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&'static str, Severity)> + '_ {
        self.rules.iter().map(|r| (r.rule.id(), r.severity))
    }

    /// Lint every element of a tree in document order
    pub fn lint(&self, tree: &MarkupTree) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut visited = 0usize;
        for (node, element) in tree.elements() {
            self.check(node, element, &mut diagnostics);
            visited += 1;
        }
        tracing::debug!("Linted {} elements, {} diagnostics", visited, diagnostics.len());
        diagnostics
    }

    /// Lint a single element
    pub fn lint_element(&self, node: NodeId, element: &Element) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        self.check(node, element, &mut diagnostics);
        diagnostics
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext {
            registry: self.classifier.registry(),
            grammar: AriaPropertyGrammar::shared(),
            classifier: &self.classifier,
        }
    }

    fn check(&self, node: NodeId, element: &Element, out: &mut Vec<Diagnostic>) {
        let ctx = self.context();

        for active in &self.rules {
            if let Some(message) = active.rule.check_element(&ctx, element) {
                out.push(self.report(active, message, node, DiagnosticTarget::OpeningElement));
            }
        }

        for (index, attribute) in element.attributes.iter().enumerate() {
            for active in &self.rules {
                if let Some(message) = active.rule.check_attribute(&ctx, element, attribute) {
                    out.push(self.report(active, message, node, DiagnosticTarget::Attribute(index)));
                }
            }
        }
    }

    fn report(&self, active: &ActiveRule, message: String, node: NodeId, target: DiagnosticTarget) -> Diagnostic {
        let diagnostic = Diagnostic {
            rule: active.rule.id(),
            message,
            severity: active.severity,
            node,
            target,
        };
        tracing::trace!("{}", diagnostic);
        diagnostic
    }
}

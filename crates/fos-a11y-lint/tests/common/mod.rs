//! Shared helpers for lint integration tests

#![allow(dead_code)]

use std::sync::Once;

use fos_a11y_lint::{Diagnostic, LintConfig, Linter, Profile, RuleLevel, RuleSetting};
use fos_markup::{Element, MarkupTree};
use serde_json::Value;

static INIT: Once = Once::new();

/// Install a test-writer subscriber once; `RUST_LOG` controls verbosity
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Linter running a single rule at error level
pub fn single_rule(id: &str, options: Option<Value>) -> Linter {
    init_tracing();
    let setting = match options {
        Some(options) => RuleSetting::WithOptions(RuleLevel::Error, options),
        None => RuleSetting::Level(RuleLevel::Error),
    };
    Linter::new(&LintConfig::new().with_rule(id, setting)).unwrap()
}

/// Linter for a bundled profile, restricted to one rule's diagnostics by the caller
pub fn profile(profile: Profile) -> Linter {
    init_tracing();
    Linter::from_profile(profile).unwrap()
}

pub fn lint(linter: &Linter, element: Element) -> Vec<Diagnostic> {
    linter.lint(&MarkupTree::from_element(element))
}

/// Messages of diagnostics produced by `rule`
pub fn messages(linter: &Linter, rule: &str, element: Element) -> Vec<String> {
    lint(linter, element)
        .into_iter()
        .filter(|d| d.rule == rule)
        .map(|d| d.message)
        .collect()
}

//! fOS Accessibility Lint
//!
//! Accessibility checks over markup element trees.
//!
//! Features:
//! - Rules over roles, ARIA names and values, handlers, alt text and tab order
//! - ESLint-shaped JSON configuration with per-rule option schemas
//! - Recommended and strict profiles
//! - Single pre-order pass per tree

pub mod config;
pub mod linter;
pub mod rules;

pub use config::{LintConfig, OptionsSchema, Profile, RuleLevel, RuleSetting};
pub use linter::Linter;
pub use rules::{Rule, RuleContext};

use std::fmt;

use fos_markup::NodeId;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// Part of the element a diagnostic points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticTarget {
    OpeningElement,
    /// Index into the element's attribute list
    Attribute(usize),
}

/// One rule violation
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub rule: &'static str,
    pub message: String,
    pub severity: Severity,
    pub node: NodeId,
    pub target: DiagnosticTarget,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {} [{}]", self.node, self.severity, self.message, self.rule)
    }
}

/// Configuration rejected before linting starts
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    #[error("Invalid options for {rule}: {reason}")]
    InvalidOptions { rule: String, reason: String },

    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

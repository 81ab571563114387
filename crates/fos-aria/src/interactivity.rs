//! Interactivity
//!
//! Decides whether an element is meant to be interacted with, from its
//! explicit role when it has a readable one, otherwise from a per-tag
//! decision table backed by the implicit-role mapping.

use std::collections::HashMap;

use fos_markup::{read_named, Attribute, AttributeReadResult, Element};

use crate::roles::RoleRegistry;

/// Interactive status of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactivity {
    Interactive,
    NonInteractive,
    /// No inherent valence (generic containers, unknown tags)
    Indeterminate,
}

/// How an attribute is tested by a conditional tag rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeTest {
    /// Present with a value other than literal `undefined`
    Defined,
    /// Literal equal to the string, ignoring case
    Equals(&'static str),
}

/// Test passes if any of the attributes passes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributePredicate {
    pub attributes: &'static [&'static str],
    pub test: AttributeTest,
    pub then: Interactivity,
    pub otherwise: Interactivity,
}

impl AttributePredicate {
    pub fn evaluate(&self, attributes: &[Attribute]) -> Interactivity {
        let hit = self.attributes.iter().any(|name| {
            let value = read_named(attributes, name);
            match self.test {
                AttributeTest::Defined => value.is_defined(),
                AttributeTest::Equals(expected) => value.equals_ignore_case(expected),
            }
        });
        if hit { self.then } else { self.otherwise }
    }
}

/// Per-tag decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    AlwaysInteractive,
    AlwaysNonInteractive,
    ConditionalOnAttribute(AttributePredicate),
    /// Classify by the implicit role of the matching mapping entry
    DelegateToRole,
    /// Mapped, but carries no interactive valence either way
    NoValence,
}

const LINK_LIKE: TagRule = TagRule::ConditionalOnAttribute(AttributePredicate {
    attributes: &["href", "tabIndex"],
    test: AttributeTest::Defined,
    then: Interactivity::Interactive,
    otherwise: Interactivity::Indeterminate,
});

/// Explicit tag rules. Tags not listed delegate to their implicit role, if any.
pub static TAG_RULES: &[(&str, TagRule)] = &[
    ("a", LINK_LIKE),
    ("area", LINK_LIKE),
    (
        "input",
        TagRule::ConditionalOnAttribute(AttributePredicate {
            attributes: &["type"],
            test: AttributeTest::Equals("hidden"),
            then: Interactivity::NonInteractive,
            otherwise: Interactivity::Interactive,
        }),
    ),
    (
        "td",
        TagRule::ConditionalOnAttribute(AttributePredicate {
            attributes: &["role"],
            test: AttributeTest::Equals("gridcell"),
            then: Interactivity::Interactive,
            otherwise: Interactivity::NonInteractive,
        }),
    ),
    // HTML link elements are never interactive, despite the link role
    ("link", TagRule::AlwaysNonInteractive),
    // implicit document role, but handlers on it are not flagged
    ("body", TagRule::NoValence),
    ("audio", TagRule::AlwaysInteractive),
    ("button", TagRule::AlwaysInteractive),
    ("canvas", TagRule::AlwaysInteractive),
    ("embed", TagRule::AlwaysInteractive),
    ("menuitem", TagRule::AlwaysInteractive),
    ("option", TagRule::AlwaysInteractive),
    ("select", TagRule::AlwaysInteractive),
    ("textarea", TagRule::AlwaysInteractive),
    ("th", TagRule::AlwaysInteractive),
    ("tr", TagRule::AlwaysInteractive),
    ("video", TagRule::AlwaysInteractive),
    ("abbr", TagRule::AlwaysNonInteractive),
    ("article", TagRule::AlwaysNonInteractive),
    ("blockquote", TagRule::AlwaysNonInteractive),
    ("br", TagRule::AlwaysNonInteractive),
    ("caption", TagRule::AlwaysNonInteractive),
    ("dd", TagRule::AlwaysNonInteractive),
    ("details", TagRule::AlwaysNonInteractive),
    ("dfn", TagRule::AlwaysNonInteractive),
    ("dialog", TagRule::AlwaysNonInteractive),
    ("dir", TagRule::AlwaysNonInteractive),
    ("dl", TagRule::AlwaysNonInteractive),
    ("dt", TagRule::AlwaysNonInteractive),
    ("fieldset", TagRule::AlwaysNonInteractive),
    ("figcaption", TagRule::AlwaysNonInteractive),
    ("figure", TagRule::AlwaysNonInteractive),
    ("footer", TagRule::AlwaysNonInteractive),
    ("form", TagRule::AlwaysNonInteractive),
    ("frame", TagRule::AlwaysNonInteractive),
    ("h1", TagRule::AlwaysNonInteractive),
    ("h2", TagRule::AlwaysNonInteractive),
    ("h3", TagRule::AlwaysNonInteractive),
    ("h4", TagRule::AlwaysNonInteractive),
    ("h5", TagRule::AlwaysNonInteractive),
    ("h6", TagRule::AlwaysNonInteractive),
    ("hr", TagRule::AlwaysNonInteractive),
    ("iframe", TagRule::AlwaysNonInteractive),
    ("img", TagRule::AlwaysNonInteractive),
    ("legend", TagRule::AlwaysNonInteractive),
    ("li", TagRule::AlwaysNonInteractive),
    ("main", TagRule::AlwaysNonInteractive),
    ("mark", TagRule::AlwaysNonInteractive),
    ("marquee", TagRule::AlwaysNonInteractive),
    ("menu", TagRule::AlwaysNonInteractive),
    ("meter", TagRule::AlwaysNonInteractive),
    ("nav", TagRule::AlwaysNonInteractive),
    ("ol", TagRule::AlwaysNonInteractive),
    ("p", TagRule::AlwaysNonInteractive),
    ("pre", TagRule::AlwaysNonInteractive),
    ("progress", TagRule::AlwaysNonInteractive),
    ("ruby", TagRule::AlwaysNonInteractive),
    ("section", TagRule::AlwaysNonInteractive),
    ("table", TagRule::AlwaysNonInteractive),
    ("tbody", TagRule::AlwaysNonInteractive),
    ("tfoot", TagRule::AlwaysNonInteractive),
    ("thead", TagRule::AlwaysNonInteractive),
    ("time", TagRule::AlwaysNonInteractive),
    ("ul", TagRule::AlwaysNonInteractive),
];

const PRESENTATIONAL: [&str; 2] = ["presentation", "none"];

/// Interactivity decisions over a role registry
#[derive(Debug)]
pub struct InteractivityClassifier<'r> {
    registry: &'r RoleRegistry,
    table: HashMap<&'static str, TagRule>,
}

impl InteractivityClassifier<'static> {
    /// Classifier over the process-wide registry
    pub fn shared() -> Self {
        Self::new(RoleRegistry::shared())
    }
}

impl<'r> InteractivityClassifier<'r> {
    pub fn new(registry: &'r RoleRegistry) -> Self {
        let mut table: HashMap<&'static str, TagRule> = TAG_RULES.iter().copied().collect();
        for tag in registry.mapped_tags() {
            table.entry(tag).or_insert(TagRule::DelegateToRole);
        }
        Self { registry, table }
    }

    pub fn registry(&self) -> &'r RoleRegistry {
        self.registry
    }

    /// Decision table entry for a tag, ignoring case
    pub fn tag_rule(&self, tag: &str) -> Option<TagRule> {
        self.table.get(tag.to_ascii_lowercase().as_str()).copied()
    }

    /// Hidden inputs and anything with a true `aria-hidden`
    pub fn is_hidden_from_assistive_tech(&self, tag: &str, attributes: &[Attribute]) -> bool {
        if tag.eq_ignore_ascii_case("input") && read_named(attributes, "type").equals_ignore_case("hidden") {
            return true;
        }
        read_named(attributes, "aria-hidden").is_true()
    }

    /// Explicit role lists a known presentational role
    pub fn is_presentation(&self, attributes: &[Attribute]) -> bool {
        explicit_role(attributes).is_some_and(|role| {
            role.split_whitespace()
                .any(|token| PRESENTATIONAL.iter().any(|p| p.eq_ignore_ascii_case(token)))
        })
    }

    /// Classify an element by tag and attributes
    pub fn classify(&self, tag: &str, attributes: &[Attribute]) -> Interactivity {
        if let Some(role) = explicit_role(attributes) {
            return self.classify_roles(role.split_whitespace());
        }

        match self.tag_rule(tag) {
            Some(TagRule::AlwaysInteractive) => Interactivity::Interactive,
            Some(TagRule::AlwaysNonInteractive) => Interactivity::NonInteractive,
            Some(TagRule::ConditionalOnAttribute(predicate)) => predicate.evaluate(attributes),
            Some(TagRule::DelegateToRole) => match self.registry.implicit_roles(tag, attributes) {
                Some(roles) => self.classify_roles(roles.iter().copied()),
                None => Interactivity::Indeterminate,
            },
            Some(TagRule::NoValence) | None => Interactivity::Indeterminate,
        }
    }

    pub fn classify_element(&self, element: &Element) -> Interactivity {
        self.classify(&element.tag, &element.attributes)
    }

    /// Classify by role tokens. Unknown and abstract tokens are ignored.
    fn classify_roles<'a>(&self, tokens: impl Iterator<Item = &'a str>) -> Interactivity {
        let mut resolved = false;
        let mut interactive = false;
        for token in tokens {
            let Some(role) = self.registry.role(token) else {
                continue;
            };
            if role.is_abstract {
                continue;
            }
            if PRESENTATIONAL.iter().any(|p| p.eq_ignore_ascii_case(token)) {
                return Interactivity::NonInteractive;
            }
            resolved = true;
            interactive |= role.interactive;
        }
        match (resolved, interactive) {
            (_, true) => Interactivity::Interactive,
            (true, false) => Interactivity::NonInteractive,
            (false, false) => Interactivity::Indeterminate,
        }
    }
}

/// Readable, non-nullish explicit role in its string form
fn explicit_role(attributes: &[Attribute]) -> Option<String> {
    match read_named(attributes, "role") {
        AttributeReadResult::Literal(lit) if !lit.is_nullish() => Some(lit.to_string()),
        _ => None,
    }
}

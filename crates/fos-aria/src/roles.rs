//! ARIA Roles
//!
//! The WAI-ARIA role taxonomy and the registry built from it.
//!
//! The taxonomy is declared with direct superclasses only. At load time the
//! registry flattens every role's superclass chain into an ancestor set, so
//! "descends from widget" is a set lookup rather than a walk.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::OnceLock;

use fos_markup::Attribute;

use crate::elements::{ElementRoleEntry, ELEMENT_ROLES};
use crate::props::AriaPropertyGrammar;
use crate::RegistryError;

/// Role declaration in the static taxonomy
#[derive(Debug, Clone, Copy)]
pub struct RoleSpec {
    pub name: &'static str,
    pub is_abstract: bool,
    pub superclasses: &'static [&'static str],
    pub required_props: &'static [&'static str],
}

const fn abstract_role(name: &'static str, superclasses: &'static [&'static str]) -> RoleSpec {
    RoleSpec { name, is_abstract: true, superclasses, required_props: &[] }
}

const fn role(name: &'static str, superclasses: &'static [&'static str]) -> RoleSpec {
    RoleSpec { name, is_abstract: false, superclasses, required_props: &[] }
}

const fn role_requiring(
    name: &'static str,
    superclasses: &'static [&'static str],
    required_props: &'static [&'static str],
) -> RoleSpec {
    RoleSpec { name, is_abstract: false, superclasses, required_props }
}

const CHECKED: &[&str] = &["aria-checked"];
const RANGE_VALUES: &[&str] = &["aria-valuemax", "aria-valuemin", "aria-valuenow"];

/// WAI-ARIA 1.1 role taxonomy
pub static ROLE_TAXONOMY: &[RoleSpec] = &[
    // Abstract roles
    abstract_role("roletype", &[]),
    abstract_role("structure", &["roletype"]),
    abstract_role("widget", &["roletype"]),
    abstract_role("window", &["roletype"]),
    abstract_role("command", &["widget"]),
    abstract_role("composite", &["widget"]),
    abstract_role("input", &["widget"]),
    abstract_role("section", &["structure"]),
    abstract_role("sectionhead", &["structure"]),
    abstract_role("range", &["structure"]),
    abstract_role("landmark", &["section"]),
    abstract_role("select", &["composite", "group"]),
    // Widget roles
    role("button", &["command"]),
    role_requiring("checkbox", &["input"], CHECKED),
    role_requiring("combobox", &["select"], &["aria-expanded"]),
    role("grid", &["composite", "table"]),
    role("gridcell", &["cell", "widget"]),
    role("link", &["command"]),
    role("listbox", &["select"]),
    role("menu", &["select"]),
    role("menubar", &["menu"]),
    role("menuitem", &["command"]),
    role_requiring("menuitemcheckbox", &["menuitem"], CHECKED),
    role_requiring("menuitemradio", &["menuitemcheckbox", "radio"], CHECKED),
    role_requiring("option", &["input"], &["aria-selected"]),
    role("progressbar", &["range", "widget"]),
    role_requiring("radio", &["input"], CHECKED),
    role("radiogroup", &["select"]),
    role("row", &["group", "widget"]),
    role_requiring(
        "scrollbar",
        &["range"],
        &["aria-controls", "aria-orientation", "aria-valuemax", "aria-valuemin", "aria-valuenow"],
    ),
    role("searchbox", &["textbox"]),
    role_requiring("slider", &["input", "range"], RANGE_VALUES),
    role_requiring("spinbutton", &["composite", "input", "range"], RANGE_VALUES),
    role_requiring("switch", &["checkbox"], CHECKED),
    role("tab", &["sectionhead", "widget"]),
    role("tablist", &["composite"]),
    role("textbox", &["input"]),
    role("tree", &["select"]),
    role("treegrid", &["grid", "tree"]),
    role("treeitem", &["listitem", "option"]),
    // Cells and headers
    role("cell", &["section"]),
    role("columnheader", &["cell", "gridcell", "sectionhead"]),
    role("rowheader", &["cell", "gridcell", "sectionhead"]),
    // Document structure
    role("application", &["structure"]),
    role("article", &["document"]),
    role("definition", &["section"]),
    role("directory", &["list"]),
    role("document", &["structure"]),
    role("feed", &["list"]),
    role("figure", &["section"]),
    role("group", &["section"]),
    role("heading", &["sectionhead"]),
    role("img", &["section"]),
    role("list", &["section"]),
    role("listitem", &["section"]),
    role("math", &["section"]),
    role("none", &["structure"]),
    role("note", &["section"]),
    role("presentation", &["structure"]),
    role("rowgroup", &["structure"]),
    role("separator", &["structure"]),
    role("table", &["section"]),
    role("term", &["section"]),
    role("toolbar", &["group"]),
    role("tooltip", &["section"]),
    // Landmarks
    role("banner", &["landmark"]),
    role("complementary", &["landmark"]),
    role("contentinfo", &["landmark"]),
    role("form", &["landmark"]),
    role("main", &["landmark"]),
    role("navigation", &["landmark"]),
    role("region", &["landmark"]),
    role("search", &["landmark"]),
    // Live regions
    role("alert", &["section"]),
    role("log", &["section"]),
    role("marquee", &["section"]),
    role("status", &["section"]),
    role("timer", &["status"]),
    // Windows
    role("alertdialog", &["alert", "dialog"]),
    role("dialog", &["window"]),
    role("tabpanel", &["section"]),
];

/// Resolved role metadata. Names are canonical upper-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDefinition {
    pub name: String,
    pub is_abstract: bool,
    /// Transitive superclass set
    pub ancestors: BTreeSet<String>,
    pub required_props: BTreeSet<String>,
    /// Descends from widget (toolbar is treated as one too)
    pub interactive: bool,
}

impl RoleDefinition {
    /// True if `role` is this role or one of its ancestors
    pub fn descends_from(&self, role: &str) -> bool {
        self.name.eq_ignore_ascii_case(role) || self.ancestors.contains(&role.to_ascii_uppercase())
    }

    /// Required properties as written in markup: lower-case, sorted, space-joined
    pub fn required_props_display(&self) -> String {
        self.required_props
            .iter()
            .map(|p| p.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Immutable role and implicit-role tables
#[derive(Debug)]
pub struct RoleRegistry {
    roles: HashMap<String, RoleDefinition>,
    element_roles: HashMap<&'static str, Vec<&'static ElementRoleEntry>>,
}

static SHARED: OnceLock<RoleRegistry> = OnceLock::new();

impl RoleRegistry {
    /// Process-wide registry built from the embedded tables.
    ///
    /// A malformed table is a packaging defect; it aborts on first use.
    pub fn shared() -> &'static RoleRegistry {
        SHARED.get_or_init(|| match Self::build() {
            Ok(registry) => registry,
            Err(e) => panic!("embedded ARIA tables are malformed: {}", e),
        })
    }

    /// Build from the embedded taxonomy and element mapping
    pub fn build() -> Result<Self, RegistryError> {
        Self::from_tables(ROLE_TAXONOMY, ELEMENT_ROLES)
    }

    /// Build from arbitrary tables, validating their cross references
    pub fn from_tables(
        taxonomy: &'static [RoleSpec],
        mappings: &'static [ElementRoleEntry],
    ) -> Result<Self, RegistryError> {
        let specs: HashMap<&str, &RoleSpec> = taxonomy.iter().map(|s| (s.name, s)).collect();
        let grammar = AriaPropertyGrammar::shared();

        let mut closure: HashMap<&'static str, BTreeSet<String>> = HashMap::new();
        let mut roles = HashMap::with_capacity(taxonomy.len());

        for spec in taxonomy {
            let ancestors = ancestors_of(spec.name, &specs, &mut closure, &mut HashSet::new())?;

            let mut required_props = BTreeSet::new();
            for prop in spec.required_props {
                if grammar.property_type(prop).is_none() {
                    return Err(RegistryError::UnknownProperty {
                        role: spec.name.to_string(),
                        property: prop.to_string(),
                    });
                }
                required_props.insert(prop.to_ascii_uppercase());
            }

            let mut role = RoleDefinition {
                name: spec.name.to_ascii_uppercase(),
                is_abstract: spec.is_abstract,
                ancestors,
                required_props,
                interactive: false,
            };
            role.interactive = role.descends_from("widget") || role.name == "TOOLBAR";
            roles.insert(role.name.clone(), role);
        }

        let mut element_roles: HashMap<&'static str, Vec<&'static ElementRoleEntry>> = HashMap::new();
        for entry in mappings {
            for role in entry.roles {
                if !roles.contains_key(&role.to_ascii_uppercase()) {
                    return Err(RegistryError::UnknownMappedRole {
                        tag: entry.tag.to_string(),
                        role: role.to_string(),
                    });
                }
            }
            element_roles.entry(entry.tag).or_default().push(entry);
        }

        tracing::debug!(
            "Built role registry: {} roles, {} tags with implicit roles",
            roles.len(),
            element_roles.len()
        );

        Ok(Self { roles, element_roles })
    }

    /// Role metadata, case-insensitive. Unknown names have no semantics.
    pub fn role(&self, name: &str) -> Option<&RoleDefinition> {
        self.roles.get(&name.to_ascii_uppercase())
    }

    /// Known, concrete and descending from widget
    pub fn is_interactive_role(&self, name: &str) -> bool {
        self.role(name).is_some_and(|r| !r.is_abstract && r.interactive)
    }

    /// Known, concrete and not interactive
    pub fn is_non_interactive_role(&self, name: &str) -> bool {
        self.role(name).is_some_and(|r| !r.is_abstract && !r.interactive)
    }

    pub fn is_abstract_role(&self, name: &str) -> bool {
        self.role(name).is_some_and(|r| r.is_abstract)
    }

    /// All role definitions, in no particular order
    pub fn roles(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.values()
    }

    /// Tags that have at least one implicit-role entry
    pub fn mapped_tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.element_roles.keys().copied()
    }

    /// Role set of the most specific mapping entry matching the element.
    ///
    /// Constrained entries win over the unconstrained one; tags without an
    /// entry (custom components included) have no implicit role.
    pub fn implicit_roles(&self, tag: &str, attributes: &[Attribute]) -> Option<&'static [&'static str]> {
        let entries = self.element_roles.get(tag.to_ascii_lowercase().as_str())?;
        let mut best: Option<&ElementRoleEntry> = None;
        for &entry in entries {
            if !entry.matches(attributes) {
                continue;
            }
            if best.is_none_or(|b| entry.constraints.len() > b.constraints.len()) {
                best = Some(entry);
            }
        }
        best.map(|e| e.roles)
    }

    /// First role of the most specific matching entry
    pub fn implicit_role(&self, tag: &str, attributes: &[Attribute]) -> Option<&'static str> {
        self.implicit_roles(tag, attributes).and_then(|roles| roles.first().copied())
    }
}

fn ancestors_of(
    name: &'static str,
    specs: &HashMap<&str, &'static RoleSpec>,
    closure: &mut HashMap<&'static str, BTreeSet<String>>,
    visiting: &mut HashSet<&'static str>,
) -> Result<BTreeSet<String>, RegistryError> {
    if let Some(done) = closure.get(name) {
        return Ok(done.clone());
    }
    if !visiting.insert(name) {
        return Err(RegistryError::Cycle(name.to_string()));
    }

    let spec = specs
        .get(name)
        .ok_or_else(|| RegistryError::UnknownRole(name.to_string()))?;

    let mut ancestors = BTreeSet::new();
    for &parent in spec.superclasses {
        if !specs.contains_key(parent) {
            return Err(RegistryError::UnknownSuperclass {
                role: name.to_string(),
                superclass: parent.to_string(),
            });
        }
        ancestors.insert(parent.to_ascii_uppercase());
        ancestors.extend(ancestors_of(parent, specs, closure, visiting)?);
    }

    visiting.remove(name);
    closure.insert(name, ancestors.clone());
    Ok(ancestors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{AttributeConstraint, ConstraintValue};

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = RoleRegistry::shared();
        assert_eq!(registry.role("Button").map(|r| r.name.as_str()), Some("BUTTON"));
        assert!(registry.role("BUTTON").is_some());
        assert!(registry.role("fakerole").is_none());
    }

    #[test]
    fn test_ancestors_are_flattened() {
        let registry = RoleRegistry::shared();
        let checkbox = registry.role("checkbox").unwrap();
        for ancestor in ["INPUT", "WIDGET", "ROLETYPE"] {
            assert!(checkbox.ancestors.contains(ancestor), "missing {}", ancestor);
        }
        assert!(registry.role("treegrid").unwrap().descends_from("select"));
    }

    #[test]
    fn test_interactive_roles() {
        let registry = RoleRegistry::shared();
        for role in ["button", "gridcell", "row", "progressbar", "tablist", "toolbar", "treeitem"] {
            assert!(registry.is_interactive_role(role), "{} should be interactive", role);
        }
        for role in ["article", "scrollbar", "dialog", "application", "separator"] {
            assert!(registry.is_non_interactive_role(role), "{} should be non-interactive", role);
        }
        // Abstract roles satisfy neither
        for role in ["widget", "command", "input", "range", "roletype"] {
            assert!(registry.is_abstract_role(role));
            assert!(!registry.is_interactive_role(role));
            assert!(!registry.is_non_interactive_role(role));
        }
    }

    #[test]
    fn test_required_props() {
        let registry = RoleRegistry::shared();
        let slider = registry.role("slider").unwrap();
        assert_eq!(slider.required_props_display(), "aria-valuemax aria-valuemin aria-valuenow");
        assert!(registry.role("row").unwrap().required_props.is_empty());
    }

    #[test]
    fn test_implicit_roles() {
        let registry = RoleRegistry::shared();
        let checkbox = [Attribute::new("type", "Checkbox")];
        assert_eq!(registry.implicit_role("input", &checkbox), Some("checkbox"));
        assert_eq!(registry.implicit_role("input", &[]), Some("textbox"));
        assert_eq!(registry.implicit_role("BODY", &[]), Some("document"));
        assert_eq!(registry.implicit_role("a", &[]), None);
        assert_eq!(registry.implicit_role("a", &[Attribute::new("href", "#")]), Some("link"));
        assert_eq!(registry.implicit_roles("select", &[]), Some(&["combobox", "listbox"][..]));
        assert_eq!(registry.implicit_role("MyComponent", &[]), None);
    }

    #[test]
    fn test_unknown_constraint_value_never_matches() {
        let registry = RoleRegistry::shared();
        let dynamic = [Attribute::new("type", fos_markup::Expression::identifier("kind"))];
        assert_eq!(registry.implicit_role("input", &dynamic), Some("textbox"));
    }

    static BROKEN_TAXONOMY: &[RoleSpec] = &[role("button", &["command"])];
    static CYCLIC_TAXONOMY: &[RoleSpec] = &[role("a", &["b"]), role("b", &["a"])];
    static BAD_PROPS: &[RoleSpec] = &[role_requiring("thing", &[], &["aria-nonsense"])];
    static BAD_MAPPING: &[ElementRoleEntry] = &[ElementRoleEntry {
        tag: "blink",
        constraints: &[AttributeConstraint { name: "type", value: ConstraintValue::Present }],
        roles: &["marquee"],
    }];

    #[test]
    fn test_malformed_tables_are_rejected() {
        assert!(matches!(
            RoleRegistry::from_tables(BROKEN_TAXONOMY, &[]),
            Err(RegistryError::UnknownSuperclass { .. })
        ));
        assert!(matches!(RoleRegistry::from_tables(CYCLIC_TAXONOMY, &[]), Err(RegistryError::Cycle(_))));
        assert!(matches!(
            RoleRegistry::from_tables(BAD_PROPS, &[]),
            Err(RegistryError::UnknownProperty { .. })
        ));
        assert!(matches!(
            RoleRegistry::from_tables(&[], BAD_MAPPING),
            Err(RegistryError::UnknownMappedRole { .. })
        ));
    }
}

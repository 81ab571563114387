//! fOS ARIA
//!
//! Semantic resolution for accessibility analysis of markup.
//!
//! Features:
//! - WAI-ARIA role taxonomy with flattened ancestry
//! - Implicit roles of HTML elements
//! - Typed grammar for ARIA state and property values
//! - Interactive / non-interactive classification
//! - Event-handler catalogue

pub mod elements;
pub mod handlers;
pub mod interactivity;
pub mod props;
pub mod roles;

pub use elements::{is_dom_element, AttributeConstraint, ConstraintValue, ElementRoleEntry};
pub use handlers::{category_of, interaction_handlers, HandlerCategory};
pub use interactivity::{Interactivity, InteractivityClassifier, TagRule};
pub use props::{AriaPropertyGrammar, AriaPropertyType};
pub use roles::{RoleDefinition, RoleRegistry, RoleSpec};

/// Malformed embedded table
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Role {role} names unknown superclass {superclass}")]
    UnknownSuperclass { role: String, superclass: String },

    #[error("Role {0} is its own ancestor")]
    Cycle(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Role {role} requires unknown property {property}")]
    UnknownProperty { role: String, property: String },

    #[error("Element {tag} maps to unknown role {role}")]
    UnknownMappedRole { tag: String, role: String },
}

//! Role resolution and interactivity classification
//!
//! Exercises the registry and classifier together, the way the lint rules
//! consume them.

use fos_aria::{Interactivity, InteractivityClassifier, RoleRegistry, TagRule};
use fos_markup::{Element, Expression};

fn classify(element: &Element) -> Interactivity {
    InteractivityClassifier::shared().classify_element(element)
}

// ============================================================================
// EXPLICIT ROLES
// ============================================================================

#[test]
fn test_every_concrete_role_classifies_by_its_valence() {
    let registry = RoleRegistry::shared();
    for role in registry.roles() {
        let name = role.name.to_ascii_lowercase();
        let el = Element::new("div").attr("role", name.as_str());
        let expected = if role.is_abstract {
            Interactivity::Indeterminate
        } else if name == "presentation" || name == "none" || !role.interactive {
            Interactivity::NonInteractive
        } else {
            Interactivity::Interactive
        };
        assert_eq!(classify(&el), expected, "role {}", name);
    }
}

#[test]
fn test_abstract_roles_satisfy_nothing() {
    let registry = RoleRegistry::shared();
    for role in registry.roles().filter(|r| r.is_abstract) {
        assert!(!registry.is_interactive_role(&role.name));
        assert!(!registry.is_non_interactive_role(&role.name));
    }
}

#[test]
fn test_role_overrides_tag() {
    assert_eq!(classify(&Element::new("div").attr("role", "button")), Interactivity::Interactive);
    assert_eq!(classify(&Element::new("li").attr("role", "menuitem")), Interactivity::Interactive);
    assert_eq!(classify(&Element::new("button").attr("role", "heading")), Interactivity::NonInteractive);
}

#[test]
fn test_presentation_wins_over_other_tokens() {
    let el = Element::new("div").attr("role", "button presentation");
    assert_eq!(classify(&el), Interactivity::NonInteractive);
    assert!(InteractivityClassifier::shared().is_presentation(&el.attributes));

    let none = Element::new("li").attr("role", "NONE");
    assert!(InteractivityClassifier::shared().is_presentation(&none.attributes));
}

#[test]
fn test_dynamic_role_falls_back_to_tag() {
    let el = Element::new("article").expr("role", Expression::identifier("role"));
    assert_eq!(classify(&el), Interactivity::NonInteractive);
    let el = Element::new("div").expr("role", Expression::identifier("role"));
    assert_eq!(classify(&el), Interactivity::Indeterminate);
}

// ============================================================================
// TAG TABLE
// ============================================================================

#[test]
fn test_inherently_interactive_tags() {
    for tag in ["button", "select", "textarea", "option", "tr", "th", "video", "audio", "canvas", "embed"] {
        assert_eq!(classify(&Element::new(tag)), Interactivity::Interactive, "{}", tag);
    }
    assert_eq!(classify(&Element::new("input")), Interactivity::Interactive);
    assert_eq!(classify(&Element::new("input").attr("type", "text")), Interactivity::Interactive);
}

#[test]
fn test_inherently_non_interactive_tags() {
    for tag in ["article", "h1", "li", "ul", "table", "tbody", "img", "iframe", "nav", "section", "p"] {
        assert_eq!(classify(&Element::new(tag)), Interactivity::NonInteractive, "{}", tag);
    }
}

#[test]
fn test_hidden_input_is_non_interactive() {
    let el = Element::new("input").attr("type", "hidden");
    assert_eq!(classify(&el), Interactivity::NonInteractive);
    assert!(InteractivityClassifier::shared().is_hidden_from_assistive_tech("input", &el.attributes));
    assert!(!InteractivityClassifier::shared().is_hidden_from_assistive_tech("div", &el.attributes));
}

#[test]
fn test_link_element_override() {
    let classifier = InteractivityClassifier::shared();
    assert_eq!(classifier.tag_rule("link"), Some(TagRule::AlwaysNonInteractive));
    assert_eq!(classify(&Element::new("link").attr("href", "style.css")), Interactivity::NonInteractive);
    assert!(classifier.registry().is_interactive_role("link"));
}

#[test]
fn test_generic_and_custom_tags() {
    for tag in ["div", "span", "label", "MyComponent", "TestComponent"] {
        assert_eq!(classify(&Element::new(tag)), Interactivity::Indeterminate, "{}", tag);
    }
}

#[test]
fn test_known_tags_ignore_case() {
    assert_eq!(classify(&Element::new("BUTTON")), Interactivity::Interactive);
    assert_eq!(classify(&Element::new("Article")), Interactivity::NonInteractive);
}

// ============================================================================
// HIDDEN FROM ASSISTIVE TECHNOLOGY
// ============================================================================

#[test]
fn test_aria_hidden_forms() {
    let classifier = InteractivityClassifier::shared();
    let hidden = [
        Element::new("div").bare("aria-hidden"),
        Element::new("div").attr("aria-hidden", "true"),
        Element::new("div").attr("aria-hidden", true),
        Element::new("div").expr("aria-hidden", Expression::not(false.into())),
    ];
    for el in &hidden {
        assert!(classifier.is_hidden_from_assistive_tech(&el.tag, &el.attributes), "{:?}", el);
    }

    let visible = [
        Element::new("div").attr("aria-hidden", false),
        Element::new("div").attr("aria-hidden", "false"),
        Element::new("div").expr("aria-hidden", Expression::identifier("hidden")),
        Element::new("div"),
    ];
    for el in &visible {
        assert!(!classifier.is_hidden_from_assistive_tech(&el.tag, &el.attributes), "{:?}", el);
    }
}

// ============================================================================
// IMPLICIT ROLES
// ============================================================================

#[test]
fn test_implicit_role_resolution() {
    let registry = RoleRegistry::shared();
    let implicit = |el: &Element| registry.implicit_role(&el.tag, &el.attributes);

    assert_eq!(implicit(&Element::new("button")), Some("button"));
    assert_eq!(implicit(&Element::new("nav")), Some("navigation"));
    assert_eq!(implicit(&Element::new("img").attr("alt", "")), Some("presentation"));
    assert_eq!(implicit(&Element::new("img").attr("alt", "A cat")), Some("img"));
    assert_eq!(implicit(&Element::new("input").attr("type", "RANGE")), Some("slider"));
    assert_eq!(implicit(&Element::new("menuitem").attr("type", "radio")), Some("menuitemradio"));
    assert_eq!(implicit(&Element::new("menuitem")), None);
    assert_eq!(implicit(&Element::new("div")), None);
}

//! ARIA property value validation
//!
//! Valid and invalid value sets per property type, in the value forms a
//! markup author actually writes.

use fos_aria::{AriaPropertyGrammar, AriaPropertyType};
use fos_markup::{Attribute, AttributeReadResult, Expression, TemplatePart, UnaryOp};

fn valid(name: &str, value: Expression) -> bool {
    AriaPropertyGrammar::shared().validate(name, &Attribute::new(name, value).read())
}

fn valid_bare(name: &str) -> bool {
    AriaPropertyGrammar::shared().validate(name, &Attribute::bare(name).read())
}

fn interpolated() -> Expression {
    Expression::Template(vec![TemplatePart::Substitution(Expression::identifier("abc"))])
}

// ============================================================================
// BOOLEAN
// ============================================================================

#[test]
fn test_boolean_valid() {
    assert!(valid("aria-hidden", true.into()));
    assert!(valid("aria-hidden", "true".into()));
    assert!(valid("aria-hidden", "FALSE".into()));
    assert!(valid("aria-hidden", Expression::not(false.into())));
    assert!(valid("aria-hidden", Expression::not("yes".into())));
    assert!(valid("aria-hidden", Expression::identifier("foo")));
    assert!(valid_bare("aria-hidden"));
}

#[test]
fn test_boolean_invalid() {
    assert!(!valid("aria-hidden", Expression::identifier("undefined")));
    assert!(!valid("aria-hidden", "yes".into()));
    assert!(!valid("aria-hidden", "no".into()));
    assert!(!valid("aria-hidden", 1234.into()));
}

// ============================================================================
// STRING
// ============================================================================

#[test]
fn test_string() {
    assert!(valid("aria-label", "Close".into()));
    assert!(valid("aria-label", Expression::template("Close")));
    assert!(valid("aria-label", Expression::identifier("foo")));

    assert!(!valid("aria-label", Expression::identifier("undefined")));
    assert!(!valid_bare("aria-label"));
    assert!(!valid("aria-label", true.into()));
    assert!(!valid("aria-label", 1234.into()));
    assert!(!valid("aria-label", Expression::not(true.into())));
}

// ============================================================================
// TRISTATE
// ============================================================================

#[test]
fn test_tristate() {
    assert!(valid("aria-checked", "mixed".into()));
    assert!(valid("aria-checked", Expression::template("MIXED")));
    assert!(valid("aria-checked", false.into()));
    assert!(valid_bare("aria-checked"));

    assert!(!valid("aria-checked", "yes".into()));
    assert!(!valid("aria-checked", 1234.into()));
    assert!(!valid("aria-checked", Expression::identifier("undefined")));
}

// ============================================================================
// INTEGER AND NUMBER
// ============================================================================

#[test]
fn test_integer() {
    assert!(valid("aria-level", 123.into()));
    assert!(valid("aria-level", Expression::unary(UnaryOp::Minus, 123.into())));
    assert!(valid("aria-level", Expression::unary(UnaryOp::Plus, 123.into())));
    assert!(valid("aria-level", Expression::unary(UnaryOp::BitNot, 123.into())));
    assert!(valid("aria-level", "123".into()));
    assert!(valid("aria-level", Expression::template("123")));

    assert!(!valid("aria-level", "yes".into()));
    assert!(!valid("aria-level", Expression::template("abc")));
    assert!(!valid("aria-level", true.into()));
    assert!(!valid_bare("aria-level"));
    assert!(!valid("aria-level", "false".into()));
    assert!(!valid("aria-level", Expression::not("false".into())));
    assert!(!valid("aria-level", 1.5.into()));
}

#[test]
fn test_number() {
    assert!(valid("aria-valuemax", 123.into()));
    assert!(valid("aria-valuemax", 12.5.into()));
    assert!(valid("aria-valuenow", "0.75".into()));
    assert!(valid("aria-valuemin", Expression::unary(UnaryOp::BitNot, 123.into())));

    assert!(!valid("aria-valuemax", Expression::identifier("undefined")));
    assert!(!valid("aria-valuemax", "no".into()));
    assert!(!valid_bare("aria-valuemax"));
    assert!(!valid("aria-valuemax", Expression::not("false".into())));
}

#[test]
fn test_number_prefixed_numerals() {
    assert!(valid("aria-valuenow", "0x10".into()));
    assert!(valid("aria-valuenow", "0b11".into()));
    assert!(!valid("aria-valuenow", "0x".into()));
    assert!(!valid("aria-valuenow", "-0x10".into()));
    assert!(!valid("aria-valuenow", "Infinity".into()));
}

// ============================================================================
// TOKEN AND TOKENLIST
// ============================================================================

#[test]
fn test_token() {
    for value in ["ascending", "ASCENDING", "descending", "none", "other"] {
        assert!(valid("aria-sort", value.into()), "{} should be valid", value);
    }
    assert!(valid("aria-sort", Expression::template("ascending")));

    assert!(!valid("aria-sort", "".into()));
    assert!(!valid("aria-sort", "descnding".into()));
    assert!(!valid_bare("aria-sort"));
    assert!(!valid("aria-sort", true.into()));
    assert!(!valid("aria-sort", "false".into()));
    assert!(!valid("aria-sort", "ascending descending".into()));
}

#[test]
fn test_tokenlist() {
    for value in ["additions", "additions removals", "additions additions", "removals additions text all"] {
        assert!(valid("aria-relevant", value.into()), "{} should be valid", value);
    }

    assert!(!valid("aria-relevant", "".into()));
    assert!(!valid("aria-relevant", "foobar".into()));
    assert!(!valid_bare("aria-relevant"));
    assert!(!valid("aria-relevant", "false".into()));
    assert!(!valid("aria-relevant", "additions removalss ".into()));
}

// ============================================================================
// UNKNOWN VALUES
// ============================================================================

#[test]
fn test_unknown_value_always_valid() {
    let grammar = AriaPropertyGrammar::shared();
    for name in grammar.property_names() {
        assert!(grammar.validate(name, &AttributeReadResult::Unknown), "{} rejected Unknown", name);
        assert!(valid(name, interpolated()), "{} rejected an interpolated template", name);
    }
}

#[test]
fn test_type_names() {
    let grammar = AriaPropertyGrammar::shared();
    let name_of = |p: &str| grammar.property_type(p).map(|t| t.to_string());
    assert_eq!(name_of("aria-hidden").as_deref(), Some("boolean"));
    assert_eq!(name_of("aria-checked").as_deref(), Some("tristate"));
    assert_eq!(name_of("aria-valuenow").as_deref(), Some("number"));
    assert_eq!(name_of("aria-sort").as_deref(), Some("token"));
    assert!(grammar
        .property_type("aria-dropeffect")
        .is_some_and(|t| matches!(t, AriaPropertyType::TokenList(v) if v.contains(&"popup"))));
}

//! Attribute Values
//!
//! Expression forms an attribute value can take, and the constant folding
//! that turns the trivially static ones into literals.

use std::fmt;

/// Statically known scalar value
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
}

impl Literal {
    /// String contents, if this is a string literal
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean value, if this is a boolean literal
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// `null` or `undefined`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Truthiness under script semantics
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::String(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Bool(b) => *b,
            Self::Null | Self::Undefined => false,
        }
    }

    /// Numeric coercion under script semantics (`NaN` when not numeric)
    pub fn to_number(&self) -> f64 {
        match self {
            Self::String(s) => parse_numeric(s.trim()).unwrap_or(f64::NAN),
            Self::Number(n) => *n,
            Self::Bool(b) => if *b { 1.0 } else { 0.0 },
            Self::Null => 0.0,
            Self::Undefined => f64::NAN,
        }
    }
}

impl fmt::Display for Literal {
    /// String coercion under script semantics
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write_number(f, *n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Null => f.write_str("null"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

/// Parse a numeral the way script number coercion does: decimal with an
/// optional sign and exponent, `0x`/`0o`/`0b` integers without a sign, and
/// `Infinity`. Empty input is zero.
fn parse_numeric(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }
    if let Some(n) = parse_radix(s) {
        return Some(n);
    }
    match s.strip_prefix(['+', '-']).unwrap_or(s) {
        "Infinity" => {
            return Some(if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY });
        }
        "" => return None,
        _ => {}
    }
    // f64::from_str also accepts "inf" and "NaN", which are not numerals here
    if !s.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_radix(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    Some(
        digits
            .chars()
            .try_fold(0.0, |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)))
            .unwrap_or(f64::NAN),
    )
}

/// Prefix operator applied to a sub-expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `!x`
    Not,
    /// `-x`
    Minus,
    /// `+x`
    Plus,
    /// `~x`
    BitNot,
}

/// Piece of a template string
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Text(String),
    Substitution(Expression),
}

/// Attribute value expression as the host parser hands it over
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Template(Vec<TemplatePart>),
    Unary { op: UnaryOp, operand: Box<Expression> },
    Identifier(String),
    /// Calls, member access, functions, operators we never evaluate
    Opaque,
}

impl Expression {
    pub fn string(s: impl Into<String>) -> Self {
        Self::Literal(Literal::String(s.into()))
    }

    pub fn number(n: f64) -> Self {
        Self::Literal(Literal::Number(n))
    }

    pub fn bool(b: bool) -> Self {
        Self::Literal(Literal::Bool(b))
    }

    pub fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn opaque() -> Self {
        Self::Opaque
    }

    /// Template without substitutions
    pub fn template(text: impl Into<String>) -> Self {
        Self::Template(vec![TemplatePart::Text(text.into())])
    }

    pub fn not(operand: Expression) -> Self {
        Self::Unary { op: UnaryOp::Not, operand: Box::new(operand) }
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Self::Unary { op, operand: Box::new(operand) }
    }

    /// Fold to a literal if the value is statically known.
    ///
    /// Only literals, substitution-free templates, the `undefined` identifier
    /// and prefix operators over those fold. Everything else is unknown.
    pub fn fold(&self) -> Option<Literal> {
        match self {
            Self::Literal(lit) => Some(lit.clone()),
            Self::Identifier(name) if name == "undefined" => Some(Literal::Undefined),
            Self::Identifier(_) | Self::Opaque => None,
            Self::Template(parts) => {
                let mut text = String::new();
                for part in parts {
                    match part {
                        TemplatePart::Text(t) => text.push_str(t),
                        TemplatePart::Substitution(_) => return None,
                    }
                }
                Some(Literal::String(text))
            }
            Self::Unary { op, operand } => {
                let value = operand.fold()?;
                Some(match op {
                    UnaryOp::Not => Literal::Bool(!value.is_truthy()),
                    UnaryOp::Minus => Literal::Number(-value.to_number()),
                    UnaryOp::Plus => Literal::Number(value.to_number()),
                    UnaryOp::BitNot => Literal::Number(bit_not(value.to_number())),
                })
            }
        }
    }
}

/// `~n` on a 32-bit integer view, as scripts do it
fn bit_not(n: f64) -> f64 {
    if !n.is_finite() {
        return -1.0;
    }
    let int = (n.trunc() as i64) as i32;
    f64::from(!int)
}

impl From<Literal> for Expression {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl From<&str> for Expression {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Expression {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

impl From<bool> for Expression {
    fn from(b: bool) -> Self {
        Self::bool(b)
    }
}

impl From<f64> for Expression {
    fn from(n: f64) -> Self {
        Self::number(n)
    }
}

impl From<i32> for Expression {
    fn from(n: i32) -> Self {
        Self::number(f64::from(n))
    }
}

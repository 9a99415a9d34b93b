//! Runtime values.

use std::fmt;

use relay_lexer::{tokenize, Token};

/// A script value. Values are copied on read and assignment, never shared.
///
/// An unset variable holds `Option::<Value>::None`; there is no nil variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Name of the variant, as used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
        }
    }

    /// The value a literal token denotes, or `None` for non-literals.
    pub fn from_literal(token: &Token) -> Option<Value> {
        match token {
            Token::IntLiteral(n) => Some(Value::Int(*n)),
            Token::FloatLiteral(n) => Some(Value::Float(*n)),
            Token::StringLiteral(s) => Some(Value::Str(s.clone())),
            Token::BoolLiteral(b) => Some(Value::Bool(*b)),
            _ => None,
        }
    }

    /// Parse text holding exactly one literal, using script syntax.
    ///
    /// `"14"`, `"2.5"`, `"'on'"` and `"true"` parse; anything else is `None`.
    pub fn parse_literal(text: &str) -> Option<Value> {
        match tokenize(text).ok()?.as_slice() {
            [token] => Value::from_literal(token),
            _ => None,
        }
    }
}

/// Type name of a possibly unset binding.
pub(crate) fn type_name_of(value: Option<&Value>) -> &'static str {
    value.map_or("nil", Value::type_name)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(Value::Int(1).type_name(), "integer");
        assert_eq!(Value::Float(1.0).type_name(), "float");
        assert_eq!(Value::from("a").type_name(), "string");
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert_eq!(type_name_of(None), "nil");
    }

    #[test]
    fn literal_tokens_map_to_values() {
        assert_eq!(
            Value::from_literal(&Token::StringLiteral("on".into())),
            Some(Value::from("on"))
        );
        assert_eq!(Value::from_literal(&Token::Variable("x".into())), None);
    }

    #[test]
    fn parse_single_literal() {
        assert_eq!(Value::parse_literal("14"), Some(Value::Int(14)));
        assert_eq!(Value::parse_literal(" 2.5 "), Some(Value::Float(2.5)));
        assert_eq!(Value::parse_literal("'on'"), Some(Value::from("on")));
        assert_eq!(Value::parse_literal("false"), Some(Value::Bool(false)));
        assert_eq!(Value::parse_literal("hour"), None);
        assert_eq!(Value::parse_literal("1 2"), None);
        assert_eq!(Value::parse_literal("$"), None);
    }

    #[test]
    fn equality_is_per_variant() {
        assert_eq!(Value::Int(1), Value::Int(1));
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::from("motor on").to_string(), "motor on");
    }
}

//! Comparison operators used in conditions.

use relay_lexer::Token;

use crate::errors::EvalError;
use crate::value::Value;

/// A binary comparison: `==`, `<` or `>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    Less,
    Greater,
}

impl Comparison {
    /// The comparison a token denotes, if any.
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Equal => Some(Comparison::Equal),
            Token::Less => Some(Comparison::Less),
            Token::Greater => Some(Comparison::Greater),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Equal => "==",
            Comparison::Less => "<",
            Comparison::Greater => ">",
        }
    }
}

/// Apply `op` to two values.
///
/// `==` is structural and never fails: values of different variants are
/// simply unequal. Ordering is defined for numbers only. An integer
/// compared with a float is widened to `f64` first.
pub fn compare(op: Comparison, left: &Value, right: &Value) -> Result<bool, EvalError> {
    if op == Comparison::Equal {
        return Ok(left == right);
    }

    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        #[expect(clippy::cast_precision_loss, reason = "mixed comparisons widen to f64")]
        (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
        #[expect(clippy::cast_precision_loss, reason = "mixed comparisons widen to f64")]
        (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
        _ => {
            return Err(EvalError::NotComparable {
                op: op.symbol(),
                left: left.type_name(),
                right: right.type_name(),
            })
        }
    };

    // NaN orders as neither less nor greater.
    Ok(match (op, ordering) {
        (Comparison::Less, Some(std::cmp::Ordering::Less))
        | (Comparison::Greater, Some(std::cmp::Ordering::Greater)) => true,
        _ => false,
    })
}

#[cfg(test)]
mod tests;

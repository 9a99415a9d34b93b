//! Condition evaluation.
//!
//! A condition is a flat chain of terms joined by `&&` or `||`. A term is
//! either a comparison (`operand op operand`) or a single boolean operand.
//! Terms are folded strictly left to right with no precedence between the
//! two combinators, and every term is evaluated: `a || b` still evaluates
//! (and may fail on) `b` when `a` is true.

use relay_lexer::Token;

use crate::environment::{Environment, ScopeId};
use crate::errors::{malformed_condition, EvalError};
use crate::operators::{compare, Comparison};
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Combinator {
    And,
    Or,
}

impl Combinator {
    fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::And => Some(Combinator::And),
            Token::Or => Some(Combinator::Or),
            _ => None,
        }
    }

    fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Combinator::And => left && right,
            Combinator::Or => left || right,
        }
    }
}

/// Evaluate the condition `tokens` with variables resolved from `scope`.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn evaluate(tokens: &[Token], env: &Environment, scope: ScopeId) -> Result<bool, EvalError> {
    if tokens.is_empty() {
        return Err(malformed_condition("empty condition"));
    }

    let mut cursor = Cursor {
        tokens,
        pos: 0,
        env,
        scope,
    };
    let mut result = cursor.term()?;

    while let Some(token) = cursor.next() {
        let combinator = Combinator::from_token(token).ok_or_else(|| {
            malformed_condition(format!("expected `&&` or `||`, found `{token}`"))
        })?;
        let right = cursor.term()?;
        result = combinator.apply(result, right);
    }

    Ok(result)
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    env: &'a Environment,
    scope: ScopeId,
}

impl<'a> Cursor<'a> {
    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn term(&mut self) -> Result<bool, EvalError> {
        let left = self.operand()?;

        let Some(op) = self.peek().and_then(Comparison::from_token) else {
            return match left {
                Value::Bool(b) => Ok(b),
                other => Err(EvalError::NotABoolean {
                    found: other.type_name(),
                }),
            };
        };
        self.pos += 1;

        let right = self.operand()?;
        compare(op, &left, &right)
    }

    fn operand(&mut self) -> Result<Value, EvalError> {
        let token = self
            .next()
            .ok_or_else(|| malformed_condition("expected an operand, found end of condition"))?;

        if let Some(value) = Value::from_literal(token) {
            return Ok(value);
        }

        match token {
            Token::Variable(name) => match self.env.binding(self.scope, name) {
                Some(Some(value)) => Ok(value.clone()),
                Some(None) => Err(EvalError::UninitializedVariable { name: name.clone() }),
                None => Err(EvalError::UnknownVariable { name: name.clone() }),
            },
            other => Err(malformed_condition(format!(
                "expected a literal or variable, found `{other}`"
            ))),
        }
    }
}

//! Evaluation errors.
//!
//! Every error aborts the running script; the host decides how to report
//! it. [`EvalError::kind`] groups the variants into the categories hosts
//! usually care about.

use relay_lexer::LexError;
use relay_parse::ParseError;

/// Result of running script code.
pub type EvalResult<T = ()> = Result<T, EvalError>;

/// Broad error category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed script text or construct.
    Syntax,
    /// An operation applied to the wrong kind of value.
    Type,
    /// A variable or external function that does not exist.
    UndefinedName,
    /// A configured execution limit was hit.
    Limit,
}

/// An error raised while tokenizing or interpreting a script.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),

    #[error("syntax error: invalid `{keyword}` usage, expected a variable name")]
    InvalidDefinition { keyword: String },

    #[error("syntax error: cannot assign {found} to `{name}`, expected a literal or a defined variable")]
    InvalidAssignment { name: String, found: String },

    #[error("syntax error: invalid argument {found} in call to `{function}`")]
    InvalidArgument { function: String, found: String },

    #[error("syntax error: unknown variable `{name}` in condition")]
    UnknownVariable { name: String },

    #[error("syntax error: malformed condition: {reason}")]
    MalformedCondition { reason: String },

    #[error("type error: variable `{name}` has no value")]
    UninitializedVariable { name: String },

    #[error("type error: cannot {operation} `{name}`: expected integer, found {found}")]
    NotAnInteger {
        name: String,
        operation: &'static str,
        found: &'static str,
    },

    #[error("type error: `{name}` overflowed")]
    IntegerOverflow { name: String },

    #[error("type error: cannot compare {left} {op} {right}")]
    NotComparable {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("type error: condition operand must be bool, found {found}")]
    NotABoolean { found: &'static str },

    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },

    #[error("loop exceeded the limit of {limit} iterations")]
    LoopLimitExceeded { limit: u64 },
}

impl EvalError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Lex(_)
            | EvalError::Parse(_)
            | EvalError::InvalidDefinition { .. }
            | EvalError::InvalidAssignment { .. }
            | EvalError::InvalidArgument { .. }
            | EvalError::UnknownVariable { .. }
            | EvalError::MalformedCondition { .. } => ErrorKind::Syntax,
            EvalError::UninitializedVariable { .. }
            | EvalError::NotAnInteger { .. }
            | EvalError::IntegerOverflow { .. }
            | EvalError::NotComparable { .. }
            | EvalError::NotABoolean { .. } => ErrorKind::Type,
            EvalError::UndefinedVariable { .. } | EvalError::UnknownFunction { .. } => {
                ErrorKind::UndefinedName
            }
            EvalError::LoopLimitExceeded { .. } => ErrorKind::Limit,
        }
    }
}

pub(crate) fn malformed_condition(reason: impl Into<String>) -> EvalError {
    EvalError::MalformedCondition {
        reason: reason.into(),
    }
}

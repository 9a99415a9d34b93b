//! Block extraction errors.

use std::fmt;

/// The construct being extracted when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Construct {
    If,
    While,
    For,
    Block,
    Call,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::If => write!(f, "`if` statement"),
            Construct::While => write!(f, "`while` loop"),
            Construct::For => write!(f, "`for` loop"),
            Construct::Block => write!(f, "block"),
            Construct::Call => write!(f, "function call"),
        }
    }
}

/// Malformed or unbalanced construct.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A structural token is missing.
    #[error("malformed {construct}: expected {expected} at token {index}, found {}", found_or_end(.found))]
    ExpectedToken {
        construct: Construct,
        expected: &'static str,
        index: usize,
        found: Option<String>,
    },
    /// An opening delimiter has no matching close.
    #[error("malformed {construct}: `{delimiter}` at token {index} is never closed")]
    Unbalanced {
        construct: Construct,
        delimiter: char,
        index: usize,
    },
    /// A `for` header does not hold exactly three clauses.
    #[error("malformed `for` loop: expected 3 clauses separated by `;`, found {found}")]
    ForClauses { found: usize },
}

fn found_or_end(found: &Option<String>) -> &str {
    found.as_deref().unwrap_or("end of input")
}

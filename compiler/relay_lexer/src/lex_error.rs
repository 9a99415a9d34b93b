//! Lexer error types.

use std::fmt;

/// A tokenizing failure, located in the source text.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("syntax error at line {line}, column {column}: {kind} `{fragment}`")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Byte offset of the offending fragment.
    pub offset: usize,
    /// 1-based line of `offset`.
    pub line: u32,
    /// 1-based column (in characters) of `offset`.
    pub column: u32,
    /// The source text no rule could accept.
    pub fragment: String,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// No token rule matches at this position.
    UnexpectedInput,
    /// A numeric literal matched but does not fit its type.
    InvalidNumber,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnexpectedInput => write!(f, "unexpected input"),
            LexErrorKind::InvalidNumber => write!(f, "invalid numeric literal"),
        }
    }
}

impl LexError {
    pub(crate) fn new(kind: LexErrorKind, source: &str, offset: usize, fragment: &str) -> Self {
        let (line, column) = line_column(source, offset);
        LexError {
            kind,
            offset,
            line,
            column,
            fragment: fragment.to_owned(),
        }
    }
}

/// Compute the 1-based line and column of a byte offset.
fn line_column(source: &str, offset: usize) -> (u32, u32) {
    let before = source.get(..offset).unwrap_or(source);
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (
        u32::try_from(line).unwrap_or(u32::MAX),
        u32::try_from(column).unwrap_or(u32::MAX),
    )
}

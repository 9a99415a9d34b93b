//! Token definitions for Relay scripts.
//!
//! Tokens are plain data: the interpreter walks a `Vec<Token>` directly,
//! so every structural marker (brackets, braces, separators) is kept.

use std::fmt;

/// A single lexical unit produced by [`crate::tokenize`].
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    // === Literals ===
    IntLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
    BoolLiteral(bool),

    // === Punctuation ===
    /// `(`
    BracketOpen,
    /// `)`
    BracketClose,
    /// `{`
    BlockOpen,
    /// `}`
    BlockClose,
    /// `,`
    Comma,
    /// `;`
    Semicolon,

    // === Keywords ===
    If,
    Else,
    While,
    For,
    Break,
    Return,
    /// Variable definition marker, carrying the keyword that introduced it
    /// (`var` or `let`).
    VariableDefinition(String),

    // === Operators ===
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `++`
    Increment,
    /// `--`
    Decrement,

    // === Names ===
    Variable(String),
    /// Zero-argument call: `name()`.
    Function(String),
    /// Call with arguments: `name(`. Always followed by [`Token::BracketOpen`].
    FunctionWithArguments(String),
}

impl Token {
    /// Whether this token is a literal that maps directly onto a value.
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::IntLiteral(_)
                | Token::FloatLiteral(_)
                | Token::StringLiteral(_)
                | Token::BoolLiteral(_)
        )
    }

    /// Short human-readable kind, used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Token::IntLiteral(_) => "integer literal",
            Token::FloatLiteral(_) => "float literal",
            Token::StringLiteral(_) => "string literal",
            Token::BoolLiteral(_) => "boolean literal",
            Token::BracketOpen => "`(`",
            Token::BracketClose => "`)`",
            Token::BlockOpen => "`{`",
            Token::BlockClose => "`}`",
            Token::Comma => "`,`",
            Token::Semicolon => "`;`",
            Token::If => "`if`",
            Token::Else => "`else`",
            Token::While => "`while`",
            Token::For => "`for`",
            Token::Break => "`break`",
            Token::Return => "`return`",
            Token::VariableDefinition(_) => "variable definition",
            Token::Assign => "`=`",
            Token::Equal => "`==`",
            Token::Less => "`<`",
            Token::Greater => "`>`",
            Token::And => "`&&`",
            Token::Or => "`||`",
            Token::Increment => "`++`",
            Token::Decrement => "`--`",
            Token::Variable(_) => "variable",
            Token::Function(_) | Token::FunctionWithArguments(_) => "function call",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(n) => write!(f, "{n}"),
            Token::FloatLiteral(n) => write!(f, "{n:?}"),
            Token::StringLiteral(s) => write!(f, "\"{s}\""),
            Token::BoolLiteral(b) => write!(f, "{b}"),
            Token::BracketOpen => write!(f, "("),
            Token::BracketClose => write!(f, ")"),
            Token::BlockOpen => write!(f, "{{"),
            Token::BlockClose => write!(f, "}}"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::If => write!(f, "if"),
            Token::Else => write!(f, "else"),
            Token::While => write!(f, "while"),
            Token::For => write!(f, "for"),
            Token::Break => write!(f, "break"),
            Token::Return => write!(f, "return"),
            Token::VariableDefinition(kind) => write!(f, "{kind}"),
            Token::Assign => write!(f, "="),
            Token::Equal => write!(f, "=="),
            Token::Less => write!(f, "<"),
            Token::Greater => write!(f, ">"),
            Token::And => write!(f, "&&"),
            Token::Or => write!(f, "||"),
            Token::Increment => write!(f, "++"),
            Token::Decrement => write!(f, "--"),
            Token::Variable(name) => write!(f, "{name}"),
            Token::Function(name) => write!(f, "{name}()"),
            Token::FunctionWithArguments(name) => write!(f, "{name}"),
        }
    }
}

/// Look up the keyword token for `name`, if it is one.
///
/// Used when a keyword is glued to an opening bracket (`if(`, `while(`),
/// which the call rules would otherwise claim.
pub fn keyword(name: &str) -> Option<Token> {
    Some(match name {
        "true" => Token::BoolLiteral(true),
        "false" => Token::BoolLiteral(false),
        "if" => Token::If,
        "else" => Token::Else,
        "while" => Token::While,
        "for" => Token::For,
        "break" => Token::Break,
        "return" => Token::Return,
        "var" | "let" => Token::VariableDefinition(name.to_owned()),
        _ => return None,
    })
}

#[cfg(test)]
mod tests;

//! Relay Lexer - tokenizer for Relay behaviour scripts.
//!
//! Turns comment-free script text into the flat `Vec<Token>` the
//! interpreter walks. Comment stripping lives in [`remove_comments`] and
//! runs before [`tokenize`].

mod comments;
mod lex_error;
mod token;

use logos::Logos;

pub use comments::remove_comments;
pub use lex_error::{LexError, LexErrorKind};
pub use token::{keyword, Token};

/// Raw token from logos (before names are classified).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    // Keywords. These win over the identifier rule on equal length.
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("break")]
    Break,
    #[token("return")]
    Return,
    #[token("var")]
    Var,
    #[token("let")]
    Let,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // Operators
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,

    // Literals. A float needs its decimal point, so the integer rule only
    // wins when there is none.
    #[regex(r"-?([0-9]+\.[0-9]*|\.[0-9]+)", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),
    #[regex(r"'[a-zA-Z0-9_ \-]*'")]
    SingleQuoted,
    #[regex(r#""[a-zA-Z0-9_ '\-]*""#)]
    DoubleQuoted,

    // Names
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*\(\)")]
    Call,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*\(")]
    CallOpen,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Tokenize comment-free script text.
///
/// Whitespace between tokens is discarded. Fails on the first position no
/// rule accepts.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        let Ok(raw) = result else {
            let kind = if slice.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
                LexErrorKind::InvalidNumber
            } else {
                LexErrorKind::UnexpectedInput
            };
            return Err(LexError::new(kind, source, lexer.span().start, slice));
        };
        push_converted(&mut tokens, raw, slice);
    }

    Ok(tokens)
}

/// Convert a raw token, appending zero, one or two tokens.
fn push_converted(tokens: &mut Vec<Token>, raw: RawToken, slice: &str) {
    let token = match raw {
        RawToken::True => Token::BoolLiteral(true),
        RawToken::False => Token::BoolLiteral(false),
        RawToken::If => Token::If,
        RawToken::Else => Token::Else,
        RawToken::While => Token::While,
        RawToken::For => Token::For,
        RawToken::Break => Token::Break,
        RawToken::Return => Token::Return,
        RawToken::Var | RawToken::Let => Token::VariableDefinition(slice.to_owned()),

        RawToken::LParen => Token::BracketOpen,
        RawToken::RParen => Token::BracketClose,
        RawToken::LBrace => Token::BlockOpen,
        RawToken::RBrace => Token::BlockClose,
        RawToken::Comma => Token::Comma,
        RawToken::Semicolon => Token::Semicolon,

        RawToken::EqEq => Token::Equal,
        RawToken::Eq => Token::Assign,
        RawToken::Lt => Token::Less,
        RawToken::Gt => Token::Greater,
        RawToken::AmpAmp => Token::And,
        RawToken::PipePipe => Token::Or,
        RawToken::PlusPlus => Token::Increment,
        RawToken::MinusMinus => Token::Decrement,

        RawToken::Float(n) => Token::FloatLiteral(n),
        RawToken::Int(n) => Token::IntLiteral(n),
        RawToken::SingleQuoted | RawToken::DoubleQuoted => {
            Token::StringLiteral(slice[1..slice.len() - 1].to_owned())
        }

        RawToken::Call => {
            let name = &slice[..slice.len() - 2];
            if let Some(kw) = keyword(name) {
                tokens.extend([kw, Token::BracketOpen, Token::BracketClose]);
                return;
            }
            Token::Function(name.to_owned())
        }
        RawToken::CallOpen => {
            let name = &slice[..slice.len() - 1];
            let head = keyword(name).unwrap_or_else(|| Token::FunctionWithArguments(name.to_owned()));
            tokens.extend([head, Token::BracketOpen]);
            return;
        }
        RawToken::Ident => Token::Variable(slice.to_owned()),
    };
    tokens.push(token);
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

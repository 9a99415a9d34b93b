//! Extraction of control-flow constructs from a flat token stream.
//!
//! The interpreter never builds a tree. When it reaches `if`, `while`,
//! `for` or a bare `{`, it asks [`BlockParser`] for the token slices that
//! make up the construct and for how many tokens to skip afterwards.
//!
//! Delimiters are matched by depth counting. Brackets and braces keep
//! separate counters, so `(` never closes against `}`.

use relay_lexer::Token;

use crate::error::{Construct, ParseError};

/// A construct split into its parts. All slices borrow from the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Block<'t> {
    /// Tokens strictly inside the `( ... )` header. Empty for bare blocks.
    pub condition: &'t [Token],
    /// Tokens strictly inside the main `{ ... }` body.
    pub body: &'t [Token],
    /// The `else` body, if present. For `else if` this is the whole
    /// nested `if` construct.
    pub alternate: Option<&'t [Token]>,
    /// Tokens covered from the keyword through the final `}`.
    pub consumed: usize,
}

/// Tokens between a delimiter pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region<'t> {
    /// Tokens strictly between the delimiters.
    pub inner: &'t [Token],
    /// Tokens covered including both delimiters.
    pub consumed: usize,
}

/// The three clauses of a `for` header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForClauses<'t> {
    pub init: &'t [Token],
    pub test: &'t [Token],
    pub step: &'t [Token],
}

#[derive(Clone, Copy)]
enum Delimiter {
    Bracket,
    Brace,
}

impl Delimiter {
    fn open(self) -> Token {
        match self {
            Delimiter::Bracket => Token::BracketOpen,
            Delimiter::Brace => Token::BlockOpen,
        }
    }

    fn close(self) -> Token {
        match self {
            Delimiter::Bracket => Token::BracketClose,
            Delimiter::Brace => Token::BlockClose,
        }
    }

    fn symbol(self) -> char {
        match self {
            Delimiter::Bracket => '(',
            Delimiter::Brace => '{',
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Delimiter::Bracket => "`(`",
            Delimiter::Brace => "`{`",
        }
    }
}

/// Locates constructs inside one token sequence.
#[derive(Clone, Copy, Debug)]
pub struct BlockParser<'t> {
    tokens: &'t [Token],
}

impl<'t> BlockParser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        BlockParser { tokens }
    }

    /// Extract `if (cond) { body } [else { alt } | else if ...]`.
    pub fn if_block(&self, index: usize) -> Result<Block<'t>, ParseError> {
        self.expect_keyword(index, &Token::If, Construct::If, "`if`")?;
        let (condition, body, mut end) = self.header_and_body(index, Construct::If)?;

        let alternate = if self.tokens.get(end) == Some(&Token::Else) {
            let start = end + 1;
            if self.tokens.get(start) == Some(&Token::If) {
                let nested = self.if_block(start)?;
                end = start + nested.consumed;
                Some(&self.tokens[start..end])
            } else {
                let alt = self.region(start, Delimiter::Brace, Construct::If)?;
                end = start + alt.consumed;
                Some(alt.inner)
            }
        } else {
            None
        };

        Ok(Block {
            condition,
            body,
            alternate,
            consumed: end - index,
        })
    }

    /// Extract `while (cond) { body }`.
    pub fn while_block(&self, index: usize) -> Result<Block<'t>, ParseError> {
        self.expect_keyword(index, &Token::While, Construct::While, "`while`")?;
        let (condition, body, end) = self.header_and_body(index, Construct::While)?;
        Ok(Block {
            condition,
            body,
            alternate: None,
            consumed: end - index,
        })
    }

    /// Extract `for (init; test; step) { body }`.
    ///
    /// The header is returned whole in `condition`; see
    /// [`split_for_clauses`].
    pub fn for_block(&self, index: usize) -> Result<Block<'t>, ParseError> {
        self.expect_keyword(index, &Token::For, Construct::For, "`for`")?;
        let (condition, body, end) = self.header_and_body(index, Construct::For)?;
        Ok(Block {
            condition,
            body,
            alternate: None,
            consumed: end - index,
        })
    }

    /// Extract a bare `{ body }` starting at the `{`.
    pub fn anonymous_block(&self, index: usize) -> Result<Block<'t>, ParseError> {
        let region = self.region(index, Delimiter::Brace, Construct::Block)?;
        Ok(Block {
            condition: &[],
            body: region.inner,
            alternate: None,
            consumed: region.consumed,
        })
    }

    /// Tokens between the `(` at `open_index` and its matching `)`.
    pub fn bracket_region(&self, open_index: usize) -> Result<Region<'t>, ParseError> {
        self.region(open_index, Delimiter::Bracket, Construct::Call)
    }

    /// `( header ) { body }` following the keyword at `index`.
    ///
    /// Returns the header, the body, and the index just past the `}`.
    fn header_and_body(
        &self,
        index: usize,
        construct: Construct,
    ) -> Result<(&'t [Token], &'t [Token], usize), ParseError> {
        let header_start = index + 1;
        let header = self.region(header_start, Delimiter::Bracket, construct)?;
        let body_start = header_start + header.consumed;
        let body = self.region(body_start, Delimiter::Brace, construct)?;
        Ok((header.inner, body.inner, body_start + body.consumed))
    }

    fn expect_keyword(
        &self,
        index: usize,
        keyword: &Token,
        construct: Construct,
        expected: &'static str,
    ) -> Result<(), ParseError> {
        match self.tokens.get(index) {
            Some(token) if token == keyword => Ok(()),
            other => Err(ParseError::ExpectedToken {
                construct,
                expected,
                index,
                found: other.map(ToString::to_string),
            }),
        }
    }

    fn region(
        &self,
        open_index: usize,
        delimiter: Delimiter,
        construct: Construct,
    ) -> Result<Region<'t>, ParseError> {
        let open = delimiter.open();
        let close = delimiter.close();

        match self.tokens.get(open_index) {
            Some(token) if *token == open => {}
            other => {
                return Err(ParseError::ExpectedToken {
                    construct,
                    expected: delimiter.expected(),
                    index: open_index,
                    found: other.map(ToString::to_string),
                })
            }
        }

        let mut depth = 0usize;
        for (offset, token) in self.tokens[open_index..].iter().enumerate() {
            if *token == open {
                depth += 1;
            } else if *token == close {
                depth -= 1;
                if depth == 0 {
                    let close_index = open_index + offset;
                    return Ok(Region {
                        inner: &self.tokens[open_index + 1..close_index],
                        consumed: offset + 1,
                    });
                }
            }
        }

        Err(ParseError::Unbalanced {
            construct,
            delimiter: delimiter.symbol(),
            index: open_index,
        })
    }
}

/// Split a `for` header into initializer, test and step.
pub fn split_for_clauses(header: &[Token]) -> Result<ForClauses<'_>, ParseError> {
    match split_top_level(header, &Token::Semicolon).as_slice() {
        [init, test, step] => Ok(ForClauses {
            init: *init,
            test: *test,
            step: *step,
        }),
        parts => Err(ParseError::ForClauses { found: parts.len() }),
    }
}

/// Split call arguments on top-level commas.
///
/// An empty region has no arguments. Empty pieces (`f(1,)`) are kept so
/// the caller can reject them.
pub fn split_arguments(region: &[Token]) -> Vec<&[Token]> {
    if region.is_empty() {
        return Vec::new();
    }
    split_top_level(region, &Token::Comma)
}

/// Split on `separator` where it is not nested in brackets or braces.
fn split_top_level<'t>(tokens: &'t [Token], separator: &Token) -> Vec<&'t [Token]> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::BracketOpen | Token::BlockOpen => depth += 1,
            Token::BracketClose | Token::BlockClose => depth = depth.saturating_sub(1),
            t if depth == 0 && t == separator => {
                parts.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&tokens[start..]);
    parts
}

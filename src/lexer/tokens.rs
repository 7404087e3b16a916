//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::span::Span;

/// A single token: its kind, the literal text it was read from, and where in the
/// source that text was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub source: Span,
}
impl Token {
    /// Constructs a token that does not originate from a source file.
    #[cfg(test)]
    pub fn new<S: Into<String>>(kind: TokenKind, text: S) -> Self {
        Self {
            kind,
            text: text.into(),
            source: Span::zero(),
        }
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    pub fn is_delimiter(&self, delimiter: &str) -> bool {
        self.is(TokenKind::Delimiter, delimiter)
    }

    pub fn is_operator(&self, operator: &str) -> bool {
        self.is(TokenKind::Operator, operator)
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    String,
    Delimiter,
}
impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::String => "string",
            TokenKind::Delimiter => "delimiter",
        })
    }
}

/// Reserved words. Identifiers matching one of these are lexed as keywords.
pub const KEYWORDS: [&str; 6] = ["var", "if", "else", "while", "return", "function"];

/// Operators made of two characters. These are matched before single-character
/// operators.
pub const DOUBLE_OPERATORS: [&str; 6] = ["==", "!=", "<=", ">=", "&&", "||"];

pub const SINGLE_OPERATORS: [char; 10] = ['+', '-', '*', '/', '=', '<', '>', '!', '&', '|'];

pub const DELIMITERS: [char; 6] = ['(', ')', '{', '}', ';', ','];

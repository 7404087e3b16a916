//! A positional cursor over a token stream.
use crate::{
    lexer::tokens::{Token, TokenKind},
    span::Span,
};

/// The reason a [`TokenCursor::expect`] call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unexpected {
    /// A token was found, but it was not the one that was expected.
    Token(Token),
    /// The token stream ended. Holds the (empty) span just past the last token.
    EndOfInput(Span),
}

/// Reads tokens by index. Cloning a cursor is cheap, and lets callers look
/// ahead without committing to a parse.
#[derive(Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Index of the next token to be read.
    #[cfg(test)]
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Number of tokens that have not been read yet.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.peek_nth(0)
    }

    /// Returns the token `n` positions past the next one, without consuming anything.
    pub fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.position + n)
    }

    pub fn next(&mut self) -> Result<&'a Token, Unexpected> {
        let token = self.peek().ok_or_else(|| self.end_of_input())?;
        self.position += 1;
        Ok(token)
    }

    /// Skips up to `count` tokens.
    pub fn advance(&mut self, count: usize) {
        self.position = (self.position + count).min(self.tokens.len());
    }

    /// Tries to read a token of the given kind and text. If the token does not match,
    /// the cursor is not advanced, and an error is returned instead.
    pub fn expect(&mut self, kind: TokenKind, text: &str) -> Result<&'a Token, Unexpected> {
        self.expect_where(|token| token.is(kind, text))
    }

    /// Tries to read a token of the given kind, with any text.
    pub fn expect_kind(&mut self, kind: TokenKind) -> Result<&'a Token, Unexpected> {
        self.expect_where(|token| token.kind == kind)
    }

    pub fn expect_delimiter(&mut self, delimiter: &str) -> Result<&'a Token, Unexpected> {
        self.expect(TokenKind::Delimiter, delimiter)
    }

    /// Reads the next token if `predicate` accepts it.
    pub fn expect_where<P>(&mut self, predicate: P) -> Result<&'a Token, Unexpected>
    where
        P: FnOnce(&Token) -> bool,
    {
        let next = self.peek().ok_or_else(|| self.end_of_input())?;

        if predicate(next) {
            self.position += 1;
            Ok(next)
        } else {
            Err(Unexpected::Token(next.clone()))
        }
    }

    /// The span of the next token, or the empty span after the last token.
    pub fn span(&self) -> Span {
        match self.peek() {
            Some(token) => token.source,
            None => self.end_span(),
        }
    }

    fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map(|token| token.source.after())
            .unwrap_or_else(Span::zero)
    }

    fn end_of_input(&self) -> Unexpected {
        Unexpected::EndOfInput(self.end_span())
    }
}

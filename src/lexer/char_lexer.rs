use std::{iter::Peekable, str::Chars};

use crate::span::Bytes;

/// Abstraction over a peekable char iterator with position information.
///
/// Since it only holds an iterator and a position, this type is cheap to clone,
/// which is how the lexer looks ahead without committing to a token.
#[derive(Clone)]
pub struct CharLexer<'a> {
    chars: Peekable<Chars<'a>>,
    byte_position: Bytes,
}

impl<'a> CharLexer<'a> {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            byte_position: Bytes::new(0),
        }
    }

    /// Tries to advance the lexer by one character.
    /// Returns [`None`] if the lexer cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.chars.next();
        if let Some(ch) = next {
            self.byte_position += ch.len_utf8();
        }
        next
    }

    /// Returns the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Retrieves the byte position of the lexer.
    pub fn byte_position(&self) -> Bytes {
        self.byte_position
    }

    /// Peeks at the next character, and consumes it if it matches the provided character.
    /// Returns true if the character was consumed, false otherwise.
    pub fn recognise(&mut self, character: char) -> bool {
        match self.chars.peek() {
            Some(ch) if ch == &character => {
                self.try_next();
                true
            }
            _ => false,
        }
    }

    /// Consumes up to `count` characters.
    pub fn consume(&mut self, count: usize) {
        for _ in 0..count {
            if self.try_next().is_none() {
                break;
            }
        }
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns a [`String`] containing the consumed characters.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> String
    where
        P: FnMut(&char) -> bool,
    {
        let mut matches = String::new();
        while let Some(ch) = self.chars.peek() {
            if predicate(ch) {
                matches.push(*ch);
                self.try_next();
            } else {
                break;
            }
        }
        matches
    }

    /// Checks if the lexer is finished.
    pub fn is_finished(&mut self) -> bool {
        self.peek().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_position_counts_utf8_width() {
        let mut lexer = CharLexer::new("é1");

        lexer.try_next();

        assert_eq!(Bytes::new(2), lexer.byte_position());
        assert_eq!(Some('1'), lexer.peek());
    }

    #[test]
    fn consume_while_stops_at_first_mismatch() {
        let mut lexer = CharLexer::new("abc123");

        assert_eq!("abc", lexer.consume_while(char::is_ascii_alphabetic));
        assert_eq!(Some('1'), lexer.peek());
    }

    #[test]
    fn recognise_only_consumes_on_match() {
        let mut lexer = CharLexer::new("=");

        assert!(!lexer.recognise('!'));
        assert!(lexer.recognise('='));
        assert!(lexer.is_finished());
    }
}

//! Lexing functions for constructing a token stream.
use crate::span::*;

use super::{char_ext::*, char_lexer::*, error::*, tokens::*};

type LexResult<T> = Option<Result<T, LexError>>;

struct Lexer<'s> {
    lexer: CharLexer<'s>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

/// Converts source code into a token stream. Lexing continues past errors, so
/// that every unrecognised character in the source is reported at once.
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    Lexer::new(source).run()
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            lexer: CharLexer::new(source),
            tokens: vec![],
            errors: vec![],
        }
    }

    /// Finishes the lexer and consumes it, producing the tokens it read.
    fn run(mut self) -> Result<Vec<Token>, Vec<LexError>> {
        loop {
            self.lexer.consume_while(|ch| ch.is_whitespace());
            if self.lexer.is_finished() {
                break;
            }
            if self.try_consume_comment() {
                continue;
            }
            self.consume_token();
        }

        log::debug!(
            "Lexed {} tokens with {} errors",
            self.tokens.len(),
            self.errors.len()
        );

        if !self.errors.is_empty() {
            Err(self.errors)
        } else {
            Ok(self.tokens)
        }
    }

    /// Skips a `//` comment up to the end of the line.
    fn try_consume_comment(&mut self) -> bool {
        let mut lookahead = self.lexer.clone();
        if !(lookahead.recognise('/') && lookahead.recognise('/')) {
            return false;
        }
        self.lexer.consume_while(CharExt::is_not_linebreak);
        true
    }

    /// Consumes a single token, or records an error if no token could be read.
    /// Always advances the lexer by at least one character.
    fn consume_token(&mut self) {
        let next_token = self
            .word()
            .or_else(|| self.number())
            .or_else(|| self.operator())
            .or_else(|| self.delimiter())
            .map(Ok)
            .or_else(|| self.string_literal())
            .unwrap_or_else(|| Err(self.unknown_token()));

        match next_token {
            Ok(token) => {
                self.lexer.consume(token.text.chars().count());
                log::trace!("{:?} {:?}", token.source, token);
                self.tokens.push(token);
            }
            Err(error) => {
                match error.error_type {
                    ErrorType::UnterminatedString => {
                        self.lexer.consume_while(CharExt::is_not_linebreak);
                    }
                    ErrorType::UnknownToken(_) => self.lexer.consume(1),
                }
                self.errors.push(error);
            }
        }
    }

    /// Reads an identifier, or a keyword if the identifier is reserved.
    fn word(&self) -> Option<Token> {
        let mut lexer = self.lexer.clone();

        lexer.peek().filter(CharExt::is_identifier_start)?;
        let word = lexer.consume_while(CharExt::is_identifier_continue);

        let kind = if KEYWORDS.contains(&word.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Some(self.make_token(kind, word))
    }

    /// Reads an integer or decimal number. A trailing `.` that is not followed by
    /// a digit is not part of the number.
    fn number(&self) -> Option<Token> {
        let mut lexer = self.lexer.clone();

        lexer.peek().filter(char::is_ascii_digit)?;
        let mut number = lexer.consume_while(char::is_ascii_digit);

        let mut fraction = lexer.clone();
        if fraction.recognise('.') {
            let digits = fraction.consume_while(char::is_ascii_digit);
            if !digits.is_empty() {
                number.push('.');
                number.push_str(&digits);
            }
        }

        Some(self.make_token(TokenKind::Number, number))
    }

    fn operator(&self) -> Option<Token> {
        let mut lexer = self.lexer.clone();

        let first = lexer.try_next().filter(CharExt::is_operator)?;
        let pair: String = [Some(first), lexer.peek()].into_iter().flatten().collect();

        if DOUBLE_OPERATORS.contains(&pair.as_str()) {
            Some(self.make_token(TokenKind::Operator, pair))
        } else {
            Some(self.make_token(TokenKind::Operator, first.to_string()))
        }
    }

    fn delimiter(&self) -> Option<Token> {
        let mut lexer = self.lexer.clone();

        let delimiter = lexer.try_next().filter(CharExt::is_delimiter)?;
        Some(self.make_token(TokenKind::Delimiter, delimiter.to_string()))
    }

    /// Reads a single- or double-quoted string literal. The token text keeps its
    /// quotes. Strings may not span multiple lines.
    fn string_literal(&self) -> LexResult<Token> {
        let mut lexer = self.lexer.clone();

        let quote = lexer.peek().filter(|&c| c == '"' || c == '\'')?;
        lexer.try_next();

        let mut raw_value = quote.to_string();
        loop {
            match lexer.peek() {
                Some(ch) if ch == quote => {
                    raw_value.push(ch);
                    return Some(Ok(self.make_token(TokenKind::String, raw_value)));
                }
                Some(ch) if ch.is_not_linebreak() => {
                    raw_value.push(ch);
                    lexer.try_next();
                }
                _ => {
                    return Some(Err(self.make_error(
                        raw_value.len(),
                        ErrorType::UnterminatedString,
                    )))
                }
            }
        }
    }

    fn unknown_token(&self) -> LexError {
        let mut lexer = self.lexer.clone();
        let ch = lexer.try_next().unwrap_or_default();

        self.make_error(ch.len_utf8(), ErrorType::UnknownToken(ch))
    }

    fn make_error(&self, length: usize, error_type: ErrorType) -> LexError {
        let position = self.lexer.byte_position();

        LexError {
            span: Span::new(position, position + length),
            error_type,
        }
    }

    /// Constructs a token of the given kind from `text`, starting at the lexer's
    /// current position.
    fn make_token(&self, kind: TokenKind, text: String) -> Token {
        let position = self.lexer.byte_position();

        Token {
            source: Span::new(position, position + text.len()),
            kind,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_tokens(expected: &[(TokenKind, &str)], actual: Vec<Token>) {
        let actual_pairs: Vec<_> = actual.iter().map(|t| (t.kind, t.text.as_str())).collect();

        for (idx, (pair, token)) in expected.iter().zip(actual_pairs.iter()).enumerate() {
            assert_eq!(
                pair, token,
                "\n\nWhen comparing:\n  (expected) {:?}\n  (actual)   {:?}\n\nExpected token #{} to be {:?}, but was {:?}",
                expected, actual_pairs, idx, pair, token
            );
        }
        assert_eq!(
            expected.len(),
            actual_pairs.len(),
            "\n\nWhen comparing:\n  (expected) {:?}\n  (actual)   {:?}\n\nExpected to find {} tokens, but found {}",
            expected,
            actual_pairs,
            expected.len(),
            actual_pairs.len()
        );
    }

    fn assert_lexes(source: &str, expected: &[(TokenKind, &str)]) {
        let tokens = lex(source).expect("Unexpected lexer error");

        expect_tokens(expected, tokens);
    }

    fn lex_errors(source: &str) -> Vec<LexError> {
        match lex(source) {
            Ok(tokens) => panic!("Expected lexer to fail, but it produced: {:#?}", tokens),
            Err(errors) => errors,
        }
    }

    use TokenKind::*;

    #[test]
    fn var_declaration_lexes() {
        assert_lexes(
            "var x = 10 + y;",
            &[
                (Keyword, "var"),
                (Identifier, "x"),
                (Operator, "="),
                (Number, "10"),
                (Operator, "+"),
                (Identifier, "y"),
                (Delimiter, ";"),
            ],
        );
    }

    #[test]
    fn keywords_are_whole_words() {
        assert_lexes(
            "while whiley iff if",
            &[
                (Keyword, "while"),
                (Identifier, "whiley"),
                (Identifier, "iff"),
                (Keyword, "if"),
            ],
        );
    }

    #[test]
    fn double_operators_are_preferred() {
        assert_lexes(
            "a <= b == c != d >= e",
            &[
                (Identifier, "a"),
                (Operator, "<="),
                (Identifier, "b"),
                (Operator, "=="),
                (Identifier, "c"),
                (Operator, "!="),
                (Identifier, "d"),
                (Operator, ">="),
                (Identifier, "e"),
            ],
        );
    }

    #[test]
    fn unpaired_operators_split() {
        assert_lexes(
            "x=-1",
            &[
                (Identifier, "x"),
                (Operator, "="),
                (Operator, "-"),
                (Number, "1"),
            ],
        );
    }

    #[test]
    fn decimal_numbers_lex_as_one_token() {
        assert_lexes("3.25 7", &[(Number, "3.25"), (Number, "7")]);
    }

    #[test]
    fn strings_keep_their_quotes() {
        assert_lexes(
            "return \"That is amazing\"; 'single'",
            &[
                (Keyword, "return"),
                (String, "\"That is amazing\""),
                (Delimiter, ";"),
                (String, "'single'"),
            ],
        );
    }

    #[test]
    fn function_declaration_lexes() {
        assert_lexes(
            "function greet() { return x; }",
            &[
                (Keyword, "function"),
                (Identifier, "greet"),
                (Delimiter, "("),
                (Delimiter, ")"),
                (Delimiter, "{"),
                (Keyword, "return"),
                (Identifier, "x"),
                (Delimiter, ";"),
                (Delimiter, "}"),
            ],
        );
    }

    #[test]
    fn comments_and_newlines_are_skipped() {
        assert_lexes(
            "x = 1; // set x\r\n\ty = x / 2;",
            &[
                (Identifier, "x"),
                (Operator, "="),
                (Number, "1"),
                (Delimiter, ";"),
                (Identifier, "y"),
                (Operator, "="),
                (Identifier, "x"),
                (Operator, "/"),
                (Number, "2"),
                (Delimiter, ";"),
            ],
        );
    }

    #[test]
    fn tokens_record_their_source_range() {
        let tokens = lex("var  count").unwrap();

        assert_eq!(Span::new(Bytes::new(5), Bytes::new(10)), tokens[1].source);
        assert_eq!(Some("count"), tokens[1].source.lookup("var  count"));
    }

    #[test]
    fn unknown_characters_are_all_reported() {
        let errors = lex_errors("x = @ + #;");

        let types: Vec<_> = errors.iter().map(|e| &e.error_type).collect();
        assert_eq!(
            vec![&ErrorType::UnknownToken('@'), &ErrorType::UnknownToken('#')],
            types
        );
        assert_eq!(Span::new(Bytes::new(4), Bytes::new(5)), errors[0].span);
    }

    #[test]
    fn string_may_not_span_lines() {
        let errors = lex_errors("x = \"abc\ny;");

        assert_eq!(1, errors.len());
        assert_eq!(ErrorType::UnterminatedString, errors[0].error_type);
        assert_eq!(Span::new(Bytes::new(4), Bytes::new(8)), errors[0].span);
    }
}

//! Recursive-descent acceptor for SimpleScript programs.
use log::debug;

use crate::{
    cursor::TokenCursor,
    lexer::tokens::{Token, TokenKind},
};

use super::error::*;

type ValidateResult = Result<(), ParseError>;

/// Checks that `tokens` form a syntactically valid program. The first
/// violation found is returned as an error.
pub fn validate(tokens: &[Token]) -> ValidateResult {
    Validator::new(tokens).program()
}

/// Returns whether `tokens` form a syntactically valid program.
pub fn is_well_formed(tokens: &[Token]) -> bool {
    match validate(tokens) {
        Ok(()) => true,
        Err(err) => {
            debug!("Program is not well-formed: {}", err);
            false
        }
    }
}

struct Validator<'a> {
    cursor: TokenCursor<'a>,
}

impl<'a> Validator<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
        }
    }

    fn program(&mut self) -> ValidateResult {
        while !self.cursor.is_finished() {
            self.statement()?;
        }
        Ok(())
    }

    fn statement(&mut self) -> ValidateResult {
        let next = self.cursor.next().add_stage(Stage::Statement)?;

        match (next.kind, next.text.as_str()) {
            (TokenKind::Keyword, "var") => self.var_decl(),
            (TokenKind::Keyword, "return") => self.return_stmt(),
            (TokenKind::Keyword, "if") | (TokenKind::Keyword, "while") => self.conditional(),
            (TokenKind::Identifier, _) => self.assignment(),
            _ => Err(ParseError::new(
                Stage::Statement,
                Reason::UnexpectedToken(next.clone()),
            )),
        }
    }

    /// `var IDENT = expression ;`
    fn var_decl(&mut self) -> ValidateResult {
        let stage = Stage::VarDecl;
        self.cursor.expect_kind(TokenKind::Identifier).add_stage(stage)?;
        self.cursor.expect(TokenKind::Operator, "=").add_stage(stage)?;
        self.expression()?;
        self.cursor.expect_delimiter(";").add_stage(stage)?;
        Ok(())
    }

    /// `return expression ;`
    fn return_stmt(&mut self) -> ValidateResult {
        self.expression()?;
        self.cursor.expect_delimiter(";").add_stage(Stage::Return)?;
        Ok(())
    }

    /// `( expression ) block`, shared by `if` and `while`.
    fn conditional(&mut self) -> ValidateResult {
        let stage = Stage::Conditional;
        self.cursor.expect_delimiter("(").add_stage(stage)?;
        self.expression()?;
        self.cursor.expect_delimiter(")").add_stage(stage)?;
        self.block()
    }

    /// `IDENT OPERATOR expression ;` (the identifier has already been read)
    fn assignment(&mut self) -> ValidateResult {
        let stage = Stage::Assignment;
        self.cursor.expect_kind(TokenKind::Operator).add_stage(stage)?;
        self.expression()?;
        self.cursor.expect_delimiter(";").add_stage(stage)?;
        Ok(())
    }

    /// `{ statement* }`
    fn block(&mut self) -> ValidateResult {
        self.cursor.expect_delimiter("{").add_stage(Stage::Block)?;
        while let Some(next) = self.cursor.peek() {
            if next.is_delimiter("}") {
                break;
            }
            self.statement()?;
        }
        self.cursor.expect_delimiter("}").add_stage(Stage::Block)?;
        Ok(())
    }

    /// `operand (OPERATOR operand)*`
    fn expression(&mut self) -> ValidateResult {
        self.operand()?;
        while self.cursor.expect_kind(TokenKind::Operator).is_ok() {
            self.operand()?;
        }
        Ok(())
    }

    fn operand(&mut self) -> Result<&'a Token, ParseError> {
        self.cursor
            .expect_where(|token| {
                matches!(
                    token.kind,
                    TokenKind::Number | TokenKind::String | TokenKind::Identifier
                )
            })
            .add_stage(Stage::Expression)
    }
}

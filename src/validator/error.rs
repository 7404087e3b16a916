//! Error handling for syntax validation.
use std::fmt;

use thiserror::Error;

use crate::{cursor::Unexpected, error::PositionalError, lexer::tokens::Token, span::Span};

/// A syntax error, indicating both the construct that was being validated when the
/// error was encountered and the cause for the error.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseError {
    stage: Stage,
    reason: Reason,
}

impl ParseError {
    pub fn new(stage: Stage, reason: Reason) -> Self {
        Self { stage, reason }
    }

    #[cfg(test)]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[cfg(test)]
    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} when parsing {}", self.reason, self.stage)
    }
}

impl std::error::Error for ParseError {}

impl PositionalError for ParseError {
    fn range(&self) -> Span {
        match &self.reason {
            Reason::UnexpectedToken(token) => token.source,
            Reason::UnexpectedEndOfInput(span) => *span,
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Reason {
    #[error("unexpected {0}")]
    UnexpectedToken(Token),
    #[error("unexpected end of input")]
    UnexpectedEndOfInput(Span),
}

impl From<Unexpected> for Reason {
    fn from(unexpected: Unexpected) -> Self {
        match unexpected {
            Unexpected::Token(token) => Reason::UnexpectedToken(token),
            Unexpected::EndOfInput(span) => Reason::UnexpectedEndOfInput(span),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The start of a statement.
    Statement,
    /// A `var` declaration.
    VarDecl,
    /// A `return` statement.
    Return,
    /// An `if` or `while` statement.
    Conditional,
    /// An assignment to an identifier.
    Assignment,
    /// A braced block of statements.
    Block,
    /// An operand or operator sequence.
    Expression,
}
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Stage::Statement => "a statement",
            Stage::VarDecl => "a variable declaration",
            Stage::Return => "a return statement",
            Stage::Conditional => "an 'if' or 'while' statement",
            Stage::Assignment => "an assignment",
            Stage::Block => "a block",
            Stage::Expression => "an expression",
        })
    }
}

pub trait AddStage {
    type Annotated;

    fn add_stage(self, stage: Stage) -> Self::Annotated;
}

impl<O> AddStage for Result<O, Unexpected> {
    type Annotated = Result<O, ParseError>;

    fn add_stage(self, stage: Stage) -> Self::Annotated {
        self.map_err(|unexpected| ParseError::new(stage, unexpected.into()))
    }
}

//! Errors raised while lowering a token stream to TAC.
use thiserror::Error;

use crate::{cursor::Unexpected, error::PositionalError, lexer::tokens::Token, span::Span};

use super::BinOp;

pub type GenResult<T> = Result<T, GenError>;

/// Construct a new error result.
pub fn error<S>(kind: GenErrorKind, span: Span) -> GenResult<S> {
    Err(GenError::new(kind, span))
}

/// A generation failure. Any error aborts the whole generation run.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct GenError {
    kind: GenErrorKind,
    span: Span,
}
impl GenError {
    pub fn new(kind: GenErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    #[cfg(test)]
    pub fn kind(&self) -> &GenErrorKind {
        &self.kind
    }
}
impl From<Unexpected> for GenError {
    fn from(unexpected: Unexpected) -> Self {
        match unexpected {
            Unexpected::Token(token) => {
                let span = token.source;
                Self::new(GenErrorKind::UnexpectedToken(token), span)
            }
            Unexpected::EndOfInput(span) => Self::new(GenErrorKind::UnexpectedEndOfInput, span),
        }
    }
}
impl PositionalError for GenError {
    fn range(&self) -> Span {
        self.span
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenErrorKind {
    #[error("incomplete expression: no operands")]
    IncompleteExpression,
    #[error("operator '{0}' is missing an operand")]
    MissingOperand(BinOp),
    #[error("incomplete conditional expression")]
    IncompleteCondition,
    #[error("'{0}' is not a comparison operator")]
    UnknownComparison(String),
    #[error("operator '{0}' cannot be used in an expression")]
    UnsupportedOperator(String),
    #[error("{0}")]
    UnbalancedBlock(Unbalanced),
    #[error("unexpected {0}")]
    UnexpectedToken(Token),
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Unbalanced {
    #[error("'}}' does not close any block")]
    UnexpectedClose,
    #[error("{0} block(s) left unclosed at end of input")]
    Unclosed(usize),
}

//! Errors produced while lexing.
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::{error::PositionalError, span::*};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorType {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unrecognised character '{0}'")]
    UnknownToken(char),
}

#[derive(Error, Debug)]
pub struct LexError {
    pub span: Span,
    pub error_type: ErrorType,
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error_type)
    }
}

impl PositionalError for LexError {
    fn range(&self) -> Span {
        self.span
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

//! Useful character extensions.
use super::tokens::{DELIMITERS, SINGLE_OPERATORS};

pub trait CharExt {
    fn is_linebreak(&self) -> bool;

    fn is_identifier_start(&self) -> bool;

    fn is_identifier_continue(&self) -> bool;

    fn is_operator(&self) -> bool;

    fn is_delimiter(&self) -> bool;

    fn is_not_linebreak(&self) -> bool {
        !self.is_linebreak()
    }
}
impl CharExt for char {
    fn is_linebreak(&self) -> bool {
        *self == '\n' || *self == '\r'
    }

    fn is_identifier_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '_'
    }

    fn is_identifier_continue(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_'
    }

    fn is_operator(&self) -> bool {
        SINGLE_OPERATORS.contains(self)
    }

    fn is_delimiter(&self) -> bool {
        DELIMITERS.contains(self)
    }
}

//! Checks that a token stream is a well-formed program, without building a tree.
mod error;
mod validator;

pub use validator::*;

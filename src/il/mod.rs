//! Intermediate code generation: lowering a token stream to three-address code.

mod blocks;
mod condition;
mod error;
mod expression;
mod fixity;
mod generator;
mod label_generator;
mod name_generator;
mod ops;
mod tac;

pub use generator::generate;
pub use ops::*;
pub use tac::*;

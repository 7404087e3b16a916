//! Operator precedence.
use super::BinOp;

pub type Precedence = u8;

/// The binding strength of a binary operator. Every operator is left
/// associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixity {
    precedence: Precedence,
}

impl Fixity {
    /// `*` and `/` bind tightest, then `+` and `-`. Comparisons bind loosest, so
    /// that `a + 1 > b` compares the sum.
    pub fn for_binop(op: BinOp) -> Self {
        let precedence = match op {
            BinOp::Multiply | BinOp::Divide => 2,
            BinOp::Add | BinOp::Subtract => 1,
            BinOp::Cmp(_) => 0,
        };
        Self { precedence }
    }

    /// Assuming `self` is found in left-hand position, and `rhs` is found in right-hand position,
    /// returns whether `self` must be reduced before `rhs`.
    pub fn precedes_rhs(&self, rhs: &Fixity) -> bool {
        self.precedence >= rhs.precedence
    }
}

//! Three-Address Code

use std::fmt::{self, Display, Formatter};

use crate::listing::Listing;

use super::ops::{BinOp, CmpOp};

/// The output of a generation run: TAC instructions in program order.
pub type TacProgram = Listing<TacInstr>;

/// A label which can be jumped to, rendered as `L<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(usize);
impl Label {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.0
    }
}
impl Display for Label {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A single TAC instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TacInstr {
    /// Assign a value to a name.
    Assign(Name, Value),
    /// Perform a binary operation, storing the result in a name.
    Bin(Name, BinOp, Value, Value),
    /// A label which can be jumped to.
    Label(Label),
    /// Jump to a label.
    Goto(Label),
    /// Jump if a condition holds.
    IfGoto(Condition, Label),
    /// Jump if a condition does not hold.
    IfNotGoto(Condition, Label),
}
#[cfg(test)]
impl TacInstr {
    /// The name this instruction assigns to, if any.
    pub fn write(&self) -> Option<&Name> {
        match self {
            Self::Assign(target, _) => Some(target),
            Self::Bin(target, _, _, _) => Some(target),
            Self::Label(_) => None,
            Self::Goto(_) => None,
            Self::IfGoto(_, _) => None,
            Self::IfNotGoto(_, _) => None,
        }
    }

    /// The label this instruction may jump to, if any.
    pub fn jump_target(&self) -> Option<Label> {
        match self {
            Self::Goto(lbl) | Self::IfGoto(_, lbl) | Self::IfNotGoto(_, lbl) => Some(*lbl),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<Label> {
        match self {
            Self::Label(lbl) => Some(*lbl),
            _ => None,
        }
    }
}
impl Display for TacInstr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Assign(target, value) => write!(f, "{} = {}", target, value),
            Self::Bin(target, op, lhs, rhs) => {
                write!(f, "{} = {} {} {}", target, lhs, op, rhs)
            }
            Self::Label(lbl) => write!(f, "{}:", lbl),
            Self::Goto(lbl) => write!(f, "goto {}", lbl),
            Self::IfGoto(cond, lbl) => write!(f, "if {} goto {}", cond, lbl),
            Self::IfNotGoto(cond, lbl) => write!(f, "if not {} goto {}", cond, lbl),
        }
    }
}

/// A comparison between two values, used by conditional jumps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub lhs: Value,
    pub op: CmpOp,
    pub rhs: Value,
}
impl Display for Condition {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

/// A TAC name. Names are symbolic addresses and may represent variables in the
/// source code, or intermediate values of expressions that have been broken down.
///
/// Temporaries are assigned exactly once. Variables keep their source name and
/// may be assigned any number of times.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Name {
    /// A variable from the source program.
    Var(String),
    /// A generated, temporary name.
    Temp(usize),
}
impl Display for Name {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Name::Var(var) => f.write_str(var),
            Name::Temp(temp) => write!(f, "t{}", temp),
        }
    }
}

/// A TAC value. Values are either literal constants, or references to names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A number or string literal, kept as written in the source.
    Const(String),
    /// A name, representing either a temporary or a variable in the source program.
    Name(Name),
}
impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Value::Const(lit) => f.write_str(lit),
            Value::Name(name) => name.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Name {
        Name::Var(name.to_string())
    }

    fn cond() -> Condition {
        Condition {
            lhs: Value::Name(var("x")),
            op: CmpOp::Gt,
            rhs: Value::Const("5".to_string()),
        }
    }

    #[test]
    fn instructions_render_canonically() {
        let instrs = [
            TacInstr::Assign(var("x"), Value::Name(Name::Temp(1))),
            TacInstr::Bin(
                Name::Temp(1),
                BinOp::Add,
                Value::Const("10".to_string()),
                Value::Name(var("y")),
            ),
            TacInstr::Label(Label::new(1)),
            TacInstr::Goto(Label::new(2)),
            TacInstr::IfGoto(cond(), Label::new(1)),
            TacInstr::IfNotGoto(cond(), Label::new(2)),
        ];

        let rendered: Vec<_> = instrs.iter().map(ToString::to_string).collect();

        assert_eq!(
            vec![
                "x = t1",
                "t1 = 10 + y",
                "L1:",
                "goto L2",
                "if x > 5 goto L1",
                "if not x > 5 goto L2",
            ],
            rendered
        );
    }

    #[test]
    fn write_returns_assigned_name() {
        let instr = TacInstr::Bin(
            Name::Temp(3),
            BinOp::Multiply,
            Value::Const("2".to_string()),
            Value::Const("4".to_string()),
        );

        assert_eq!(Some(&Name::Temp(3)), instr.write());
        assert_eq!(None, TacInstr::Goto(Label::new(1)).write());
    }

    #[test]
    fn jump_target_covers_all_jumps() {
        assert_eq!(Some(Label::new(4)), TacInstr::Goto(Label::new(4)).jump_target());
        assert_eq!(
            Some(Label::new(5)),
            TacInstr::IfNotGoto(cond(), Label::new(5)).jump_target()
        );
        assert_eq!(None, TacInstr::Label(Label::new(4)).jump_target());
    }
}

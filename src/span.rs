//! Contains the [`Bytes`] and [`Span`] types, which describe source code positions.
use std::{
    fmt::{self, Debug, Display},
    ops::{Add, AddAssign, Sub},
};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct Bytes(usize);
impl Bytes {
    pub fn new(pos: usize) -> Self {
        Self(pos)
    }
}
impl Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<Bytes> for usize {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}
impl AddAssign<usize> for Bytes {
    fn add_assign(&mut self, rhs: usize) {
        *self = Self(self.0 + rhs)
    }
}
impl Add<usize> for Bytes {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}
impl Sub<Bytes> for Bytes {
    type Output = Self;

    fn sub(self, rhs: Bytes) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// A half-open byte range in the source code.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: Bytes,
    end: Bytes,
}
impl Span {
    pub fn new(start: Bytes, end: Bytes) -> Self {
        Self { start, end }
    }

    /// An empty span at the start of the source. Used for tokens that were not
    /// produced by the lexer.
    pub fn zero() -> Self {
        Self::new(Bytes::new(0), Bytes::new(0))
    }

    /// An empty span directly after this one.
    pub fn after(&self) -> Self {
        Self::new(self.end, self.end)
    }

    #[cfg(test)]
    pub fn length(&self) -> Bytes {
        self.end - self.start
    }

    pub fn start(&self) -> Bytes {
        self.start
    }

    /// The text covered by this span, if it lies within `target`.
    pub fn lookup<'t>(&self, target: &'t str) -> Option<&'t str> {
        target.get(usize::from(self.start)..usize::from(self.end))
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

use std::fmt::{self, Display, Formatter};

#[cfg(test)]
use std::slice::Iter;

/// An ordered sequence of lines. Lines can only be appended; once pushed, a line
/// is never moved or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<T> {
    lines: Vec<T>,
}

impl<T> Listing<T> {
    pub fn new() -> Self {
        Self { lines: vec![] }
    }

    pub fn push(&mut self, line: T) {
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub fn iter_instructions(&self) -> Iter<T> {
        self.lines.iter()
    }

    #[cfg(test)]
    pub fn into_vec(self) -> Vec<T> {
        self.lines
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
impl<T: Display> Display for Listing<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

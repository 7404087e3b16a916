use super::Name;

/// Hands out temporary names. Each generation run owns its own generator, so
/// numbering always restarts at `t1`.
pub struct NameGenerator {
    index: usize,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Generates a new unique temporary name.
    pub fn next_temp(&mut self) -> Name {
        self.index += 1;
        Name::Temp(self.index)
    }

    /// Number of temporaries handed out so far.
    pub fn count(&self) -> usize {
        self.index
    }
}

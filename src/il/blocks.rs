//! Tracking of open control-flow blocks.
use super::Label;

/// A block that has been opened by `if` or `while`, and is waiting for its
/// closing brace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenBlock {
    /// The body of an `if`. Closing it emits the end label.
    IfEnd(Label),
    /// The body of a `while`. Closing it jumps back to `start`, then emits `end`.
    While { start: Label, end: Label },
}

/// The label stack. Blocks are closed in the reverse order they were opened,
/// which is all the nesting information the generator needs.
#[derive(Debug, Default)]
pub struct BlockStack {
    open: Vec<OpenBlock>,
}
impl BlockStack {
    pub fn new() -> Self {
        Self { open: vec![] }
    }

    pub fn open(&mut self, block: OpenBlock) {
        self.open.push(block);
    }

    /// Closes the innermost open block. Returns [`None`] if no block is open.
    pub fn close(&mut self) -> Option<OpenBlock> {
        self.open.pop()
    }

    /// Number of blocks that are currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_close_innermost_first() {
        let mut blocks = BlockStack::new();
        let outer = OpenBlock::IfEnd(Label::new(2));
        let inner = OpenBlock::While {
            start: Label::new(3),
            end: Label::new(4),
        };

        blocks.open(outer);
        blocks.open(inner);

        assert_eq!(2, blocks.depth());
        assert_eq!(Some(inner), blocks.close());
        assert_eq!(Some(outer), blocks.close());
        assert_eq!(None, blocks.close());
    }
}

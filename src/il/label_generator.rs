use super::Label;

/// Hands out labels, numbered independently from temporaries.
pub struct LabelGenerator {
    index: usize,
}
impl LabelGenerator {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Generates a new unique label.
    pub fn next_label(&mut self) -> Label {
        self.index += 1;
        Label::new(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_label_generates_ascending_labels() {
        let mut lbl_gen = LabelGenerator::new();

        assert_eq!("L1", lbl_gen.next_label().to_string());
        assert_eq!("L2", lbl_gen.next_label().to_string());
    }
}

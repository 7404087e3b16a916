//! Functionality for looking up the source line that contains a byte position.
use crate::span::{Bytes, Span};

/// Finds the line containing `target_position`. Positions past the end of the
/// source resolve to the last line, so that "unexpected end of input" errors can
/// point just past the final token.
pub fn find_line(source: &str, target_position: Bytes) -> LineContext {
    let mut position = Bytes::new(0);
    let mut context = LineContext {
        source: "",
        range: Span::zero(),
        line_no: 1,
    };

    for (line_idx, line) in split_lines_inclusive(source).into_iter().enumerate() {
        let end_position = position + line.len();
        context = LineContext {
            source: line,
            range: Span::new(position, end_position),
            line_no: line_idx + 1,
        };
        if target_position >= position && target_position < end_position {
            break;
        }
        position = end_position;
    }

    context
}

/// Splits a string into lines, keeping the line terminators. `\r\n`, `\n` and
/// a lone `\r` all end a line.
fn split_lines_inclusive(source: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut start = 0;
    let mut position = 0;

    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        position += ch.len_utf8();

        if ch == '\n' || (ch == '\r' && chars.peek() != Some(&'\n')) {
            lines.push(&source[start..position]);
            start = position;
        }
    }
    lines.push(&source[start..position]);

    lines
}

/// A single line of the program, along with its line number and byte range.
pub struct LineContext<'a> {
    source: &'a str,
    range: Span,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(&['\r', '\n'], "")
    }

    pub fn range(&self) -> Span {
        self.range
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_line_in_empty_source() {
        let context = find_line("", Bytes::new(0));

        assert_eq!(context.line_no(), 1);
        assert_eq!(context.range(), Span::zero());
        assert_eq!(context.for_display(), "");
    }

    #[test]
    fn find_line_on_second_line() {
        let context = find_line("var x = 1;\nx = 2;", Bytes::new(12));

        assert_eq!(context.line_no(), 2);
        assert_eq!(context.range(), Span::new(Bytes::new(11), Bytes::new(17)));
        assert_eq!(context.for_display(), "x = 2;");
    }

    #[test]
    fn find_line_past_end_resolves_to_last_line() {
        let context = find_line("a\nbc", Bytes::new(4));

        assert_eq!(context.line_no(), 2);
        assert_eq!(context.for_display(), "bc");
    }

    #[test]
    fn split_lines_mixed_endings() {
        let lines = split_lines_inclusive("abc\r\nd\r\n\ne\rf");

        assert_eq!(vec!["abc\r\n", "d\r\n", "\n", "e\r", "f"], lines)
    }
}

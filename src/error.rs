use std::iter;

use crate::{source_map::find_line, span::Span};

/// An error that can be traced back to a range in the source code.
pub trait PositionalError {
    fn range(&self) -> Span;
    fn describe(&self) -> String;
}

/// Renders an error underneath the source line it refers to:
///
/// ```text
/// 3| while (x <) {
///  |           ^ unexpected delimiter ')' when lowering a condition
/// ```
pub fn describe_error(err: &dyn PositionalError, source: &str) -> String {
    let range = err.range();
    let line = find_line(source, range.start());

    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let line_start = Span::new(line.range().start(), range.start());
    let padding = line_start.lookup(source).map_or(0, |text| text.chars().count());
    let width = range.lookup(source).map_or(0, |text| text.chars().count());
    let gutter = line.line_no().to_string();

    format!(
        "{}| {}\n{}| {}{} {}",
        gutter,
        line.for_display(),
        pad_char(' ', gutter.len()),
        pad_char(' ', padding),
        pad_char('^', width.max(1)),
        err.describe()
    )
}

//! This module contains some functions that will help us managing strings.

use crate::parser::Position;

/// Replicates a char n times.
pub fn replicate(c: char, n: usize) -> String {
    std::iter::repeat(c).take(n).collect()
}

/// Returns true if the char at specified byte is a \n.
pub fn is_new_line(content: &str, byte: usize) -> bool {
    content.as_bytes().get(byte) == Some(&b'\n')
}

/// Computes the column of a specified byte depending on its line and offset.
pub fn compute_column(content: &str, start: usize, current: usize) -> usize {
    content[start..current].chars().count()
}

/// Finds the start of the line containing the byte.
///
/// Returns 0 is no \n was found.
pub fn previous_new_line(content: &str, byte: usize) -> usize {
    content[..byte.min(content.len())]
        .rfind('\n')
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Finds the next \n char.
///
/// Returns the length of the string if no \n was found.
pub fn next_new_line(content: &str, byte: usize) -> usize {
    let mut i = byte.min(content.len());

    while i != content.len() && !is_new_line(content, i) {
        i += 1;
    }

    i
}

/// Computes the position of a byte offset in some content.
///
/// Lines and columns start at 1, like the ones from a [`Span`](crate::parser::Span).
///
/// ```
/// # use penscript::parser::utils::locate;
/// let position = locate("first\nsecond", 9);
/// assert_eq!(position.line, 2);
/// assert_eq!(position.column, 4);
/// ```
pub fn locate(content: &str, offset: usize) -> Position {
    let offset = offset.min(content.len());
    let start = previous_new_line(content, offset);

    Position {
        line: content[..start].matches('\n').count() as u32 + 1,
        column: compute_column(content, start, offset) + 1,
        offset,
    }
}

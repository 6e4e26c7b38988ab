//! Line Navigation
//!
//! Resolves a 1-based line number to the character offset of that line's
//! first character. Lines are delimited by `\n`; a trailing line break
//! addresses an empty final line whose offset is the end of the buffer.

use thiserror::Error;

/// Go-to-line failures, both reportable to the user rather than fatal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GotoLineError {
    /// The input is not a parseable integer
    #[error("invalid line number")]
    InvalidNumber,
    /// The line number is outside `[1, line_count]`
    #[error("line number out of range")]
    OutOfRange,
}

/// Total number of lines in the buffer
///
/// Line breaks + 1, so the empty buffer has one line and `"a\n"` has two.
/// Consistent with [`crate::buffer::TextBuffer::line_count`].
pub fn line_count(buffer: &str) -> usize {
    buffer.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Char offset of the first character of a 1-based line
pub fn line_start_offset(buffer: &str, line: usize) -> Result<usize, GotoLineError> {
    if line == 0 || line > line_count(buffer) {
        return Err(GotoLineError::OutOfRange);
    }
    if line == 1 {
        return Ok(0);
    }

    let mut newlines = 0;
    for (idx, ch) in buffer.chars().enumerate() {
        if ch == '\n' {
            newlines += 1;
            if newlines == line - 1 {
                return Ok(idx + 1);
            }
        }
    }

    // Unreachable: the range check above guarantees enough line breaks
    Err(GotoLineError::OutOfRange)
}

/// Resolve raw go-to-line input to a char offset
///
/// Parses the user's input, then range-checks it against the buffer. The
/// buffer is never mutated; the caller positions the caret at the returned
/// offset.
pub fn goto_line(buffer: &str, input: &str) -> Result<usize, GotoLineError> {
    let line: i64 = input
        .trim()
        .parse()
        .map_err(|_| GotoLineError::InvalidNumber)?;

    if line < 1 || line as usize > line_count(buffer) {
        return Err(GotoLineError::OutOfRange);
    }

    line_start_offset(buffer, line as usize)
}

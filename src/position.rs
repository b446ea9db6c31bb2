//! Line/column coordinates and their mapping onto flat byte offsets.
//!
//! Editors address text by zero-based line and UTF-16 column, while tree-sitter nodes carry byte
//! offsets. The `LineIndex` records where each line's content starts and ends so that both
//! directions of the mapping are a binary search plus a scan of a single line. Line terminators
//! (`\n`, `\r\n` and a lone `\r`) never belong to a line's content, which keeps a position at the
//! end of a line and the offset of its terminator in one-to-one correspondence.

use serde::Serialize;
use std::ops;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Zero-based line and UTF-16 column, the coordinate system editors report cursors in.
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column counted in UTF-16 code units.
    pub character: u32,
}

impl Position {
    #[must_use]
    /// Creates a position from a line and a UTF-16 column.
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
/// Half-open range between two positions.
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    #[must_use]
    /// Creates a range, swapping the endpoints if they arrive reversed.
    pub fn new(start: Position, end: Position) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    #[must_use]
    /// A zero-width range sitting at `position`.
    pub const fn cursor(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    #[must_use]
    /// Whether the range is a bare cursor.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    /// Whether `other` lies entirely within this range.
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.character, self.end.line, self.end.character
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LineSpan {
    /// Offset of the first byte of the line.
    start: usize,
    /// Offset of the line terminator, or of the end of text on the last line.
    end: usize,
}

#[derive(Clone, Debug)]
/// Bidirectional mapping between byte offsets and editor positions for one text snapshot.
///
/// The index does not own the text; every lookup takes the same text it was built from.
pub struct LineIndex {
    lines: Vec<LineSpan>,
    len: usize,
}

impl LineIndex {
    #[must_use]
    /// Records the content span of every line in `text`.
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut lines = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    lines.push(LineSpan { start, end: i });
                    i += 1;
                    start = i;
                }
                b'\r' => {
                    lines.push(LineSpan { start, end: i });
                    i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                    start = i;
                }
                _ => i += 1,
            }
        }
        lines.push(LineSpan {
            start,
            end: bytes.len(),
        });

        Self {
            lines,
            len: bytes.len(),
        }
    }

    #[must_use]
    /// Number of lines, counting the (possibly empty) line after a trailing terminator.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// Byte span of a line's content, excluding its terminator.
    pub fn line_span(&self, line: usize) -> Option<ops::Range<usize>> {
        self.lines.get(line).map(|span| span.start..span.end)
    }

    #[must_use]
    /// Converts a position to a byte offset.
    ///
    /// Lines past the end clamp to the end of the text and columns past the end of a line clamp
    /// to that line's terminator. A column landing inside a surrogate pair moves to the next
    /// character boundary.
    pub fn offset(&self, text: &str, position: Position) -> usize {
        let Some(span) = self.lines.get(position.line as usize) else {
            return self.len;
        };

        let target = position.character as usize;
        let mut units = 0;
        for (i, ch) in text[span.start..span.end].char_indices() {
            if units >= target {
                return span.start + i;
            }
            units += ch.len_utf16();
        }
        span.end
    }

    #[must_use]
    /// Converts a byte offset to a position, the inverse of [`LineIndex::offset`].
    ///
    /// Offsets beyond the text clamp to its end; offsets inside a line terminator clamp to the
    /// end of that line.
    pub fn position(&self, text: &str, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = match self.lines.binary_search_by(|span| span.start.cmp(&offset)) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };
        let span = self.lines[line];

        let mut end = offset.min(span.end);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let character = text[span.start..end].encode_utf16().count();

        Position {
            line: u32::try_from(line).unwrap_or(u32::MAX),
            character: u32::try_from(character).unwrap_or(u32::MAX),
        }
    }

    #[must_use]
    /// Converts a range to the byte offsets it covers.
    pub fn byte_range(&self, text: &str, range: Range) -> ops::Range<usize> {
        self.offset(text, range.start)..self.offset(text, range.end)
    }

    #[must_use]
    /// Converts a pair of byte offsets to a range.
    pub fn range(&self, text: &str, start: usize, end: usize) -> Range {
        Range::new(self.position(text, start), self.position(text, end))
    }
}

#[cfg(test)]
#[path = "tests/position.rs"]
mod tests;

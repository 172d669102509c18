//! Position tracking for cursor requests
//!
//! Hosts address the document by line/column; the resolution layers work on
//! byte offsets into the text up to the cursor.

/// A position in source code (0-indexed, column counted in chars)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Convert this position to a byte offset into `text`.
    ///
    /// Columns past the end of a line clamp to the line end, lines past the
    /// end of the text clamp to the text end.
    pub fn to_offset(self, text: &str) -> usize {
        let mut line_start = 0;
        for _ in 0..self.line {
            match text[line_start..].find('\n') {
                Some(idx) => line_start += idx + 1,
                None => return text.len(),
            }
        }

        let line = &text[line_start..];
        let line_len = line.find('\n').unwrap_or(line.len());
        let column = line[..line_len]
            .char_indices()
            .nth(self.column)
            .map(|(idx, _)| idx)
            .unwrap_or(line_len);

        line_start + column
    }

    /// Text from the start of the document up to this position.
    pub fn prefix_of(self, text: &str) -> &str {
        &text[..self.to_offset(text)]
    }

    /// Text from the start of this position's line up to this position.
    pub fn line_prefix_of(self, text: &str) -> &str {
        let prefix = self.prefix_of(text);
        match prefix.rfind('\n') {
            Some(idx) => &prefix[idx + 1..],
            None => prefix,
        }
    }
}

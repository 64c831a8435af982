use lurry_ir::Position;

/// Maps byte offsets to line/column positions.
///
/// Column rules: the first line starts at column 0; a `\n` opens the next
/// line at column 0, so the following byte sits at column 1.
pub struct LineIndex {
    /// Byte offsets of every `\n`.
    newlines: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let newlines = source
            .bytes()
            .enumerate()
            .filter_map(|(i, b)| (b == b'\n').then_some(i))
            .collect();
        LineIndex {
            newlines,
            len: source.len(),
        }
    }

    /// Position of the byte at `offset`.
    pub fn position(&self, offset: usize) -> Position {
        let before = self.newlines.partition_point(|&nl| nl < offset);
        let is_newline = self.newlines.get(before) == Some(&offset);
        if is_newline {
            return Position::new(to_u32(before + 2), 0);
        }
        let column = match before {
            0 => offset,
            n => offset - self.newlines[n - 1],
        };
        Position::new(to_u32(before + 1), to_u32(column))
    }

    /// Position of the last byte of the source.
    pub fn end_position(&self) -> Position {
        self.position(self.len.saturating_sub(1))
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

//! Source positions.

use std::fmt;

/// A line/column location in template source.
///
/// Lines are 1-based. Columns are byte offsets within the line; the first
/// line starts at column 0, and a newline character occupies column 0 of
/// the line it opens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of sentinel tokens (`EOF`) and synthesized nodes.
    pub const NONE: Position = Position { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Whether this is the sentinel position.
    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
    }

    #[test]
    fn test_none() {
        assert!(Position::NONE.is_none());
        assert!(!Position::new(1, 0).is_none());
    }

    #[test]
    fn test_ordering_is_line_major() {
        assert!(Position::new(1, 40) < Position::new(2, 0));
        assert!(Position::new(2, 1) < Position::new(2, 5));
    }
}

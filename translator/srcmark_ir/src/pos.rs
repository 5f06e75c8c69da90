//! Source positions.
//!
//! Positions are 1-based line/column pairs measured against the original
//! character stream after line-ending normalization (CRLF collapsed to a
//! single LF). Synthesized tokens carry the position where the structural
//! event is deemed to occur, which is not always where it was detected.

use std::fmt;

/// A 1-based line/column source position.
///
/// Layout: 8 bytes total. Cheap to copy; every token carries one.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Pos {
    pub line: u32,
    pub column: u32,
}

impl Pos {
    /// Dummy position for synthesized tokens in tests.
    pub const DUMMY: Pos = Pos { line: 0, column: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Pos { line, column }
    }

    /// The same line, column 1. Zero-width synthetic markers (statement
    /// terminators, block ends) are placed here by convention.
    #[inline]
    #[must_use]
    pub const fn at_column_one(self) -> Self {
        Pos {
            line: self.line,
            column: 1,
        }
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;

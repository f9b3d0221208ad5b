//! # Source Positions
//!
//! Byte, line and column tracking for the scanner and diagnostics.
//!
//! ## Example
//!
//! ```rust
//! use exprtree::span::Position;
//!
//! let pos = Position::new(4, 1, 2);
//! assert_eq!(pos.line_number(), 2);
//! ```

use serde::Serialize;

/// A location in the source text.
///
/// `line` and `column` are 0-indexed; use [`Position::line_number`] for the
/// 1-based value shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Line (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }

    /// Start of the source.
    pub const fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    /// 1-based line number for diagnostics.
    pub const fn line_number(&self) -> usize {
        self.line + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_zero() {
        let pos = Position::zero();
        assert_eq!(pos, Position::default());
        assert_eq!(pos.line_number(), 1);
    }

    #[test]
    fn test_position_line_number() {
        assert_eq!(Position::new(10, 3, 0).line_number(), 4);
    }
}

//! # Character Cursor
//!
//! Peekable character cursor for the scanner.
//! Tracks position (byte, line, column) as it advances and can step back
//! over the most recently consumed character.
//!
//! ## Example
//!
//! ```rust
//! use exprtree::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("12");
//! assert_eq!(cursor.advance(), Some('1'));
//! cursor.backup();
//! assert_eq!(cursor.peek(), Some('1'));
//! ```

use crate::span::Position;

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking and one-unit backup.
///
/// ## Example
///
/// ```rust
/// use exprtree::lexer::Cursor;
///
/// let mut cursor = Cursor::new("1+2");
/// assert_eq!(cursor.advance(), Some('1'));
/// assert_eq!(cursor.position().byte, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current position.
    position: Position,
    /// Position before the last advance, cleared once used.
    previous: Option<Position>,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: Position::zero(),
            previous: None,
        }
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Get current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Check if at end of input.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use exprtree::lexer::Cursor;
    ///
    /// assert!(Cursor::new("").is_eof());
    /// ```
    pub fn is_eof(&self) -> bool {
        self.position.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.position.byte..].chars().next()
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at EOF. Advancing at EOF
    /// leaves nothing to back up over.
    pub fn advance(&mut self) -> Option<char> {
        let Some(c) = self.peek() else {
            self.previous = None;
            return None;
        };

        self.previous = Some(self.position);
        self.position.byte += c.len_utf8();

        if c == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }

        Some(c)
    }

    /// Step back over the last consumed character.
    ///
    /// Only one step is remembered; a second call without an intervening
    /// [`Cursor::advance`] does nothing.
    pub fn backup(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.position = previous;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_empty() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_cursor_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.position().byte, 1);
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_backup_once() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        cursor.advance();
        cursor.backup();
        assert_eq!(cursor.peek(), Some('b'));
        cursor.backup();
        assert_eq!(cursor.peek(), Some('b'));
    }

    #[test]
    fn test_cursor_backup_after_eof_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        assert_eq!(cursor.advance(), None);
        cursor.backup();
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_backup_over_newline() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position().line, 1);
        cursor.backup();
        assert_eq!(cursor.position().line, 0);
        assert_eq!(cursor.position().column, 1);
    }

    #[test]
    fn test_cursor_utf8() {
        let mut cursor = Cursor::new("é");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position().byte, 2);
        cursor.backup();
        assert_eq!(cursor.position().byte, 0);
    }
}

//! # Scanner
//!
//! Character-level scanning for expression source.
//!
//! The parser never sees a token stream: it pulls characters through the
//! [`ScanSource`] contract, marks the start of each lexeme, and commits the
//! text once the lexeme is complete. [`Scanner`] implements the contract over
//! a `&str`.
//!
//! ## Example
//!
//! ```rust
//! use exprtree::lexer::{ScanSource, Scanner};
//!
//! let mut scanner = Scanner::new("12+3");
//! scanner.advance();
//! scanner.advance();
//! assert_eq!(scanner.commit(), "12");
//! assert_eq!(scanner.peek(), Some('+'));
//! ```

mod cursor;

pub use cursor::Cursor;

use crate::token::BinaryOperator;

// =============================================================================
// SCAN SOURCE
// =============================================================================

/// The lexer contract consumed by the parser.
///
/// Text between the mark and the current position is the pending lexeme.
/// [`ScanSource::commit`] returns it and moves the mark; [`ScanSource::ignore`]
/// moves the mark without returning anything.
pub trait ScanSource {
    /// Consume and return the next character, or `None` at end of input.
    fn advance(&mut self) -> Option<char>;

    /// Step back over the last consumed character (one unit only).
    fn backup(&mut self);

    /// Look at the next character without consuming it.
    fn peek(&self) -> Option<char>;

    /// Return the text from the mark to the current position and move the
    /// mark to the current position.
    fn commit(&mut self) -> String;

    /// Drop the pending text by moving the mark to the current position.
    fn ignore(&mut self);

    /// 1-based line of the current position.
    fn line_number(&self) -> usize;

    /// True once every character has been consumed.
    fn is_eof(&self) -> bool;
}

// =============================================================================
// SCANNER
// =============================================================================

/// [`ScanSource`] over an in-memory string.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Byte offset where the pending lexeme starts.
    mark: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            mark: 0,
        }
    }
}

impl ScanSource for Scanner<'_> {
    fn advance(&mut self) -> Option<char> {
        self.cursor.advance()
    }

    fn backup(&mut self) {
        self.cursor.backup();
    }

    fn peek(&self) -> Option<char> {
        self.cursor.peek()
    }

    fn commit(&mut self) -> String {
        let end = self.cursor.position().byte;
        let text = self
            .cursor
            .source()
            .get(self.mark..end)
            .unwrap_or_default()
            .to_string();
        self.mark = end;
        text
    }

    fn ignore(&mut self) {
        self.mark = self.cursor.position().byte;
    }

    fn line_number(&self) -> usize {
        self.cursor.position().line_number()
    }

    fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }
}

// =============================================================================
// LEXEME CLASSES
// =============================================================================

/// Classification of the lexeme starting at a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeClass {
    /// Numeric literal: digit or leading `.`
    Number,
    /// Identifier or function name
    Identifier,
    /// One of `+ - * /`
    Operator(BinaryOperator),
    /// `(`
    OpenBracket,
    /// `)`
    CloseBracket,
    /// `,` between call arguments
    Separator,
    /// `"` or `'`
    Quote,
    /// Whitespace between lexemes
    Whitespace,
    /// End of input
    Eof,
    /// Anything else
    Unknown(char),
}

impl LexemeClass {
    /// Classify the lexeme that starts with `c`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use exprtree::lexer::LexemeClass;
    ///
    /// assert_eq!(LexemeClass::of(Some('7')), LexemeClass::Number);
    /// assert_eq!(LexemeClass::of(None), LexemeClass::Eof);
    /// ```
    pub fn of(c: Option<char>) -> Self {
        let Some(c) = c else {
            return Self::Eof;
        };
        if let Some(op) = BinaryOperator::from_symbol(c) {
            return Self::Operator(op);
        }
        match c {
            '0'..='9' | '.' => Self::Number,
            '(' => Self::OpenBracket,
            ')' => Self::CloseBracket,
            ',' => Self::Separator,
            '"' | '\'' => Self::Quote,
            c if is_identifier_start(c) => Self::Identifier,
            c if c.is_whitespace() => Self::Whitespace,
            c => Self::Unknown(c),
        }
    }
}

/// First character of an identifier.
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Any later character of an identifier.
pub fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Any character of a numeric literal after the first.
pub fn is_number_continue(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

// =============================================================================
// TESTS
// =============================================================================

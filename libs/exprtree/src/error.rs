//! # Parse Errors
//!
//! Error types for the expression parser.
//!
//! ## Example
//!
//! ```rust
//! use exprtree::error::{ParseError, ParseErrorKind};
//!
//! let error = ParseError::new(ParseErrorKind::UnclosedGroup, 1, "(1+2");
//! assert_eq!(
//!     error.to_string(),
//!     "Line: 1, near \"(1+2\", Error: brackets not closed"
//! );
//! ```

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse failure with the source context it happened in.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("Line: {line}, near {context:?}, Error: {kind}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// 1-based line of the failure.
    pub line: usize,
    /// Source text around the failure.
    pub context: String,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, line: usize, context: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            context: context.into(),
        }
    }
}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// An operator without a value on one side, e.g. `+1` or `1+`.
    #[error("{detail}")]
    MissingOperand {
        /// Which side is missing and for which operator.
        detail: String,
    },

    /// `(` without `)`, or `)` without `(`.
    #[error("brackets not closed")]
    UnclosedGroup,

    /// Quoted text that runs to the end of input.
    #[error("missing quote at end of text")]
    UnterminatedString,

    /// Numeric literal that does not convert.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Any other malformed lexeme sequence.
    #[error("{message}")]
    SyntaxError {
        /// Description of the problem.
        message: String,
    },
}

impl ParseErrorKind {
    /// No value before `operator`.
    pub fn missing_left(operator: char) -> Self {
        Self::MissingOperand {
            detail: format!("expecting a value before operator '{operator}'"),
        }
    }

    /// No value after `operator`.
    pub fn missing_right(operator: char) -> Self {
        Self::MissingOperand {
            detail: format!("expecting a value after operator '{operator}'"),
        }
    }

    /// Catch-all syntax error.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::SyntaxError {
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

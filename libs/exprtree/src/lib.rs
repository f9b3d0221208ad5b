//! # Expression Tree Parser
//!
//! Builds parse trees for arithmetic expressions in a single pass.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Scanner → Parser (state machine) → Tree
//!                            │
//!                            ├─ operators: precedence by rotation
//!                            ├─ groups: ( ... ) and call scopes
//!                            └─ diagnostics: first error wins
//! ```
//!
//! The tree is re-shaped as each operator arrives: a tighter operator wraps
//! the last operand, a looser one climbs back up first. No second pass
//! rebuilds the tree.
//!
//! ## Example
//!
//! ```rust
//! use exprtree::{parse, BinaryOperator, Token};
//!
//! let result = parse("1 + 2 * 3");
//! assert!(result.is_ok());
//!
//! let tree = &result.tree;
//! let plus = result.expression().unwrap();
//! assert_eq!(tree.token(plus), &Token::BinaryOperator(BinaryOperator::Add));
//! let times = tree.children(plus)[1];
//! assert_eq!(tree.token(times), &Token::BinaryOperator(BinaryOperator::Mul));
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;
pub mod tree;

// Re-export public API
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{ScanSource, Scanner};
pub use parser::{ParseResult, Parser, State};
pub use token::{BinaryOperator, GroupType, Token, TokenCategory};
pub use tree::{NodeId, Tree};

use config::constants::ParserConfig;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse an expression into a tree.
///
/// The tree is always returned. Its root holds [`Token::Empty`] and its
/// first child, if any, is the expression. On failure the tree also holds
/// one [`Token::Error`] node and `error` describes the failure.
///
/// ## Parameters
///
/// - `source`: Expression text, possibly spanning several lines
///
/// ## Returns
///
/// [`ParseResult`] holding the tree and the first error, if any.
///
/// ## Example
///
/// ```rust
/// let result = exprtree::parse("(1 + 2");
/// assert!(!result.is_ok());
/// println!("{}", result.error.unwrap());
/// ```
pub fn parse(source: &str) -> ParseResult {
    parse_with_config(source, &ParserConfig::default())
}

/// Parse with explicit limits.
///
/// ## Parameters
///
/// - `source`: Expression text
/// - `config`: Error context window, call nesting and tree height limits
///
/// ## Example
///
/// ```rust
/// use config::constants::ParserConfig;
///
/// let config = ParserConfig::default().with_max_depth(2).unwrap();
/// let result = exprtree::parse_with_config("1 + 2 + 3", &config);
/// assert!(!result.is_ok());
/// ```
pub fn parse_with_config(source: &str, config: &ParserConfig) -> ParseResult {
    Parser::with_config(Scanner::new(source), *config).parse()
}

// =============================================================================
// TESTS
// =============================================================================

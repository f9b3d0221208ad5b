//! # Expression Parser
//!
//! Single-pass parser that builds the tree while it reads.
//!
//! The driver is an explicit state machine. Each state reads at most one
//! lexeme, mutates the tree through the cursor and names the next state:
//!
//! ```text
//! ReadValue ──value──▶ ReadOperator ──operator──▶ ReadValue
//!     │  ╲                  │
//!     │   ╲──"/'──▶ ReadText ──▶ ReadOperator
//!     │                     └──)──▶ ExitGroup ──▶ ReadOperator | Done
//!     └──(──▶ EnterGroup ──▶ ReadValue
//! any failure ──▶ Failed
//! ```
//!
//! ## Example
//!
//! ```rust
//! use exprtree::lexer::Scanner;
//! use exprtree::parser::Parser;
//!
//! let result = Parser::new(Scanner::new("1+2")).parse();
//! assert!(result.is_ok());
//! ```

mod calls;
mod diagnostics;
mod groups;
mod operators;
mod primaries;

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{LexemeClass, ScanSource};
use crate::token::{GroupType, Token};
use crate::tree::{NodeId, Tree};
use config::constants::ParserConfig;
use serde::Serialize;

pub use groups::CloseOutcome;

// =============================================================================
// PARSE RESULT
// =============================================================================

/// Parse outcome: the tree is always present, the error only on failure.
///
/// ## Example
///
/// ```rust
/// let result = exprtree::parse("1+");
/// assert!(!result.is_ok());
/// assert_eq!(result.tree.error_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    /// Tree rooted at an `Empty` token. Holds an `Error` node on failure.
    pub tree: Tree,
    /// First failure, if any.
    pub error: Option<ParseError>,
}

impl ParseResult {
    /// Check if parsing was successful.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Root of the parsed expression.
    pub fn expression(&self) -> Option<NodeId> {
        self.tree.first_expression()
    }

    /// Split into tree and error.
    pub fn into_parts(self) -> (Tree, Option<ParseError>) {
        (self.tree, self.error)
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Parser driver states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Expecting a value, a call, `(` or quoted text.
    ReadValue,
    /// Expecting an operator, `)`, `,` or end of input.
    ReadOperator,
    /// Open a bracket group.
    EnterGroup,
    /// Close a bracket group.
    ExitGroup,
    /// Scan quoted text.
    ReadText,
    /// Parsing stopped at a recorded error.
    Failed,
    /// The current tree is complete.
    Done,
}

impl State {
    /// True for `Done` and `Failed`.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// One tree under construction and its cursor.
#[derive(Debug, Clone)]
pub(crate) struct Builder {
    pub(crate) tree: Tree,
    pub(crate) cursor: NodeId,
    /// Number of enclosing function calls.
    pub(crate) depth: usize,
}

impl Builder {
    pub(crate) fn new(root: Token, depth: usize) -> Self {
        let tree = Tree::new(root);
        let cursor = tree.root();
        Self {
            tree,
            cursor,
            depth,
        }
    }

    /// Token at the cursor.
    pub(crate) fn current(&self) -> &Token {
        self.tree.token(self.cursor)
    }

    /// True when this tree is a call argument.
    pub(crate) fn is_argument(&self) -> bool {
        matches!(
            self.tree.token(self.tree.root()),
            Token::Group(GroupType::Scope)
        )
    }
}

// =============================================================================
// PARSER
// =============================================================================

/// Parser driver over any [`ScanSource`].
pub struct Parser<S> {
    /// Lexer collaborator, owned for the duration of the parse.
    scanner: S,
    /// Limits.
    config: ParserConfig,
    /// First recorded failure.
    error: Option<ParseError>,
}

impl<S: ScanSource> Parser<S> {
    /// Create a parser with the default configuration.
    pub fn new(scanner: S) -> Self {
        Self::with_config(scanner, ParserConfig::default())
    }

    /// Create a parser with explicit limits.
    pub fn with_config(scanner: S, config: ParserConfig) -> Self {
        Self {
            scanner,
            config,
            error: None,
        }
    }

    /// Parse the whole input.
    pub fn parse(mut self) -> ParseResult {
        let mut builder = Builder::new(Token::Empty, 0);
        let state = self.run(&mut builder);
        log::debug!(
            "parse finished in {:?} with {} nodes",
            state,
            builder.tree.node_count()
        );
        ParseResult {
            tree: builder.tree,
            error: self.error,
        }
    }

    /// Drive `builder` until a terminal state.
    ///
    /// Fails once the tree grows past `max_depth` levels.
    pub(crate) fn run(&mut self, builder: &mut Builder) -> State {
        let mut state = State::ReadValue;
        while !state.is_terminal() {
            log::trace!("{:?} at {}", state, builder.current());
            state = self.step(builder, state);
            if !state.is_terminal() && builder.tree.height() > self.config.max_depth {
                let message = format!("expression nested deeper than {}", self.config.max_depth);
                state = self.fail(builder, syntax(message));
            }
        }
        state
    }

    /// Execute one state and return the next.
    pub(crate) fn step(&mut self, builder: &mut Builder, state: State) -> State {
        match state {
            State::ReadValue => self.read_value(builder),
            State::ReadOperator => self.read_operator(builder),
            State::EnterGroup => self.enter_group(builder),
            State::ExitGroup => self.exit_group(builder),
            State::ReadText => self.read_text(builder),
            State::Failed | State::Done => state,
        }
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Expecting an operand.
    ///
    /// A missing right operand is reported on the operator's line, before
    /// any trailing whitespace.
    fn read_value(&mut self, builder: &mut Builder) -> State {
        let line = self.scanner.line_number();
        self.skip_whitespace();
        match LexemeClass::of(self.scanner.peek()) {
            LexemeClass::Number => self.read_number(builder),
            LexemeClass::Identifier => self.read_identifier(builder),
            LexemeClass::Quote => State::ReadText,
            LexemeClass::OpenBracket => State::EnterGroup,
            LexemeClass::CloseBracket => match builder.current() {
                Token::BinaryOperator(op) => {
                    let kind = ParseErrorKind::missing_right(op.symbol());
                    self.consume_and_fail_at(builder, kind, line)
                }
                Token::Group(GroupType::Paren) => {
                    self.consume_and_fail(builder, syntax("empty brackets"))
                }
                _ => State::ExitGroup,
            },
            LexemeClass::Operator(op) => match builder.current() {
                Token::BinaryOperator(current) => {
                    let kind = ParseErrorKind::missing_right(current.symbol());
                    self.consume_and_fail_at(builder, kind, line)
                }
                _ => self.consume_and_fail(builder, ParseErrorKind::missing_left(op.symbol())),
            },
            LexemeClass::Separator => match builder.current() {
                Token::BinaryOperator(op) => {
                    let kind = ParseErrorKind::missing_right(op.symbol());
                    self.consume_and_fail_at(builder, kind, line)
                }
                _ => self.consume_and_fail(builder, syntax("expecting a value before ','")),
            },
            LexemeClass::Eof => match builder.current() {
                Token::BinaryOperator(op) => {
                    let kind = ParseErrorKind::missing_right(op.symbol());
                    self.fail_at(builder, kind, line)
                }
                _ => self.end_of_input(builder),
            },
            LexemeClass::Unknown(c) => {
                self.consume_and_fail(builder, syntax(format!("unexpected character {c:?}")))
            }
            LexemeClass::Whitespace => State::ReadValue,
        }
    }

    /// Expecting an operator after a complete operand.
    fn read_operator(&mut self, builder: &mut Builder) -> State {
        self.skip_whitespace();
        match LexemeClass::of(self.scanner.peek()) {
            LexemeClass::Operator(op) => {
                self.scanner.advance();
                self.scanner.commit();
                match operators::insert_operator(builder, op) {
                    Ok(()) => State::ReadValue,
                    Err(kind) => self.fail_with_context(builder, kind, op.to_string()),
                }
            }
            LexemeClass::CloseBracket => State::ExitGroup,
            LexemeClass::Separator => self.separator(builder),
            LexemeClass::Eof => self.end_of_input(builder),
            LexemeClass::Whitespace => State::ReadOperator,
            LexemeClass::Number
            | LexemeClass::Identifier
            | LexemeClass::Quote
            | LexemeClass::OpenBracket => {
                self.consume_and_fail(builder, syntax("expecting an operator"))
            }
            LexemeClass::Unknown(c) => {
                self.consume_and_fail(builder, syntax(format!("unexpected character {c:?}")))
            }
        }
    }

    /// `,` after a complete operand. Ends the current argument when the
    /// tree is a call argument with no open bracket.
    fn separator(&mut self, builder: &mut Builder) -> State {
        if !builder.is_argument() {
            return self.consume_and_fail(builder, syntax("unexpected ',' outside a call"));
        }
        if groups::open_paren(builder).is_some() {
            return self.consume_and_fail(builder, syntax("unexpected ',' inside brackets"));
        }
        State::Done
    }

    /// Input ran out with a complete operand or an empty tree.
    fn end_of_input(&mut self, builder: &mut Builder) -> State {
        if groups::open_paren(builder).is_some() {
            return self.fail(builder, ParseErrorKind::UnclosedGroup);
        }
        State::Done
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Skip whitespace between lexemes without committing it.
    fn skip_whitespace(&mut self) {
        while self.scanner.peek().is_some_and(char::is_whitespace) {
            self.scanner.advance();
        }
        self.scanner.ignore();
    }
}

fn syntax(message: impl Into<String>) -> ParseErrorKind {
    ParseErrorKind::syntax(message)
}

// =============================================================================
// TESTS
// =============================================================================

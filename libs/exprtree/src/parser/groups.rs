//! # Bracket Groups
//!
//! Entry into and exit from `( ... )` regions.
//!
//! A `(` opens a `Paren` group under the cursor and parsing continues inside
//! it as a fresh expression. A `)` ascends from the cursor to the nearest
//! group. A `Paren` group is closed there; a `Scope` group is the root of a
//! call argument, so the `)` belongs to the enclosing call and is left
//! unconsumed.

use super::{Builder, Parser, State};
use crate::error::ParseErrorKind;
use crate::lexer::ScanSource;
use crate::token::{GroupType, Token};
use crate::tree::NodeId;

/// Result of resolving a `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// A `Paren` group was closed; the cursor is now its parent.
    Closed,
    /// A `Scope` boundary was reached first; the bracket is not ours.
    NotMine,
}

/// Open a `Paren` group under the cursor and enter it.
pub(super) fn open_bracket(builder: &mut Builder) -> NodeId {
    builder.cursor = builder
        .tree
        .add(builder.cursor, Token::Group(GroupType::Paren));
    builder.cursor
}

/// Resolve a `)` by ascending from the cursor.
///
/// ## Errors
///
/// [`ParseErrorKind::UnclosedGroup`] when the root is reached without
/// finding a group.
pub(super) fn close_bracket(builder: &mut Builder) -> Result<CloseOutcome, ParseErrorKind> {
    let mut node = builder.cursor;
    loop {
        match builder.tree.token(node) {
            Token::Group(GroupType::Paren) => {
                if let Some(parent) = builder.tree.parent(node) {
                    builder.cursor = parent;
                    return Ok(CloseOutcome::Closed);
                }
            }
            Token::Group(GroupType::Scope) => {
                builder.cursor = node;
                return Ok(CloseOutcome::NotMine);
            }
            _ => {}
        }
        node = builder
            .tree
            .parent(node)
            .ok_or(ParseErrorKind::UnclosedGroup)?;
    }
}

/// Innermost `Paren` group still open at the cursor.
pub(super) fn open_paren(builder: &Builder) -> Option<NodeId> {
    std::iter::once(builder.cursor)
        .chain(builder.tree.ancestors(builder.cursor))
        .find(|&node| matches!(builder.tree.token(node), Token::Group(GroupType::Paren)))
}

impl<S: ScanSource> Parser<S> {
    /// `EnterGroup`: consume `(`.
    pub(super) fn enter_group(&mut self, builder: &mut Builder) -> State {
        self.scanner.advance();
        self.scanner.ignore();
        open_bracket(builder);
        State::ReadValue
    }

    /// `ExitGroup`: consume `)`, or give it back when it closes a call.
    pub(super) fn exit_group(&mut self, builder: &mut Builder) -> State {
        self.scanner.advance();
        match close_bracket(builder) {
            Ok(CloseOutcome::Closed) => {
                self.scanner.ignore();
                State::ReadOperator
            }
            Ok(CloseOutcome::NotMine) => {
                log::trace!("')' closes the enclosing call");
                self.scanner.backup();
                State::Done
            }
            Err(kind) => self.fail(builder, kind),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

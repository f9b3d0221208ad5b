//! # Function Calls
//!
//! `name(arg, ...)` where `(` immediately follows the name.
//!
//! Each argument is parsed into its own tree rooted at a `Scope` group,
//! reusing the driver loop. The argument ends when its loop reaches `Done`:
//! at a top-level `,` or at a `)` whose ascent stopped at the scope root.
//! The call parser then consumes that delimiter itself.

use super::{Builder, Parser, State};
use crate::error::ParseErrorKind;
use crate::lexer::ScanSource;
use crate::token::{GroupType, Token};
use crate::tree::Tree;

impl<S: ScanSource> Parser<S> {
    /// Parse the argument list of `name` and append the call under the
    /// cursor.
    pub(super) fn read_call(&mut self, builder: &mut Builder, name: String) -> State {
        if builder.depth >= self.config.max_call_depth {
            let message = format!(
                "function calls nested deeper than {}",
                self.config.max_call_depth
            );
            return self.consume_and_fail(builder, ParseErrorKind::syntax(message));
        }
        self.scanner.advance();
        self.scanner.ignore();

        let mut arguments: Vec<Tree> = Vec::new();
        loop {
            let mut argument = Builder::new(Token::Group(GroupType::Scope), builder.depth + 1);
            let state = self.run(&mut argument);
            let empty = argument.tree.first_expression().is_none();

            if state == State::Failed {
                arguments.push(argument.tree);
                attach(builder, name, arguments);
                return State::Failed;
            }

            match self.scanner.advance() {
                Some(',') => {
                    self.scanner.ignore();
                    arguments.push(argument.tree);
                }
                Some(')') if empty && !arguments.is_empty() => {
                    attach(builder, name, arguments);
                    return self.fail(builder, ParseErrorKind::syntax("expecting a value before ')'"));
                }
                Some(')') => {
                    self.scanner.ignore();
                    if !empty {
                        arguments.push(argument.tree);
                    }
                    log::debug!("call {}() with {} arguments", name, arguments.len());
                    attach(builder, name, arguments);
                    return State::ReadOperator;
                }
                _ => {
                    if !empty {
                        arguments.push(argument.tree);
                    }
                    attach(builder, name, arguments);
                    return self.fail(builder, ParseErrorKind::UnclosedGroup);
                }
            }
        }
    }
}

fn attach(builder: &mut Builder, name: String, arguments: Vec<Tree>) {
    builder
        .tree
        .add(builder.cursor, Token::Function { name, arguments });
}

// =============================================================================
// TESTS
// =============================================================================

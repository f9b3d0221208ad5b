//! # Failure Reporting
//!
//! Records where and why parsing stopped. The consumed fragment is quoted,
//! padded with following input up to the configured context window, and an
//! `Error` node is left under the cursor so the partial tree shows the spot.
//! Only the first failure of a parse is kept.

use super::{Builder, Parser, State};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::ScanSource;
use crate::token::Token;

impl<S: ScanSource> Parser<S> {
    /// Fail with the pending lexeme as context.
    pub(super) fn fail(&mut self, builder: &mut Builder, kind: ParseErrorKind) -> State {
        let line = self.scanner.line_number();
        self.fail_at(builder, kind, line)
    }

    /// Fail with the pending lexeme as context, reporting `line`.
    pub(super) fn fail_at(
        &mut self,
        builder: &mut Builder,
        kind: ParseErrorKind,
        line: usize,
    ) -> State {
        let fragment = self.scanner.commit();
        self.report(builder, kind, fragment, line)
    }

    /// Consume the offending character, then fail.
    pub(super) fn consume_and_fail(&mut self, builder: &mut Builder, kind: ParseErrorKind) -> State {
        self.scanner.advance();
        self.fail(builder, kind)
    }

    /// Consume the offending character, then fail on `line`.
    pub(super) fn consume_and_fail_at(
        &mut self,
        builder: &mut Builder,
        kind: ParseErrorKind,
        line: usize,
    ) -> State {
        self.scanner.advance();
        self.fail_at(builder, kind, line)
    }

    /// Fail with `fragment` as the start of the context.
    pub(super) fn fail_with_context(
        &mut self,
        builder: &mut Builder,
        kind: ParseErrorKind,
        fragment: String,
    ) -> State {
        let line = self.scanner.line_number();
        self.report(builder, kind, fragment, line)
    }

    fn report(
        &mut self,
        builder: &mut Builder,
        kind: ParseErrorKind,
        fragment: String,
        line: usize,
    ) -> State {
        let mut context = fragment;
        let mut length = context.chars().count();
        if length < self.config.context_window {
            while length < self.config.context_window && !self.scanner.is_eof() {
                self.scanner.advance();
                length += 1;
            }
            context.push_str(&self.scanner.commit());
        }

        let error = ParseError::new(kind, line, context);
        builder
            .tree
            .add(builder.cursor, Token::Error(error.to_string()));

        if self.error.is_none() {
            log::warn!("{error}");
            self.error = Some(error);
        }
        State::Failed
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorKind;
    use crate::lexer::{ScanSource, Scanner};
    use crate::parser::{Builder, Parser, State};
    use crate::token::Token;
    use config::constants::ParserConfig;

    #[test]
    fn test_context_extends_to_window() {
        let mut parser = Parser::new(Scanner::new("+ 1 + 2 + 3 + 4"));
        let mut builder = Builder::new(Token::Empty, 0);
        let state = parser.consume_and_fail(&mut builder, ParseErrorKind::missing_left('+'));
        assert_eq!(state, State::Failed);
        let error = parser.error.clone().unwrap();
        assert_eq!(error.context, "+ 1 + 2 + ");
        assert_eq!(error.line, 1);
    }

    #[test]
    fn test_context_stops_at_eof() {
        let mut parser = Parser::new(Scanner::new("(1"));
        let mut builder = Builder::new(Token::Empty, 0);
        parser.fail(&mut builder, ParseErrorKind::UnclosedGroup);
        assert_eq!(parser.error.unwrap().context, "(1");
    }

    #[test]
    fn test_long_fragment_is_not_extended() {
        let mut parser = Parser::new(Scanner::new(" rest"));
        let mut builder = Builder::new(Token::Empty, 0);
        let fragment = "123456789012".to_string();
        parser.fail_with_context(&mut builder, ParseErrorKind::UnclosedGroup, fragment);
        assert_eq!(parser.error.unwrap().context, "123456789012");
    }

    #[test]
    fn test_custom_window() {
        let config = ParserConfig::new(3, 8).unwrap();
        let mut parser = Parser::with_config(Scanner::new("abcdef"), config);
        let mut builder = Builder::new(Token::Empty, 0);
        parser.fail(&mut builder, ParseErrorKind::UnterminatedString);
        assert_eq!(parser.error.unwrap().context, "abc");
    }

    #[test]
    fn test_first_error_wins() {
        let mut parser = Parser::new(Scanner::new(""));
        let mut builder = Builder::new(Token::Empty, 0);
        parser.fail(&mut builder, ParseErrorKind::UnclosedGroup);
        parser.fail(&mut builder, ParseErrorKind::UnterminatedString);
        assert_eq!(parser.error.unwrap().kind, ParseErrorKind::UnclosedGroup);
    }

    #[test]
    fn test_fail_at_keeps_given_line() {
        let mut parser = Parser::new(Scanner::new("\n\nx"));
        let mut builder = Builder::new(Token::Empty, 0);
        parser.scanner.advance();
        parser.scanner.advance();
        parser.scanner.ignore();
        parser.fail_at(&mut builder, ParseErrorKind::missing_right('+'), 1);
        let error = parser.error.unwrap();
        assert_eq!(error.line, 1);
        assert_eq!(error.context, "x");
    }

    #[test]
    fn test_error_node_under_cursor() {
        let mut parser = Parser::new(Scanner::new("x"));
        let mut builder = Builder::new(Token::Empty, 0);
        parser.fail(&mut builder, ParseErrorKind::syntax("boom"));
        let root = builder.tree.root();
        let marker = builder.tree.last_element(root).unwrap();
        let Token::Error(message) = builder.tree.token(marker) else {
            panic!("expected an error marker");
        };
        assert!(message.contains("boom"));
        assert!(message.starts_with("Line: 1"));
    }
}

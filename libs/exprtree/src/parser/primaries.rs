//! # Primary Values
//!
//! Numbers, identifiers and quoted text. Each is appended under the cursor
//! as a leaf, after which the driver expects an operator.

use super::{Builder, Parser, State};
use crate::error::ParseErrorKind;
use crate::lexer::{is_identifier_continue, is_number_continue, ScanSource};
use crate::token::Token;

impl<S: ScanSource> Parser<S> {
    /// Numeric literal, e.g. `42`, `3.14`, `.5`, `1e-3`.
    ///
    /// Digits and dots are consumed greedily so that `1.2.3` is reported
    /// as one invalid number rather than two values.
    pub(super) fn read_number(&mut self, builder: &mut Builder) -> State {
        self.advance_while(is_number_continue);
        if matches!(self.scanner.peek(), Some('e' | 'E')) {
            self.scanner.advance();
            if matches!(self.scanner.peek(), Some('+' | '-')) {
                self.scanner.advance();
            }
            self.advance_while(|c| c.is_ascii_digit());
        }

        let text = self.scanner.commit();
        match Token::number(&text) {
            Ok(token) => {
                builder.tree.add(builder.cursor, token);
                State::ReadOperator
            }
            Err(kind) => self.fail_with_context(builder, kind, text),
        }
    }

    /// Identifier, or a function call when `(` follows immediately.
    pub(super) fn read_identifier(&mut self, builder: &mut Builder) -> State {
        self.scanner.advance();
        self.advance_while(is_identifier_continue);
        let name = self.scanner.commit();

        if self.scanner.peek() == Some('(') {
            return self.read_call(builder, name);
        }
        builder.tree.add(builder.cursor, Token::Identity(name));
        State::ReadOperator
    }

    /// `ReadText`: text between matching `"` or `'` quotes.
    ///
    /// Unterminated text still leaves a `Text` node with what was scanned,
    /// followed by the error marker.
    pub(super) fn read_text(&mut self, builder: &mut Builder) -> State {
        let Some(quote) = self.scanner.advance() else {
            return self.fail(builder, ParseErrorKind::UnterminatedString);
        };
        self.scanner.ignore();

        loop {
            match self.scanner.advance() {
                Some(c) if c == quote => {
                    self.scanner.backup();
                    let text = self.scanner.commit();
                    self.scanner.advance();
                    self.scanner.ignore();
                    builder.tree.add(builder.cursor, Token::Text(text));
                    return State::ReadOperator;
                }
                Some(_) => {}
                None => {
                    let text = self.scanner.commit();
                    builder.tree.add(builder.cursor, Token::Text(text.clone()));
                    return self.fail_with_context(builder, ParseErrorKind::UnterminatedString, text);
                }
            }
        }
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.scanner.peek().is_some_and(&predicate) {
            self.scanner.advance();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorKind;
    use crate::lexer::Scanner;
    use crate::parser::{ParseResult, Parser};
    use crate::token::Token;

    fn parse(source: &str) -> ParseResult {
        Parser::new(Scanner::new(source)).parse()
    }

    fn single(source: &str) -> Token {
        let result = parse(source);
        assert!(result.is_ok(), "Error: {:?}", result.error);
        let expr = result.expression().unwrap();
        result.tree.token(expr).clone()
    }

    #[test]
    fn test_numbers() {
        assert_eq!(single("7"), Token::Number(7.0));
        assert_eq!(single("3.25"), Token::Number(3.25));
        assert_eq!(single(".5"), Token::Number(0.5));
        assert_eq!(single("2e3"), Token::Number(2000.0));
        assert_eq!(single("2E-1"), Token::Number(0.2));
    }

    #[test]
    fn test_invalid_number() {
        let result = parse("1.2.3 + 4");
        let error = result.error.unwrap();
        assert_eq!(
            error.kind,
            ParseErrorKind::InvalidNumber {
                text: "1.2.3".to_string()
            }
        );
        assert!(error.context.starts_with("1.2.3"));
        assert_eq!(result.tree.error_count(), 1);
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(single("x"), Token::Identity("x".into()));
        assert_eq!(single("_tmp2"), Token::Identity("_tmp2".into()));
    }

    #[test]
    fn test_text_double_and_single_quotes() {
        assert_eq!(single("\"abc\""), Token::Text("abc".into()));
        assert_eq!(single("'abc'"), Token::Text("abc".into()));
    }

    #[test]
    fn test_text_keeps_other_quote() {
        assert_eq!(single("\"it's\""), Token::Text("it's".into()));
        assert_eq!(single("''"), Token::Text(String::new()));
    }

    #[test]
    fn test_unterminated_text() {
        let result = parse("\"abc");
        let error = result.error.unwrap();
        assert_eq!(error.kind, ParseErrorKind::UnterminatedString);
        assert_eq!(error.context, "abc");
        assert_eq!(result.tree.error_count(), 1);

        let tree = &result.tree;
        let children: Vec<&Token> = tree
            .children(tree.root())
            .iter()
            .map(|&id| tree.token(id))
            .collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], &Token::Text("abc".into()));
        assert!(children[1].is_error());
    }

    #[test]
    fn test_number_out_of_range() {
        let result = parse("1e999");
        assert_eq!(
            result.error.unwrap().kind,
            ParseErrorKind::InvalidNumber {
                text: "1e999".to_string()
            }
        );
        assert_eq!(result.tree.error_count(), 1);
    }
}

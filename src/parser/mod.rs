//! Parser for the Arbor programming language
//!
//! A recursive descent parser that builds the tree through the
//! construction API in [`crate::ast::build`].

mod error;
mod expr;
mod item;
mod stmt;

pub use error::{ParseError, ParseErrorKind, ParseResult};

use crate::ast::{Node, Span};
use crate::config::ParserConfig;
use crate::lexer::{SpannedToken, Token};

/// The Arbor parser
pub struct Parser<'a> {
    tokens: &'a [SpannedToken],
    pos: usize,
    /// Current expression recursion depth
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default limits
    pub fn new(tokens: &'a [SpannedToken]) -> Self {
        Self::with_config(tokens, &ParserConfig::default())
    }

    pub fn with_config(tokens: &'a [SpannedToken], config: &ParserConfig) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Parse a complete source file into a statement list
    pub fn parse(tokens: &'a [SpannedToken]) -> ParseResult<Node> {
        let mut parser = Parser::new(tokens);
        parser.parse_program()
    }

    /// Parse a complete source file honoring the given limits
    pub fn parse_with_config(
        tokens: &'a [SpannedToken],
        config: &ParserConfig,
    ) -> ParseResult<Node> {
        let mut parser = Parser::with_config(tokens, config);
        parser.parse_program()
    }

    // === Token navigation ===

    /// Peek at the current token
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    /// Advance to the next token
    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Check if the current token matches
    fn check(&self, expected: &Token) -> bool {
        self.peek() == Some(expected)
    }

    /// Expect a specific token or return an error
    fn expect(&mut self, expected: &Token) -> ParseResult<()> {
        if self.check(expected) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                self.current_span(),
                expected.describe(),
                self.peek().cloned(),
            ))
        }
    }

    /// Expect an identifier and return it with its span
    fn expect_ident(&mut self) -> ParseResult<(String, Span)> {
        let span = self.current_span();
        match self.peek().cloned() {
            Some(Token::Ident(name)) => {
                self.advance();
                Ok((name, span))
            }
            tok => Err(ParseError::unexpected_token(span, "identifier", tok)),
        }
    }

    /// Get the span of the current token
    fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map(|t| Span::new(t.span.start, t.span.end))
            .unwrap_or_else(|| {
                // EOF span - use end of last token or 0
                self.tokens
                    .last()
                    .map(|t| Span::new(t.span.end, t.span.end))
                    .unwrap_or_default()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Statements, render};
    use crate::lexer::lex;

    fn parse(source: &str) -> ParseResult<Node> {
        let tokens = lex(source).expect("lexer error");
        Parser::parse(&tokens)
    }

    fn items(source: &str) -> Statements {
        match parse(source).expect("parse error") {
            Node::Statements(statements) => statements,
            other => panic!("expected statements, found {:?}", other.kind()),
        }
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(items("").is_empty());
    }

    #[test]
    fn test_parse_let() {
        let file = items("let x: int = 42;");
        assert_eq!(file.len(), 1);
        assert!(matches!(file.iter().next(), Some(Node::Variable(_))));
    }

    #[test]
    fn test_parse_function() {
        let source = r#"
            fn add(a: int, b: int) -> int {
                let c: int = 1 + 2;
            }
            let s: string = "hi";
        "#;
        let file = items(source);
        assert_eq!(file.len(), 2);
        let Some(Node::Function(func)) = file.iter().next() else {
            panic!("expected function");
        };
        assert_eq!(func.identifier, "add");
        assert_eq!(func.params.len(), 2);
        assert_eq!(func.body.len(), 1);
    }

    #[test]
    fn test_parse_precedence() {
        let node = parse("let x: int = 1 + 2 * 3;").unwrap();
        let expected = "\
`-Statements:
  `-Variable:
    |-typeinfo: int
    |-identifier: x
    `-init:
      `-BinaryOp:
        |-Operator: +
        |-Left:
        | `-Value: 1
        `-Right:
          `-BinaryOp:
            |-Operator: *
            |-Left:
            | `-Value: 2
            `-Right:
              `-Value: 3
";
        assert_eq!(render(&node), expected);
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse("let x: int = 1").unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::UnexpectedToken { found: None, .. }
        ));
    }

    #[test]
    fn test_duplicate_parameter() {
        let err = parse("fn f(a: int, a: string) {}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DuplicateParameter("a".to_string()));
    }

    #[test]
    fn test_nesting_limit() {
        let config = ParserConfig { max_depth: 4 };
        let tokens = lex("let x: int = ((((((1))))));").unwrap();
        let err = Parser::parse_with_config(&tokens, &config).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TooDeep { limit: 4 });
    }
}

//! Parse error types for the Arbor parser

use thiserror::Error;

use crate::ast::Span;
use crate::lexer::Token;

/// A parse error
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {}..{}", .span.start, .span.end)]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
}

/// The kind of parse error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Unexpected token
    #[error("expected {expected}, found {}", format_found(.found))]
    UnexpectedToken {
        expected: String,
        found: Option<Token>,
    },

    /// Operator token the operator codec does not know
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    /// Two parameters of one function share a name
    #[error("duplicate parameter '{0}'")]
    DuplicateParameter(String),

    /// Parenthesized nesting exceeds the configured limit
    #[error("expression nesting exceeds the limit of {limit}")]
    TooDeep { limit: usize },

    /// Operator chain builds a tree taller than the configured limit
    #[error("expression tree height exceeds the limit of {limit}")]
    TreeTooTall { limit: usize },

    /// Integer literal does not fit in a 64-bit int
    #[error("integer literal {0} is out of range for int")]
    IntegerOutOfRange(String),
}

impl ParseError {
    pub fn new(span: Span, kind: ParseErrorKind) -> Self {
        Self { span, kind }
    }

    pub fn unexpected_token(span: Span, expected: impl Into<String>, found: Option<Token>) -> Self {
        Self::new(
            span,
            ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found,
            },
        )
    }

    /// Format error with source code context (line:col instead of byte offsets)
    pub fn format_with_source(&self, source: &str) -> String {
        self.format_with_source_and_file(source, None)
    }

    /// Format error with source code context and filename
    pub fn format_with_source_and_file(&self, source: &str, filename: Option<&str>) -> String {
        let msg = self.kind.to_string();
        format!(
            "error: {}\n{}",
            msg,
            self.span.format_error_context(source, filename, &msg)
        )
    }
}

fn format_found(found: &Option<Token>) -> String {
    match found {
        Some(tok) => tok.describe(),
        None => "end of file".to_string(),
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unexpected_token() {
        let err = ParseError::unexpected_token(Span::new(4, 5), "':'", Some(Token::Semi));
        assert_eq!(err.to_string(), "expected ':', found ';' at 4..5");
    }

    #[test]
    fn test_display_eof() {
        let err = ParseError::unexpected_token(Span::new(9, 9), "expression", None);
        assert_eq!(err.kind.to_string(), "expected expression, found end of file");
    }

    #[test]
    fn test_format_with_source() {
        let source = "let x: int = 1 ^~ 2;";
        let err = ParseError::new(Span::new(15, 16), ParseErrorKind::UnknownOperator("^~".into()));
        let text = err.format_with_source_and_file(source, Some("t.arb"));
        assert!(text.starts_with("error: unknown operator '^~'\n"));
        assert!(text.contains("t.arb:1:16"));
    }
}

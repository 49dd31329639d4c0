//! Common test infrastructure for Arbor tests

use arbor::ast::Node;
use arbor::config::ParserConfig;
use arbor::{Parser, lex};

/// Lex and parse a source string, panicking on any front-end error
pub fn parse_source(source: &str) -> Node {
    let tokens = lex(source).expect("lexer error");
    Parser::parse(&tokens).expect("parse error")
}

/// Parse with custom parser limits
#[allow(dead_code)]
pub fn parse_with_limit(source: &str, max_depth: usize) -> Result<Node, String> {
    let tokens = lex(source).map_err(|e| e.to_string())?;
    Parser::parse_with_config(&tokens, &ParserConfig { max_depth })
        .map_err(|e| e.format_with_source(source))
}

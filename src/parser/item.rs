//! Top-level item parsing for the Arbor parser

use rustc_hash::FxHashSet as HashSet;
use tracing::debug;

use crate::ast::build::{make_function, make_variable_declaration};
use crate::ast::{Node, Statements, Type, VariableDeclarations};
use crate::lexer::Token;

use super::Parser;
use super::error::{ParseError, ParseErrorKind, ParseResult};

impl Parser<'_> {
    /// Parse a whole file: a sequence of bindings and functions
    pub(super) fn parse_program(&mut self) -> ParseResult<Node> {
        let mut items = Statements::new();

        while let Some(token) = self.peek().cloned() {
            let item = match token {
                Token::Let => self.parse_let()?,
                Token::Fn => self.parse_function()?,
                tok => {
                    return Err(ParseError::unexpected_token(
                        self.current_span(),
                        "'let' or 'fn'",
                        Some(tok),
                    ));
                }
            };
            items.push(item);
        }

        debug!(items = items.len(), "parsed program");
        Ok(Node::Statements(items))
    }

    /// Parse a function: fn name(a: int, b: string) -> int { let ...; }
    pub fn parse_function(&mut self) -> ParseResult<Node> {
        self.expect(&Token::Fn)?;
        let (name, _) = self.expect_ident()?;

        self.expect(&Token::LParen)?;
        let params = self.parse_params()?;
        self.expect(&Token::RParen)?;

        // A missing return type means void
        let return_type = if self.check(&Token::Arrow) {
            self.advance();
            self.parse_type()?
        } else {
            Type::Void
        };

        self.expect(&Token::LBrace)?;
        let mut body = Statements::new();
        while !self.check(&Token::RBrace) {
            body.push(self.parse_let()?);
        }
        self.expect(&Token::RBrace)?;

        Ok(make_function(name, params, return_type, body).into())
    }

    fn parse_params(&mut self) -> ParseResult<VariableDeclarations> {
        let mut params = Vec::new();
        let mut seen = HashSet::default();

        if self.check(&Token::RParen) {
            return Ok(VariableDeclarations(params));
        }

        loop {
            let (name, span) = self.expect_ident()?;
            self.expect(&Token::Colon)?;
            let ty = self.parse_type()?;

            if !seen.insert(name.clone()) {
                return Err(ParseError::new(span, ParseErrorKind::DuplicateParameter(name)));
            }
            params.push(make_variable_declaration(ty, name));

            if !self.check(&Token::Comma) {
                break;
            }
            self.advance();
        }

        Ok(VariableDeclarations(params))
    }
}

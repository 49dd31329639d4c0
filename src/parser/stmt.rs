//! Statement parsing for the Arbor parser

use crate::ast::build::{make_variable, make_variable_declaration};
use crate::ast::{Node, Type};
use crate::lexer::Token;

use super::Parser;
use super::error::{ParseError, ParseResult};

impl Parser<'_> {
    /// Parse a binding: let name: type = expr;
    pub fn parse_let(&mut self) -> ParseResult<Node> {
        self.expect(&Token::Let)?;

        let (name, _) = self.expect_ident()?;
        self.expect(&Token::Colon)?;
        let ty = self.parse_type()?;

        self.expect(&Token::Eq)?;
        let init = self.parse_expr()?;
        self.expect(&Token::Semi)?;

        Ok(make_variable(make_variable_declaration(ty, name), init).into())
    }

    /// Parse a type keyword
    pub(super) fn parse_type(&mut self) -> ParseResult<Type> {
        let ty = match self.peek() {
            Some(Token::Int) => Type::Int,
            Some(Token::Str) => Type::String,
            Some(Token::Void) => Type::Void,
            Some(Token::Auto) => Type::Auto,
            tok => {
                return Err(ParseError::unexpected_token(
                    self.current_span(),
                    "type",
                    tok.cloned(),
                ));
            }
        };
        self.advance();
        Ok(ty)
    }
}

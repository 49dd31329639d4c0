//! Expression parsing for the Arbor parser

use crate::ast::build::{make_binary_op, make_value_int, make_value_string};
use crate::ast::{Node, Operator, to_operator};
use crate::lexer::Token;

use super::Parser;
use super::error::{ParseError, ParseErrorKind, ParseResult};

impl Parser<'_> {
    /// Parse an expression
    pub fn parse_expr(&mut self) -> ParseResult<Node> {
        self.parse_expr_bp(0).map(|(node, _)| node)
    }

    /// Parse expression with Pratt parsing (binding power)
    ///
    /// Returns the node together with its height so overly deep trees are
    /// rejected while they are built.
    fn parse_expr_bp(&mut self, min_bp: u8) -> ParseResult<(Node, usize)> {
        self.enter()?;
        let (mut lhs, mut height) = self.parse_primary()?;

        loop {
            let text = match self.peek() {
                Some(Token::Op(text)) => text.clone(),
                _ => break,
            };
            let span = self.current_span();

            let op = to_operator(&text);
            if !op.is_known() {
                return Err(ParseError::new(span, ParseErrorKind::UnknownOperator(text)));
            }

            let (l_bp, r_bp) = infix_binding_power(op);
            if l_bp < min_bp {
                break;
            }

            // Consume the operator
            self.advance();

            // Parse right-hand side
            let (rhs, rhs_height) = self.parse_expr_bp(r_bp)?;

            // Operator chains count too: later passes recurse once per level
            height = height.max(rhs_height) + 1;
            if height > self.max_depth {
                return Err(ParseError::new(
                    span,
                    ParseErrorKind::TreeTooTall {
                        limit: self.max_depth,
                    },
                ));
            }

            lhs = make_binary_op(lhs, rhs, op).into();
        }

        self.depth -= 1;
        Ok((lhs, height))
    }

    /// Parse a literal or a parenthesized expression
    fn parse_primary(&mut self) -> ParseResult<(Node, usize)> {
        let span = self.current_span();

        match self.peek().cloned() {
            Some(Token::Integer(n)) => {
                self.advance();
                let value = i64::try_from(n).map_err(|_| {
                    ParseError::new(span, ParseErrorKind::IntegerOutOfRange(n.to_string()))
                })?;
                Ok((make_value_int(value).into(), 1))
            }

            // Negative integer literal; the sign makes i64::MIN reachable
            Some(Token::Op(op)) if op == "-" => {
                self.advance();
                match self.peek().cloned() {
                    Some(Token::Integer(n)) => {
                        let literal = span.merge(self.current_span());
                        self.advance();
                        let value = 0i64.checked_sub_unsigned(n).ok_or_else(|| {
                            ParseError::new(
                                literal,
                                ParseErrorKind::IntegerOutOfRange(format!("-{}", n)),
                            )
                        })?;
                        Ok((make_value_int(value).into(), 1))
                    }
                    tok => Err(ParseError::unexpected_token(
                        self.current_span(),
                        "integer literal",
                        tok,
                    )),
                }
            }

            Some(Token::String(s)) => {
                self.advance();
                Ok((make_value_string(s).into(), 1))
            }

            // Parenthesized expression
            Some(Token::LParen) => {
                self.advance();
                let inner = self.parse_expr_bp(0)?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }

            tok => Err(ParseError::unexpected_token(span, "expression", tok)),
        }
    }

    /// Track expression recursion, failing once the configured limit is passed
    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::new(
                self.current_span(),
                ParseErrorKind::TooDeep {
                    limit: self.max_depth,
                },
            ));
        }
        Ok(())
    }
}

/// Get binding power for infix operators
/// Returns (left_bp, right_bp) - higher binds tighter
fn infix_binding_power(op: Operator) -> (u8, u8) {
    match op {
        // Logical OR (lowest precedence)
        Operator::LogicalOr => (1, 2),
        // Logical AND
        Operator::LogicalAnd => (3, 4),
        // Bitwise OR
        Operator::Or => (5, 6),
        // Bitwise XOR
        Operator::Xor => (7, 8),
        // Bitwise AND
        Operator::And => (9, 10),
        // Bit shifts
        Operator::Shl | Operator::Shr => (11, 12),
        // Addition/subtraction
        Operator::Add | Operator::Sub => (13, 14),
        // Multiplication/division/modulo
        Operator::Mul | Operator::Div | Operator::Mod => (15, 16),
        // Exponentiation, right-associative
        Operator::Power => (18, 17),
        Operator::Unknown => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Node, Operator};
    use crate::lexer::lex;
    use crate::parser::{ParseErrorKind, Parser};
    use crate::sema::constant_fold;

    fn expr(source: &str) -> Node {
        let tokens = lex(source).expect("lexer error");
        let mut parser = Parser::new(&tokens);
        parser.parse_expr().expect("parse error")
    }

    #[test]
    fn test_left_associative() {
        // (10 - 4) - 3
        assert_eq!(constant_fold(&expr("10 - 4 - 3")), Ok(3));
    }

    #[test]
    fn test_power_right_associative() {
        // 2 ^^ (3 ^^ 2) = 2 ^^ 9
        assert_eq!(constant_fold(&expr("2 ^^ 3 ^^ 2")), Ok(512));
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(constant_fold(&expr("((3 + 4) * 2)")), Ok(14));
    }

    #[test]
    fn test_negative_literal() {
        assert_eq!(expr("-5"), Node::int(-5));
        assert_eq!(
            expr("1 - -5"),
            Node::binary(Node::int(1), Operator::Sub, Node::int(-5))
        );
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(expr("-9223372036854775808"), Node::int(i64::MIN));
        assert_eq!(expr("9223372036854775807"), Node::int(i64::MAX));

        let tokens = lex("9223372036854775808").unwrap();
        let err = Parser::new(&tokens).parse_expr().unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::IntegerOutOfRange("9223372036854775808".to_string())
        );

        let tokens = lex("1 + -9223372036854775809").unwrap();
        let err = Parser::new(&tokens).parse_expr().unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::IntegerOutOfRange("-9223372036854775809".to_string())
        );
        assert_eq!((err.span.start, err.span.end), (4, 24));
    }

    #[test]
    fn test_long_operator_chain_hits_height_limit() {
        let chain = vec!["1"; 300].join(" + ");
        let tokens = lex(&chain).unwrap();
        let err = Parser::new(&tokens).parse_expr().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TreeTooTall { limit: 256 });
        assert_eq!(
            err.kind.to_string(),
            "expression tree height exceeds the limit of 256"
        );

        let chain = vec!["1"; 200].join(" + ");
        assert_eq!(constant_fold(&expr(&chain)), Ok(200));
    }

    #[test]
    fn test_shift_binds_looser_than_add() {
        // 1 << (2 + 1)
        assert_eq!(constant_fold(&expr("1 << 2 + 1")), Ok(8));
    }

    #[test]
    fn test_missing_operand() {
        let tokens = lex("1 +").unwrap();
        let err = Parser::new(&tokens).parse_expr().unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::UnexpectedToken { found: None, .. }
        ));
    }
}

//! Binary operator codes and their textual form

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Binary operators
///
/// `Unknown` is the sentinel produced for tokens that do not name an
/// operator. It must never reach the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Power,

    // Shifts
    Shr,
    Shl,

    // Logical
    LogicalAnd,
    LogicalOr,

    // Bitwise
    Or,
    And,
    Xor,

    Unknown,
}

/// Every operator except the sentinel, in code order
pub const OPERATORS: [Operator; 13] = [
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Mod,
    Operator::Shr,
    Operator::Shl,
    Operator::LogicalAnd,
    Operator::LogicalOr,
    Operator::Or,
    Operator::And,
    Operator::Xor,
    Operator::Power,
];

/// Raised when a token does not name an operator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator '{0}'")]
pub struct UnknownOperator(pub String);

impl Operator {
    /// Map a token to an operator. Only the first three characters count.
    pub fn from_token(token: &str) -> Self {
        let key = match token.char_indices().nth(3) {
            Some((end, _)) => &token[..end],
            None => token,
        };

        match key {
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Mul,
            "/" => Operator::Div,
            "%" => Operator::Mod,
            ">>" => Operator::Shr,
            "<<" => Operator::Shl,
            "&&" => Operator::LogicalAnd,
            "||" => Operator::LogicalOr,
            "|" => Operator::Or,
            "&" => Operator::And,
            "^" => Operator::Xor,
            "^^" => Operator::Power,
            _ => Operator::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Shr => ">>",
            Operator::Shl => "<<",
            Operator::LogicalAnd => "&&",
            Operator::LogicalOr => "||",
            Operator::Or => "|",
            Operator::And => "&",
            Operator::Xor => "^",
            Operator::Power => "^^",
            Operator::Unknown => "<ERROR>",
        }
    }

    /// Numeric code of this operator; the sentinel is 0
    pub fn code(&self) -> u8 {
        match self {
            Operator::Unknown => 0,
            op => OPERATORS
                .iter()
                .position(|candidate| candidate == op)
                .map_or(0, |index| index as u8 + 1),
        }
    }

    /// Inverse of [`Operator::code`]; codes outside the table yield the sentinel
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Operator::Unknown,
            n => OPERATORS
                .get(n as usize - 1)
                .copied()
                .unwrap_or(Operator::Unknown),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Operator::Unknown)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Operator::from_token(s) {
            Operator::Unknown => Err(UnknownOperator(s.to_string())),
            op => Ok(op),
        }
    }
}

/// Map a textual token to its operator, or [`Operator::Unknown`]
pub fn to_operator(token: &str) -> Operator {
    Operator::from_token(token)
}

/// Textual form of an operator; the sentinel renders as `<ERROR>`
pub fn operator_to_string(op: Operator) -> &'static str {
    op.as_str()
}

/// Textual form of a raw operator code
pub fn operator_code_to_string(code: u8) -> &'static str {
    match Operator::from_code(code) {
        Operator::Unknown if code != 0 => "<UNKNOWN>",
        op => op.as_str(),
    }
}

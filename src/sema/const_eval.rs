//! Constant Expression Evaluation
//!
//! Folds trees of integer literals and binary operations to a single
//! 64-bit value at compile time.

use thiserror::Error;
use tracing::trace;

use crate::ast::{Node, NodeKind, Operator, Type, Value};

/// Recoverable failures while folding a constant expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    #[error("cannot fold a {found} value as an integer")]
    TypeMismatch { found: Type },

    #[error("a {0} node is not a constant expression")]
    UnsupportedNode(NodeKind),

    #[error("division by zero in constant expression")]
    DivisionByZero,

    #[error("modulo by zero in constant expression")]
    ModuloByZero,

    #[error("arithmetic overflow in constant expression: {lhs} {op} {rhs}")]
    Overflow { lhs: i64, op: Operator, rhs: i64 },

    #[error("shift amount {0} out of range in constant expression")]
    ShiftOutOfRange(i64),

    #[error("negative exponent {0} in constant expression")]
    NegativeExponent(i64),
}

/// Fold `node` to an integer
///
/// Bindings fold their initializer and literals must be integers. A binary
/// operation checks any literal operand before recursing into the other
/// side; with two composite operands the left one folds first.
pub fn constant_fold(node: &Node) -> Result<i64, FoldError> {
    match node {
        Node::Variable(var) => constant_fold(&var.init),
        Node::Value(value) => fold_value(value),
        Node::BinaryOp(binop) => {
            let (lhs, rhs) = match (binop.left.as_value(), binop.right.as_value()) {
                (Some(left), Some(right)) => (fold_value(left)?, fold_value(right)?),
                (Some(left), None) => {
                    let lhs = fold_value(left)?;
                    (lhs, constant_fold(&binop.right)?)
                }
                (None, Some(right)) => {
                    let rhs = fold_value(right)?;
                    (constant_fold(&binop.left)?, rhs)
                }
                (None, None) => (constant_fold(&binop.left)?, constant_fold(&binop.right)?),
            };
            let result = apply_operator(lhs, binop.op, rhs)?;
            trace!(op = %binop.op, lhs, rhs, result, "folded binary operation");
            Ok(result)
        }
        other => Err(FoldError::UnsupportedNode(other.kind())),
    }
}

fn fold_value(value: &Value) -> Result<i64, FoldError> {
    value
        .as_int()
        .ok_or(FoldError::TypeMismatch { found: value.ty() })
}

/// Apply a binary operator to two integers
///
/// # Panics
///
/// Panics on [`Operator::Unknown`]. The builder never produces it, so
/// reaching this point means the operator codec and the builder disagree.
pub fn apply_operator(lhs: i64, op: Operator, rhs: i64) -> Result<i64, FoldError> {
    let overflow = FoldError::Overflow { lhs, op, rhs };

    match op {
        Operator::Add => lhs.checked_add(rhs).ok_or(overflow),
        Operator::Sub => lhs.checked_sub(rhs).ok_or(overflow),
        Operator::Mul => lhs.checked_mul(rhs).ok_or(overflow),
        Operator::Div => {
            if rhs == 0 {
                return Err(FoldError::DivisionByZero);
            }
            lhs.checked_div(rhs).ok_or(overflow)
        }
        Operator::Mod => {
            if rhs == 0 {
                return Err(FoldError::ModuloByZero);
            }
            lhs.checked_rem(rhs).ok_or(overflow)
        }
        Operator::Shr => Ok(lhs >> shift_amount(rhs)?),
        Operator::Shl => Ok(lhs << shift_amount(rhs)?),
        Operator::LogicalAnd => Ok(i64::from(lhs != 0 && rhs != 0)),
        Operator::LogicalOr => Ok(i64::from(lhs != 0 || rhs != 0)),
        Operator::Or => Ok(lhs | rhs),
        Operator::And => Ok(lhs & rhs),
        Operator::Xor => Ok(lhs ^ rhs),
        Operator::Power => exponentiate(lhs, rhs),
        Operator::Unknown => panic!("apply_operator: unknown operator reached the evaluator"),
    }
}

fn shift_amount(rhs: i64) -> Result<u32, FoldError> {
    if (0..=63).contains(&rhs) {
        Ok(rhs as u32)
    } else {
        Err(FoldError::ShiftOutOfRange(rhs))
    }
}

/// Exact integer exponentiation; negative exponents are a domain error
fn exponentiate(base: i64, exponent: i64) -> Result<i64, FoldError> {
    let overflow = FoldError::Overflow {
        lhs: base,
        op: Operator::Power,
        rhs: exponent,
    };

    match u32::try_from(exponent) {
        Ok(exp) => base.checked_pow(exp).ok_or(overflow),
        Err(_) if exponent < 0 => Err(FoldError::NegativeExponent(exponent)),
        Err(_) => match base {
            0 | 1 => Ok(base),
            -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => Err(overflow),
        },
    }
}

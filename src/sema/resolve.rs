//! Static type inference for expressions

use thiserror::Error;

use crate::ast::{Node, NodeKind, Operator, Type};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Both operands of a binary operation must have the same type
    #[error("mismatched operand types for '{op}': {left} and {right}")]
    Mismatch {
        op: Operator,
        left: Type,
        right: Type,
    },

    #[error("cannot determine the type of a {0} node")]
    Unresolvable(NodeKind),
}

/// Infer the static type of an expression
pub fn type_of(node: &Node) -> Result<Type, TypeError> {
    match node {
        Node::BinaryOp(binop) => {
            let left = type_of(&binop.left)?;
            let right = type_of(&binop.right)?;
            if left == right {
                Ok(left)
            } else {
                Err(TypeError::Mismatch {
                    op: binop.op,
                    left,
                    right,
                })
            }
        }
        Node::Value(value) => Ok(value.ty()),
        Node::Variable(var) => Ok(var.decl.ty),
        other => Err(TypeError::Unresolvable(other.kind())),
    }
}

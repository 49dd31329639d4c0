//! Explicit tree teardown
//!
//! Dropping a `Node` frees it recursively. `release` does the same work
//! with a heap-allocated work stack, so arbitrarily deep trees cannot
//! exhaust the call stack.

use tracing::trace;

use super::node::{BinaryOp, Function, Node, Variable};

/// Release `node` and every node it owns. Returns the number of nodes freed.
///
/// Children are detached from their owner before the owner itself is
/// dropped; nothing is reachable once its owner is gone.
pub fn release(node: Node) -> usize {
    let mut pending = vec![node];
    let mut released = 0;

    while let Some(node) = pending.pop() {
        match node {
            Node::BinaryOp(BinaryOp { left, right, .. }) => {
                pending.push(*right);
                pending.push(*left);
            }
            Node::Variable(Variable { decl, init }) => {
                pending.push(*init);
                drop(decl);
            }
            Node::Statements(statements) => pending.extend(statements),
            Node::Function(Function { body, params, .. }) => {
                pending.extend(body);
                drop(params);
            }
            Node::Value(_)
            | Node::VariableDeclaration(_)
            | Node::VariableDeclarations(_)
            | Node::If(_)
            | Node::While(_)
            | Node::For(_) => {}
        }
        released += 1;
    }

    trace!(released, "released tree");
    released
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Operator, Type};

    #[test]
    fn test_release_counts_nodes() {
        // let x: int = (1 + 2); -> Variable, BinaryOp, two Values
        let node = Node::variable(
            Type::Int,
            "x",
            Node::binary(Node::int(1), Operator::Add, Node::int(2)),
        );
        assert_eq!(release(node), 4);
    }

    #[test]
    fn test_release_statements() {
        let node = Node::statements([Node::int(1), Node::string("two"), Node::int(3)]);
        assert_eq!(release(node), 4);
    }

    #[test]
    fn test_release_deep_tree() {
        let mut node = Node::int(0);
        for i in 1..=100_000 {
            node = Node::binary(node, Operator::Add, Node::int(i));
        }
        assert_eq!(release(node), 200_001);
    }
}

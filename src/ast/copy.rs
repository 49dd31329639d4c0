//! Deep copy of syntax trees
//!
//! A copy shares nothing with its source: every child node and every
//! string payload is duplicated.

use super::node::{BinaryOp, Function, Node, Reserved, Statements, Variable};

/// Produce an independently owned clone of `node` and everything below it
pub fn deep_copy(node: &Node) -> Node {
    match node {
        Node::BinaryOp(op) => Node::BinaryOp(copy_binary_op(op)),
        Node::Variable(var) => Node::Variable(copy_variable(var)),
        Node::Value(value) => Node::Value(value.clone()),
        Node::VariableDeclaration(decl) => Node::VariableDeclaration(decl.clone()),
        Node::VariableDeclarations(decls) => Node::VariableDeclarations(decls.clone()),
        Node::Statements(statements) => Node::Statements(copy_statements(statements)),
        Node::Function(func) => Node::Function(copy_function(func)),
        // Not lowered yet: tag-only copy
        Node::If(_) => Node::If(Reserved),
        Node::While(_) => Node::While(Reserved),
        Node::For(_) => Node::For(Reserved),
    }
}

fn copy_binary_op(op: &BinaryOp) -> BinaryOp {
    BinaryOp {
        left: Box::new(deep_copy(&op.left)),
        right: Box::new(deep_copy(&op.right)),
        op: op.op,
    }
}

fn copy_variable(var: &Variable) -> Variable {
    Variable {
        decl: var.decl.clone(),
        init: Box::new(deep_copy(&var.init)),
    }
}

/// Copies walk the source list so the result keeps its length and order
fn copy_statements(statements: &Statements) -> Statements {
    let mut copy = Statements(Vec::with_capacity(statements.len()));
    for statement in statements {
        copy.push(deep_copy(statement));
    }
    copy
}

fn copy_function(func: &Function) -> Function {
    Function {
        identifier: func.identifier.clone(),
        return_type: func.return_type,
        params: func.params.clone(),
        body: copy_statements(&func.body),
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        deep_copy(self)
    }
}

//! Construction API used by the grammar builder
//!
//! Every factory produces exactly one entity and takes ownership of the
//! nodes handed to it. A caller must not keep a node after passing it in.

use thiserror::Error;

use super::node::{
    BinaryOp, Function, Node, NodeKind, Reserved, Statements, Value, Variable,
    VariableDeclaration, VariableDeclarations,
};
use super::ops::Operator;
use super::types::Type;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("a {0} node cannot be created without a payload")]
    MissingPayload(NodeKind),
}

/// Create a node of the given kind with an empty payload
///
/// Only kinds that have a meaningful empty payload can be created this way:
/// statement lists, parameter lists and the reserved control-flow kinds.
pub fn make_node(kind: NodeKind) -> Result<Node, BuildError> {
    match kind {
        NodeKind::Statements => Ok(Node::Statements(Statements::new())),
        NodeKind::VariableDeclarations => {
            Ok(Node::VariableDeclarations(VariableDeclarations::default()))
        }
        NodeKind::If => Ok(Node::If(Reserved)),
        NodeKind::While => Ok(Node::While(Reserved)),
        NodeKind::For => Ok(Node::For(Reserved)),
        NodeKind::BinaryOp
        | NodeKind::Variable
        | NodeKind::Value
        | NodeKind::Function
        | NodeKind::VariableDeclaration => Err(BuildError::MissingPayload(kind)),
    }
}

pub fn make_value_int(value: i64) -> Value {
    Value::Int(value)
}

pub fn make_value_string(value: impl Into<String>) -> Value {
    Value::String(value.into())
}

pub fn make_binary_op(left: Node, right: Node, op: Operator) -> BinaryOp {
    BinaryOp {
        left: Box::new(left),
        right: Box::new(right),
        op,
    }
}

pub fn make_variable_declaration(ty: Type, identifier: impl Into<String>) -> VariableDeclaration {
    VariableDeclaration {
        ty,
        identifier: identifier.into(),
    }
}

pub fn make_variable(decl: VariableDeclaration, init: Node) -> Variable {
    Variable {
        decl,
        init: Box::new(init),
    }
}

pub fn make_function(
    identifier: impl Into<String>,
    params: VariableDeclarations,
    return_type: Type,
    body: Statements,
) -> Function {
    Function {
        identifier: identifier.into(),
        return_type,
        params,
        body,
    }
}

pub fn make_statements(statements: impl IntoIterator<Item = Node>) -> Statements {
    statements.into_iter().collect()
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::Value(value)
    }
}

impl From<BinaryOp> for Node {
    fn from(op: BinaryOp) -> Self {
        Node::BinaryOp(op)
    }
}

impl From<Variable> for Node {
    fn from(var: Variable) -> Self {
        Node::Variable(var)
    }
}

impl From<VariableDeclaration> for Node {
    fn from(decl: VariableDeclaration) -> Self {
        Node::VariableDeclaration(decl)
    }
}

impl From<VariableDeclarations> for Node {
    fn from(decls: VariableDeclarations) -> Self {
        Node::VariableDeclarations(decls)
    }
}

impl From<Function> for Node {
    fn from(func: Function) -> Self {
        Node::Function(func)
    }
}

impl From<Statements> for Node {
    fn from(statements: Statements) -> Self {
        Node::Statements(statements)
    }
}

//! Tree nodes and their payloads

use std::fmt;

use super::ops::Operator;
use super::types::Type;

/// Payload-free discriminant of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    BinaryOp,
    Variable,
    Value,
    If,
    While,
    For,
    Function,
    VariableDeclaration,
    VariableDeclarations,
    Statements,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::BinaryOp => "BinaryOp",
            NodeKind::Variable => "Variable",
            NodeKind::Value => "Value",
            NodeKind::If => "If",
            NodeKind::While => "While",
            NodeKind::For => "For",
            NodeKind::Function => "Function",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDeclarations => "VariableDeclarations",
            NodeKind::Statements => "Statements",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Marker payload for control-flow nodes that are not lowered yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reserved;

/// A typed literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    String(String),
    Void,
    Auto,
}

impl Value {
    pub fn ty(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::String(_) => Type::String,
            Value::Void => Type::Void,
            Value::Auto => Type::Auto,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Binary operation: left op right
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub op: Operator,
}

/// A typed identifier: `name: type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub ty: Type,
    pub identifier: String,
}

/// A binding: `let <decl> = <init>`
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub decl: VariableDeclaration,
    pub init: Box<Node>,
}

/// Ordered statement sequence, in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statements(pub Vec<Node>);

impl Statements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Node) {
        self.0.push(statement);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }
}

impl FromIterator<Node> for Statements {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Statements(iter.into_iter().collect())
    }
}

impl IntoIterator for Statements {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Statements {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Ordered parameter list of a function signature
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariableDeclarations(pub Vec<VariableDeclaration>);

impl VariableDeclarations {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariableDeclaration> {
        self.0.iter()
    }
}

impl FromIterator<VariableDeclaration> for VariableDeclarations {
    fn from_iter<I: IntoIterator<Item = VariableDeclaration>>(iter: I) -> Self {
        VariableDeclarations(iter.into_iter().collect())
    }
}

/// Function definition: `fn name(params) -> type { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub identifier: String,
    pub return_type: Type,
    pub params: VariableDeclarations,
    pub body: Statements,
}

/// A node in the syntax tree. Every node owns its payload.
#[derive(Debug, PartialEq)]
pub enum Node {
    BinaryOp(BinaryOp),
    Variable(Variable),
    Value(Value),
    If(Reserved),
    While(Reserved),
    For(Reserved),
    Function(Function),
    VariableDeclaration(VariableDeclaration),
    VariableDeclarations(VariableDeclarations),
    Statements(Statements),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::BinaryOp(_) => NodeKind::BinaryOp,
            Node::Variable(_) => NodeKind::Variable,
            Node::Value(_) => NodeKind::Value,
            Node::If(_) => NodeKind::If,
            Node::While(_) => NodeKind::While,
            Node::For(_) => NodeKind::For,
            Node::Function(_) => NodeKind::Function,
            Node::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Node::VariableDeclarations(_) => NodeKind::VariableDeclarations,
            Node::Statements(_) => NodeKind::Statements,
        }
    }

    /// Create an integer literal node
    pub fn int(value: i64) -> Self {
        Node::Value(Value::Int(value))
    }

    /// Create a string literal node
    pub fn string(value: impl Into<String>) -> Self {
        Node::Value(Value::String(value.into()))
    }

    /// Create a binary operation node
    pub fn binary(left: Node, op: Operator, right: Node) -> Self {
        Node::BinaryOp(BinaryOp {
            left: Box::new(left),
            right: Box::new(right),
            op,
        })
    }

    /// Create a binding node: `let name: ty = init`
    pub fn variable(ty: Type, identifier: impl Into<String>, init: Node) -> Self {
        Node::Variable(Variable {
            decl: VariableDeclaration {
                ty,
                identifier: identifier.into(),
            },
            init: Box::new(init),
        })
    }

    /// Create a statement list node
    pub fn statements(statements: impl IntoIterator<Item = Node>) -> Self {
        Node::Statements(statements.into_iter().collect())
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_statements(&self) -> Option<&Statements> {
        match self {
            Node::Statements(statements) => Some(statements),
            _ => None,
        }
    }
}

//! Abstract Syntax Tree (AST) for the Arbor language
//!
//! This module contains the node types, the factories the parser uses to
//! build trees, and the tree walks that copy, print and release them.

pub mod build;
mod copy;
mod node;
mod ops;
mod print;
mod release;
mod span;
mod types;

// Re-export all public types
pub use build::BuildError;
pub use copy::deep_copy;
pub use node::{
    BinaryOp, Function, Node, NodeKind, Reserved, Statements, Value, Variable,
    VariableDeclaration, VariableDeclarations,
};
pub use ops::{
    OPERATORS, Operator, UnknownOperator, operator_code_to_string, operator_to_string, to_operator,
};
pub use print::{render, render_lines};
pub use release::release;
pub use span::{LineCol, Span};
pub use types::Type;

//! Arbor - syntax tree core for a small expression and statement language
//!
//! This crate provides the tree model for the Arbor language together with
//! the lexer and parser that build it and the passes that copy, fold,
//! type, print and release it.

pub mod ast;
pub mod config;
pub mod lexer;
pub mod parser;
pub mod sema;

// Re-export commonly used types
pub use ast::{
    Node, NodeKind, Operator, Span, Type, deep_copy, operator_to_string, release, render,
    to_operator,
};
pub use config::Config;
pub use lexer::lex;
pub use parser::Parser;
pub use sema::{analyze, constant_fold, type_of};

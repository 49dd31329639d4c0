//! Semantic Analysis module
//!
//! This module is responsible for:
//! - Type inference over expressions
//! - Constant expression evaluation
//! - Checking every binding's initializer against its declared type

pub mod const_eval;
pub mod resolve;

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::ast::{Node, Type, Value, Variable};

pub use const_eval::{FoldError, apply_operator, constant_fold};
pub use resolve::{TypeError, type_of};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemaError {
    /// Initializer type could not be inferred
    #[error("in binding '{name}': {source}")]
    Type { name: String, source: TypeError },

    /// Integer initializer could not be folded
    #[error("in binding '{name}': {source}")]
    Fold { name: String, source: FoldError },

    /// Declared type disagrees with the initializer
    #[error("binding '{name}' is declared {declared} but initialized with a {found} value")]
    BindingMismatch {
        name: String,
        declared: Type,
        found: Type,
    },
}

/// Compile-time value of a binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingValue {
    Int(i64),
    String(String),
    /// Well-typed string expression that is not a single literal
    NotConstant,
    /// No compile-time value is available
    Unknown,
}

/// A checked `let` binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub ty: Type,
    pub value: BindingValue,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} = ", self.name, self.ty)?;
        match &self.value {
            BindingValue::Int(n) => write!(f, "{}", n),
            BindingValue::String(s) => write!(f, "\"{}\"", s),
            BindingValue::NotConstant => f.write_str("<not constant>"),
            BindingValue::Unknown => f.write_str("<ERROR>"),
        }
    }
}

/// Check and evaluate every binding reachable from `root`, in source order
///
/// Function bodies are visited where the function appears.
pub fn analyze(root: &Node) -> Result<Vec<Binding>, SemaError> {
    let mut bindings = Vec::new();
    collect_bindings(root, &mut bindings)?;
    debug!(bindings = bindings.len(), "analysis complete");
    Ok(bindings)
}

fn collect_bindings(node: &Node, out: &mut Vec<Binding>) -> Result<(), SemaError> {
    match node {
        Node::Statements(statements) => {
            for statement in statements {
                collect_bindings(statement, out)?;
            }
        }
        Node::Function(func) => {
            debug!(function = %func.identifier, "analyzing function body");
            for statement in &func.body {
                collect_bindings(statement, out)?;
            }
        }
        Node::Variable(var) => out.push(check_binding(var)?),
        _ => {}
    }
    Ok(())
}

/// Check a single binding and compute its value
pub fn check_binding(var: &Variable) -> Result<Binding, SemaError> {
    let name = &var.decl.identifier;

    let found = type_of(&var.init).map_err(|source| SemaError::Type {
        name: name.clone(),
        source,
    })?;

    let ty = match var.decl.ty {
        declared if !declared.is_resolved() => found,
        declared if declared == found => declared,
        declared => {
            return Err(SemaError::BindingMismatch {
                name: name.clone(),
                declared,
                found,
            });
        }
    };

    let value = match ty {
        Type::Int => {
            let n = constant_fold(&var.init).map_err(|source| SemaError::Fold {
                name: name.clone(),
                source,
            })?;
            BindingValue::Int(n)
        }
        Type::String => match var.init.as_value() {
            Some(Value::String(s)) => BindingValue::String(s.clone()),
            _ => BindingValue::NotConstant,
        },
        Type::Void | Type::Auto => BindingValue::Unknown,
    };

    Ok(Binding {
        name: name.clone(),
        ty,
        value,
    })
}

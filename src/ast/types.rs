//! Static types of the language

use std::fmt;

/// The static type of a value, declaration or expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Signed integer, at least 64 bits wide
    Int,
    /// Owned text
    String,
    /// No value
    Void,
    /// Not yet resolved; inferred from the initializer
    Auto,
}

impl Type {
    /// Returns the keyword used for this type in source code
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::String => "string",
            Type::Void => "void",
            Type::Auto => "auto",
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Type::Auto)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

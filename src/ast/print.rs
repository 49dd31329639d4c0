//! Diagnostic tree rendering
//!
//! Produces an indented, pre-order view of a tree:
//!
//! ```text
//! `-BinaryOp:
//!   |-Operator: +
//!   |-Left:
//!   | `-Value: 3
//!   `-Right:
//!     `-Value: 4
//! ```
//!
//! Rendering is read-only and performs no I/O; callers decide where the
//! text goes.

use super::node::{Function, Node, Value, VariableDeclaration};

const ARROW: &str = "|-";
const END_ARROW: &str = "`-";
const SEGMENT: &str = "| ";
const END_SEGMENT: &str = "  ";

/// Render a tree to text, one line per entry, each terminated by a newline
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    for line in render_lines(node) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render a tree as individual lines
pub fn render_lines(node: &Node) -> Vec<String> {
    let mut printer = TreePrinter::default();
    printer.node(node, "", true);
    printer.lines
}

#[derive(Default)]
struct TreePrinter {
    lines: Vec<String>,
}

impl TreePrinter {
    fn line(&mut self, prefix: &str, last: bool, text: &str) {
        let arrow = if last { END_ARROW } else { ARROW };
        self.lines.push(format!("{prefix}{arrow}{text}"));
    }

    fn node(&mut self, node: &Node, prefix: &str, last: bool) {
        let inner = nested(prefix, last);

        match node {
            Node::BinaryOp(op) => {
                self.line(prefix, last, "BinaryOp:");
                self.line(&inner, false, &format!("Operator: {}", op.op));
                self.labelled(&inner, false, "Left", &op.left);
                self.labelled(&inner, true, "Right", &op.right);
            }
            Node::Value(value) => {
                self.line(prefix, last, &format!("Value: {}", value_text(value)));
            }
            Node::Variable(var) => {
                self.line(prefix, last, "Variable:");
                self.line(&inner, false, &format!("typeinfo: {}", var.decl.ty));
                self.line(&inner, false, &format!("identifier: {}", var.decl.identifier));
                self.labelled(&inner, true, "init", &var.init);
            }
            Node::VariableDeclaration(decl) => {
                self.line(prefix, last, "VariableDeclaration:");
                self.line(&inner, false, &format!("typeinfo: {}", decl.ty));
                self.line(&inner, true, &format!("identifier: {}", decl.identifier));
            }
            Node::VariableDeclarations(decls) => {
                self.line(prefix, last, "VariableDeclarations:");
                self.declarations(&inner, decls.iter());
            }
            Node::Statements(statements) => {
                self.line(prefix, last, "Statements:");
                let count = statements.len();
                for (i, statement) in statements.iter().enumerate() {
                    self.node(statement, &inner, i + 1 == count);
                }
            }
            Node::Function(func) => self.function(func, prefix, last),
            Node::If(_) | Node::While(_) | Node::For(_) => {
                self.line(prefix, last, &format!("{}: <not lowered>", node.kind()));
            }
        }
    }

    fn labelled(&mut self, prefix: &str, last: bool, label: &str, child: &Node) {
        self.line(prefix, last, &format!("{label}:"));
        self.node(child, &nested(prefix, last), true);
    }

    fn declarations<'a>(
        &mut self,
        prefix: &str,
        decls: impl ExactSizeIterator<Item = &'a VariableDeclaration>,
    ) {
        let count = decls.len();
        for (i, decl) in decls.enumerate() {
            self.line(
                prefix,
                i + 1 == count,
                &format!("{}: {}", decl.identifier, decl.ty),
            );
        }
    }

    fn function(&mut self, func: &Function, prefix: &str, last: bool) {
        let inner = nested(prefix, last);

        self.line(prefix, last, "Function:");
        self.line(&inner, false, &format!("identifier: {}", func.identifier));
        self.line(&inner, false, &format!("return type: {}", func.return_type));

        self.line(&inner, false, "Parameters:");
        self.declarations(&nested(&inner, false), func.params.iter());

        self.line(&inner, true, "Body:");
        let body_prefix = nested(&inner, true);
        let count = func.body.len();
        for (i, statement) in func.body.iter().enumerate() {
            self.node(statement, &body_prefix, i + 1 == count);
        }
    }
}

fn nested(prefix: &str, last: bool) -> String {
    let segment = if last { END_SEGMENT } else { SEGMENT };
    format!("{prefix}{segment}")
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::String(s) => format!("\"{s}\""),
        Value::Void => "void".to_string(),
        Value::Auto => "auto".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Operator, Reserved, Statements, Type, VariableDeclarations};

    #[test]
    fn test_render_binary_op() {
        let node = Node::binary(Node::int(3), Operator::Add, Node::int(4));
        let expected = "\
`-BinaryOp:
  |-Operator: +
  |-Left:
  | `-Value: 3
  `-Right:
    `-Value: 4
";
        assert_eq!(render(&node), expected);
    }

    #[test]
    fn test_render_variable() {
        let node = Node::variable(Type::String, "x", Node::string("hi"));
        let expected = "\
`-Variable:
  |-typeinfo: string
  |-identifier: x
  `-init:
    `-Value: \"hi\"
";
        assert_eq!(render(&node), expected);
    }

    #[test]
    fn test_render_statements_branches() {
        let node = Node::statements([Node::int(1), Node::int(2)]);
        assert_eq!(
            render_lines(&node),
            vec!["`-Statements:", "  |-Value: 1", "  `-Value: 2"]
        );
    }

    #[test]
    fn test_render_empty_statements() {
        let node = Node::Statements(Statements::new());
        assert_eq!(render_lines(&node), vec!["`-Statements:"]);
    }

    #[test]
    fn test_render_function() {
        let func = Function {
            identifier: "f".to_string(),
            return_type: Type::Int,
            params: VariableDeclarations(vec![VariableDeclaration {
                ty: Type::Int,
                identifier: "a".to_string(),
            }]),
            body: Statements(vec![Node::variable(Type::Int, "y", Node::int(2))]),
        };
        let expected = "\
`-Function:
  |-identifier: f
  |-return type: int
  |-Parameters:
  | `-a: int
  `-Body:
    `-Variable:
      |-typeinfo: int
      |-identifier: y
      `-init:
        `-Value: 2
";
        assert_eq!(render(&Node::Function(func)), expected);
    }

    #[test]
    fn test_render_reserved() {
        assert_eq!(render(&Node::If(Reserved)), "`-If: <not lowered>\n");
    }
}

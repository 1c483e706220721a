//! Diagnostic renderings of an expression tree.

use crate::ast::Expr;

/// Indentation added per tree level in [`to_visual_tree`].
const INDENT: &str = "    ";

/// Renders an expression in prefix (LISP) notation.
///
/// Leaves render as their literal text, a unary node as `(op child)` and a
/// binary node as `(op left right)`. Signs render as `u+`/`u-` so they are
/// not confused with the binary operators.
///
/// # Example
/// ```
/// use complexa::{parse, render::to_lisp};
///
/// assert_eq!(to_lisp(&parse("3+4").unwrap()), "(+ 3 4)");
/// assert_eq!(to_lisp(&parse("-x * conj(2i)").unwrap()), "(* (u- x) (conj 2i))");
/// assert_eq!(to_lisp(&parse("raiz(8, 3)").unwrap()), "(raiz 8 3)");
/// ```
#[must_use]
pub fn to_lisp(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value, .. } => value.to_string(),
        Expr::Variable { name, .. } => name.clone(),
        Expr::UnaryOp { op, expr, .. } => format!("({op} {})", to_lisp(expr)),
        Expr::BinaryOp { left, op, right, .. } => {
            format!("({op} {} {})", to_lisp(left), to_lisp(right))
        },
    }
}

/// Renders an expression as an indented tree, one node per line.
///
/// Each line names the node kind and its value or operator. Children are
/// indented one level deeper than their parent, the left child listed
/// before the right child.
///
/// # Example
/// ```
/// use complexa::{parse, render::to_visual_tree};
///
/// let tree = to_visual_tree(&parse("2*(x-1i)").unwrap());
/// assert_eq!(tree,
///            "└── BinaryOp: *\n\
///             \x20   └── Number: 2\n\
///             \x20   └── BinaryOp: -\n\
///             \x20       └── Variable: x\n\
///             \x20       └── Number: 1i");
/// ```
#[must_use]
pub fn to_visual_tree(expr: &Expr) -> String {
    visual_tree_lines(expr).join("\n")
}

/// Returns the lines of [`to_visual_tree`] without joining them.
#[must_use]
pub fn visual_tree_lines(expr: &Expr) -> Vec<String> {
    let mut lines = Vec::new();
    push_lines(expr, 0, &mut lines);
    lines
}

fn push_lines(expr: &Expr, depth: usize, lines: &mut Vec<String>) {
    let prefix = INDENT.repeat(depth);
    match expr {
        Expr::Literal { value, .. } => lines.push(format!("{prefix}└── Number: {value}")),
        Expr::Variable { name, .. } => lines.push(format!("{prefix}└── Variable: {name}")),
        Expr::UnaryOp { op, expr, .. } => {
            lines.push(format!("{prefix}└── UnaryOp: {op}"));
            push_lines(expr, depth + 1, lines);
        },
        Expr::BinaryOp { left, op, right, .. } => {
            lines.push(format!("{prefix}└── BinaryOp: {op}"));
            push_lines(left, depth + 1, lines);
            push_lines(right, depth + 1, lines);
        },
    }
}

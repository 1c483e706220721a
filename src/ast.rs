use std::collections::BTreeSet;

use crate::interpreter::value::complex::ComplexNumber;

/// An abstract syntax tree (AST) node representing an expression.
///
/// The tree is built once by the parser and never mutated afterwards. Every
/// node owns its children exclusively, and every node records the column
/// (0-based byte offset) of the token it was built from, for error
/// reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, real (`3`) or imaginary (`4i`).
    Literal {
        /// The constant value.
        value:  ComplexNumber,
        /// Column in the source expression.
        column: usize,
    },
    /// Reference to a variable by name. Names are case-sensitive.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Column in the source expression.
        column: usize,
    },
    /// A unary operation (sign or conjugate).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Column in the source expression.
        column: usize,
    },
    /// A binary operation (arithmetic, root or equality).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column in the source expression.
        column: usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    /// ## Example
    /// ```
    /// use complexa::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:   "x".to_string(),
    ///                             column: 5, };
    ///
    /// assert_eq!(expr.column(), 5);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. }
            | Self::Variable { column, .. }
            | Self::UnaryOp { column, .. }
            | Self::BinaryOp { column, .. } => *column,
        }
    }

    /// Collects the distinct variable names referenced anywhere in the tree,
    /// in sorted order.
    ///
    /// ## Example
    /// ```
    /// use complexa::parse;
    ///
    /// let ast = parse("y * x + conj(x)").unwrap();
    /// let names: Vec<String> = ast.variable_names().into_iter().collect();
    /// assert_eq!(names, ["x", "y"]);
    /// ```
    #[must_use]
    pub fn variable_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_variable_names(&mut names);
        names
    }

    fn collect_variable_names(&self, names: &mut BTreeSet<String>) {
        match self {
            Self::Literal { .. } => {},
            Self::Variable { name, .. } => {
                names.insert(name.clone());
            },
            Self::UnaryOp { expr, .. } => expr.collect_variable_names(names),
            Self::BinaryOp { left, right, .. } => {
                left.collect_variable_names(names);
                right.collect_variable_names(names);
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`, or implicit by adjacency)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
    /// N-th root, `raiz(base, order)` meaning `base ** (1 / order)`
    Root,
    /// Tolerant equality (`=`)
    Equals,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (e.g. `+x`), the identity.
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Complex conjugate (e.g. `conj(x)` or `conj x`).
    Conj,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Equals, Mul, Pow, Root, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "**",
            Root => "raiz",
            Equals => "=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "u+",
            Self::Negate => "u-",
            Self::Conj => "conj",
        };
        write!(f, "{operator}")
    }
}

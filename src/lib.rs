//! # complexa
//!
//! complexa is a calculator for arithmetic over complex numbers.
//! It tokenizes and parses expressions such as `2(3+4i) - conj(z)**2` into an
//! abstract syntax tree, evaluates the tree against a set of variable
//! bindings, and renders it in LISP notation or as an indented tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::{BTreeSet, HashMap};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::tokenize,
        parser::core::parse_tokens,
        value::{complex::ComplexNumber, core::Value},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that
/// represent an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator and the renderers.
///
/// # Responsibilities
/// - Defines the four node kinds: literal, variable, unary and binary.
/// - Attaches source columns to nodes for error reporting.
/// - Collects the variable names a tree references.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating an expression, each carrying the column where it
/// happened.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and value types.
pub mod interpreter;
/// Renders expression trees as LISP strings and indented trees.
pub mod render;
/// General numeric helpers.
///
/// Tolerance-aware comparisons and rounding shared by the value type and
/// the front end.
pub mod util;

pub use render::{to_lisp, to_visual_tree};

/// Parses an expression into its syntax tree.
///
/// # Errors
/// Returns a `ParseError` for invalid characters (see
/// [`ParseError::is_lexical`]) and for any grammar violation.
///
/// # Examples
/// ```
/// use complexa::{parse, to_lisp};
///
/// let ast = parse("2**3**2").unwrap();
/// assert_eq!(to_lisp(&ast), "(** 2 (** 3 2))");
///
/// assert!(parse("3 + (4").is_err());
/// assert!(parse("3 # 4").unwrap_err().is_lexical());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens)
}

/// Evaluates a syntax tree against the given variable bindings.
///
/// # Errors
/// Returns a `RuntimeError` for undefined variables and for domain errors
/// such as division by zero.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use complexa::{
///     evaluate,
///     interpreter::value::{complex::ComplexNumber, core::Value},
///     parse,
/// };
///
/// let bindings = HashMap::from([("x".to_string(), ComplexNumber::new(2.0, 1.0)),
///                               ("y".to_string(), ComplexNumber::new(3.0, 2.0))]);
///
/// let result = evaluate(&parse("x+y").unwrap(), &bindings).unwrap();
/// assert_eq!(result, Value::Complex(ComplexNumber::new(5.0, 3.0)));
///
/// // Unknown variable
/// assert!(evaluate(&parse("x+z").unwrap(), &bindings).is_err());
/// ```
pub fn evaluate<S>(expr: &Expr, bindings: &HashMap<String, ComplexNumber, S>) -> EvalResult<Value>
    where S: std::hash::BuildHasher
{
    let context = Context::with_bindings(bindings.iter()
                                                 .map(|(name, value)| (name.clone(), *value))
                                                 .collect());
    context.eval(expr)
}

/// Returns the distinct variable names referenced by a tree, sorted.
///
/// # Examples
/// ```
/// use complexa::{collect_variable_names, parse};
///
/// let ast = parse("a*b + a**2 - B").unwrap();
/// let names: Vec<_> = collect_variable_names(&ast).into_iter().collect();
/// assert_eq!(names, ["B", "a", "b"]);
/// ```
#[must_use]
pub fn collect_variable_names(expr: &Expr) -> BTreeSet<String> {
    expr.variable_names()
}

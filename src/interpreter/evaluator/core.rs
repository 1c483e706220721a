use std::collections::HashMap;

use log::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::value::{complex::ComplexNumber, core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the values bound to variable names. It is only read
/// during evaluation, so one context can evaluate any number of trees.
///
/// ## Usage
///
/// ```
/// use complexa::{
///     interpreter::{
///         evaluator::core::Context,
///         value::{complex::ComplexNumber, core::Value},
///     },
///     parse,
/// };
///
/// let mut context = Context::new();
/// context.bind("z", ComplexNumber::new(1.0, 1.0));
///
/// let ast = parse("z * conj(z)").unwrap();
/// assert_eq!(context.eval(&ast).unwrap(),
///            Value::Complex(ComplexNumber::new(2.0, 0.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Values of the variables, keyed by exact (case-sensitive) name.
    pub bindings: HashMap<String, ComplexNumber>,
}

impl Context {
    /// Creates a new evaluation context with no variables bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context from an existing set of bindings.
    #[must_use]
    pub const fn with_bindings(bindings: HashMap<String, ComplexNumber>) -> Self {
        Self { bindings }
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: ComplexNumber) {
        self.bindings.insert(name.into(), value);
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the node variant; binary nodes evaluate their left
    /// operand before their right one. Arithmetic yields
    /// [`Value::Complex`], the `=` operator yields [`Value::Bool`].
    ///
    /// # Errors
    /// - `UndefinedVariable` for a name with no binding.
    /// - Domain errors from complex arithmetic (`DivisionByZero`,
    ///   `InvalidPower`, `Overflow`).
    /// - `ExpectedNumber` when a comparison result is used as a number.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::Complex(*value)),
            Expr::Variable { name, column } => self.eval_variable(name, *column),
            Expr::UnaryOp { op, expr, column } => self.eval_unary_op(*op, expr, *column),
            Expr::BinaryOp { left,
                             op,
                             right,
                             column, } => self.eval_binary_op(left, *op, right, *column),
        }
    }

    /// Looks up a variable by exact name.
    fn eval_variable(&self, name: &str, column: usize) -> EvalResult<Value> {
        match self.bindings.get(name) {
            Some(value) => Ok(Value::Complex(*value)),
            None => {
                debug!("no binding for variable '{name}'");
                Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                      column })
            },
        }
    }
}

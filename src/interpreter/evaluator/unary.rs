use log::debug;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates the operand of a unary node, then applies the operator.
    pub(crate) fn eval_unary_op(&self,
                                op: UnaryOperator,
                                expr: &Expr,
                                column: usize)
                                -> EvalResult<Value> {
        let value = self.eval(expr)?;
        let result = Self::eval_unary(op, &value, column)?;
        debug!("{op} {value} => {result}");
        Ok(result)
    }

    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: identity.
    /// - `Negate`: negates both components.
    /// - `Conj`: complex conjugate.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedNumber` if the operand is a comparison
    /// result.
    ///
    /// # Example
    /// ```
    /// use complexa::{
    ///     ast::UnaryOperator,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         value::{complex::ComplexNumber, core::Value},
    ///     },
    /// };
    ///
    /// let z = Value::Complex(ComplexNumber::new(3.0, 4.0));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &z, 0).unwrap();
    /// assert_eq!(v, Value::Complex(ComplexNumber::new(-3.0, -4.0)));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Conj, &z, 0).unwrap();
    /// assert_eq!(v, Value::Complex(ComplexNumber::new(3.0, -4.0)));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, column: usize) -> EvalResult<Value> {
        let z = value.as_complex(column)?;
        let result = match op {
            UnaryOperator::Plus => z,
            UnaryOperator::Negate => -z,
            UnaryOperator::Conj => z.conj(),
        };
        Ok(Value::Complex(result))
    }
}

use log::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{complex::ONE, core::Value},
    },
};

impl Context {
    /// Evaluates both operands of a binary node, left first, then applies
    /// the operator.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 column: usize)
                                 -> EvalResult<Value> {
        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;

        match Self::eval_binary(op, &lhs, &rhs, column) {
            Ok(result) => {
                debug!("({op} {lhs} {rhs}) => {result}");
                Ok(result)
            },
            Err(e) => {
                debug!("({op} {lhs} {rhs}) failed: {e}");
                Err(e)
            },
        }
    }

    /// Evaluates a binary operation on two values.
    ///
    /// - `Add`, `Sub`, `Mul`, `Div` map directly onto complex arithmetic.
    /// - `Pow` raises the left value to the (possibly complex) right value.
    /// - `Root` computes `left ** (1 / right)`.
    /// - `Equals` compares with the fixed absolute tolerance and yields a
    ///   boolean.
    ///
    /// # Errors
    /// - Domain errors from complex arithmetic, tagged with `column`.
    /// - `RuntimeError::ExpectedNumber` if either operand is a comparison
    ///   result; comparisons do not chain or nest as numbers.
    ///
    /// # Example
    /// ```
    /// use complexa::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         value::{complex::ComplexNumber, core::Value},
    ///     },
    /// };
    ///
    /// let nine = Value::Complex(ComplexNumber::new(9.0, 0.0));
    /// let two = Value::Complex(ComplexNumber::new(2.0, 0.0));
    /// let zero = Value::Complex(ComplexNumber::new(0.0, 0.0));
    ///
    /// let root = Context::eval_binary(BinaryOperator::Root, &nine, &two, 0).unwrap();
    /// assert_eq!(root, Value::Complex(ComplexNumber::new(3.0, 0.0)));
    ///
    /// let err = Context::eval_binary(BinaryOperator::Div, &nine, &zero, 4).unwrap_err();
    /// assert_eq!(err, RuntimeError::DivisionByZero { column: 4 });
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       column: usize)
                       -> EvalResult<Value> {
        let l = left.as_complex(column)?;
        let r = right.as_complex(column)?;

        let result = match op {
            BinaryOperator::Add => l + r,
            BinaryOperator::Sub => l - r,
            BinaryOperator::Mul => l * r,
            BinaryOperator::Div => l.checked_div(r, column)?,
            BinaryOperator::Pow => l.checked_pow(r, column)?,
            BinaryOperator::Root => {
                let exponent = ONE.checked_div(r, column)?;
                l.checked_pow(exponent, column)?
            },
            BinaryOperator::Equals => return Ok(Value::Bool(l == r)),
        };

        Ok(Value::Complex(result))
    }
}

use std::fmt::Display;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::complex::ComplexNumber},
};

/// Represents the result of evaluating an expression.
///
/// Arithmetic always yields a complex number. Only the equality operator
/// `=` yields a boolean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A complex number (with real and imaginary parts).
    Complex(ComplexNumber),
    /// The outcome of a tolerant comparison (`a = b`).
    Bool(bool),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complex(c) => write!(f, "{c}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Value {
    /// Extracts the complex number, failing for booleans.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedNumber` if the value is a boolean.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::{complex::ComplexNumber, core::Value};
    ///
    /// let v = Value::Complex(ComplexNumber::new(1.0, 2.0));
    /// assert_eq!(v.as_complex(0).unwrap(), ComplexNumber::new(1.0, 2.0));
    /// assert!(Value::Bool(true).as_complex(0).is_err());
    /// ```
    pub fn as_complex(&self, column: usize) -> EvalResult<ComplexNumber> {
        match self {
            Self::Complex(c) => Ok(*c),
            Self::Bool(_) => Err(RuntimeError::ExpectedNumber { column }),
        }
    }

    /// Returns a copy rounded for human display; booleans are unchanged.
    #[must_use]
    pub fn rounded(self, places: u32) -> Self {
        match self {
            Self::Complex(c) => Self::Complex(c.rounded(places)),
            Self::Bool(_) => self,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Domain errors raised by complex arithmetic carry no column; the evaluator
/// attaches the column of the operator that triggered them.
pub enum RuntimeError {
    /// A variable was referenced but no value was bound to it.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// Column of the reference.
        column: usize,
    },
    /// A numeric value was expected, but a boolean was found.
    ExpectedNumber {
        /// Column of the operator that needed the number.
        column: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Column of the operator.
        column: usize,
    },
    /// Raised zero to a negative power.
    InvalidPower {
        /// Column of the operator.
        column: usize,
    },
    /// An exponent was too large to be applied as an integer power.
    Overflow {
        /// Column of the operator.
        column: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, column } => write!(f,
                                                               "Error at column {column}: No value supplied for variable '{name}'."),
            Self::ExpectedNumber { column } => {
                write!(f, "Error at column {column}: Expected a number, found a comparison result.")
            },
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },
            Self::InvalidPower { column } => {
                write!(f, "Error at column {column}: Zero raised to a negative power.")
            },
            Self::Overflow { column } => write!(f,
                                                "Error at column {column}: Exponent is too large to compute the result."),
        }
    }
}

impl std::error::Error for RuntimeError {}

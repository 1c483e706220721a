/// Binary operator evaluation logic.
///
/// Handles arithmetic, power, n-th root and tolerant equality.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements unary plus, negation and conjugation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation entry point, the variable bindings and error
/// propagation.
pub mod core;

/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression: invalid characters, unexpected tokens, unbalanced
/// parentheses, unknown functions and malformed complex literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, including
/// undefined variables and the domain errors of complex arithmetic.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

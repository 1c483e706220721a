/// Core parser entry points and the equality level.
///
/// Defines the parse result type, the top-level `expression` rule and the
/// driver that rejects trailing input.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for `+`/`-`, `*`/`/` (including implicit
/// multiplication) and the right-associative `**`.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix signs, literals, variables, parenthesized groups and the
/// built-in functions `conj` and `raiz`.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides argument-list parsing and parenthesis matching shared by the
/// other parser modules.
pub mod utils;

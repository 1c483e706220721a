/// Floating-point classification helpers.
///
/// This module provides the tolerance-aware predicates shared by the complex
/// value type and the evaluator: deciding whether a component is zero within
/// tolerance, and whether an exponent is an exact integer.
pub mod num;

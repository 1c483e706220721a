/// The complex number type and its arithmetic.
pub mod complex;
/// The `Value` enum produced by evaluation.
pub mod core;

/// Absolute tolerance used for every equality decision on complex values.
pub const TOLERANCE: f64 = 1e-9;

/// Above this magnitude every `f64` is an integer.
const MIN_UNREPRESENTABLE_FRACTION: f64 = 4_503_599_627_370_496.0; // 2^52

/// Returns `true` if `value` lies within [`TOLERANCE`] of zero.
///
/// ## Example
/// ```
/// use complexa::util::num::is_near_zero;
///
/// assert!(is_near_zero(0.0));
/// assert!(is_near_zero(-1e-12));
/// assert!(!is_near_zero(1e-6));
/// ```
#[must_use]
pub fn is_near_zero(value: f64) -> bool {
    value.abs() < TOLERANCE
}

/// Returns `true` if `a` and `b` differ by less than [`TOLERANCE`].
///
/// ## Example
/// ```
/// use complexa::util::num::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// assert!(!approx_eq(1.0, 1.001));
/// ```
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Returns `true` if `value` is finite and has no fractional part.
///
/// Unlike the tolerance checks this is exact: `2.0000000001` is not an
/// integer. Exponents take the De Moivre path only when this holds.
///
/// ## Example
/// ```
/// use complexa::util::num::is_exact_integer;
///
/// assert!(is_exact_integer(3.0));
/// assert!(is_exact_integer(-12.0));
/// assert!(!is_exact_integer(0.5));
/// assert!(!is_exact_integer(f64::NAN));
/// ```
#[must_use]
pub fn is_exact_integer(value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    value.abs() >= MIN_UNREPRESENTABLE_FRACTION || value.fract() == 0.0
}

/// Rounds `value` to `places` decimal places, mapping `-0.0` to `0.0`.
///
/// Values too large to scale are returned unchanged.
///
/// ## Example
/// ```
/// use complexa::util::num::round_to;
///
/// assert_eq!(round_to(1.234_567, 2), 1.23);
/// assert_eq!(round_to(-0.000_000_000_01, 10).to_string(), "0");
/// ```
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let Ok(exponent) = i32::try_from(places) else {
        return value;
    };
    let scale = 10f64.powi(exponent);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

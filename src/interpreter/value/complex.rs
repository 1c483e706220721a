use std::{fmt::Display, ops, str::FromStr};

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::evaluator::core::EvalResult,
    util::num::{approx_eq, is_exact_integer, is_near_zero, round_to},
};

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);

/// Represents a complex number with real and imaginary parts.
///
/// Values are immutable: every operation returns a new number. Equality is
/// tolerant, see [`crate::util::num::TOLERANCE`].
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real, self.imaginary) {
            (real, imaginary) if is_near_zero(imaginary) => write!(f, "{real}"),
            (real, imaginary) if is_near_zero(real) => write!(f, "{imaginary}i"),
            (real, imaginary) if imaginary > 0.0 => write!(f, "{real} + {imaginary}i"),
            (real, imaginary) => write!(f, "{real} - {}i", -imaginary),
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns the modulus (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the complex conjugate of the number.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(1.0, 5.0);
    /// assert_eq!(c.conj(), ComplexNumber::new(1.0, -5.0));
    /// ```
    #[must_use]
    pub const fn conj(&self) -> Self {
        Self { real:      self.real,
               imaginary: -self.imaginary, }
    }

    /// Returns the argument (phase angle) in radians, in `(-pi, pi]`.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert!((c.arg() - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Divides `self` by `rhs`, computed as `self * conj(rhs) / |rhs|^2`.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if both components of `rhs`
    /// are within tolerance of zero.
    ///
    /// # Example
    /// ```
    /// use complexa::{
    ///     error::RuntimeError,
    ///     interpreter::value::complex::{ComplexNumber, ZERO},
    /// };
    ///
    /// let q = ComplexNumber::new(3.0, 2.0).checked_div(ComplexNumber::new(1.0, -1.0), 0)
    ///                                      .unwrap();
    /// assert_eq!(q, ComplexNumber::new(0.5, 2.5));
    ///
    /// let err = ComplexNumber::new(1.0, 1.0).checked_div(ZERO, 7).unwrap_err();
    /// assert_eq!(err, RuntimeError::DivisionByZero { column: 7 });
    /// ```
    pub fn checked_div(self, rhs: Self, column: usize) -> EvalResult<Self> {
        if is_near_zero(rhs.real) && is_near_zero(rhs.imaginary) {
            return Err(RuntimeError::DivisionByZero { column });
        }

        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        let numerator = self * rhs.conj();

        Ok(Self { real:      numerator.real / denom,
                  imaginary: numerator.imaginary / denom, })
    }

    /// Raises the complex number to a complex power.
    ///
    /// Exponents with a (near) zero imaginary part and an integer real part
    /// use De Moivre's formula, `r^k (cos(k theta) + i sin(k theta))`. All
    /// other exponents go through `exp(w ln z)` on the principal branch.
    ///
    /// A zero base follows fixed rules: `0^0 = 1`, a positive real exponent
    /// gives `0`, a negative real exponent is an error, and any other
    /// exponent gives `0`. Both paths treat only a modulus of exactly zero as
    /// a zero base; tiny bases such as `1e-10` are raised normally.
    ///
    /// # Errors
    /// - `RuntimeError::InvalidPower` when zero is raised to a negative
    ///   exponent.
    /// - `RuntimeError::Overflow` when the result is not finite.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{ComplexNumber, ONE};
    ///
    /// let c = ComplexNumber::new(2.0, 1.0);
    /// assert_eq!(c.checked_pow(ComplexNumber::new(2.0, 0.0), 0).unwrap(),
    ///            ComplexNumber::new(3.0, 4.0));
    /// assert_eq!(c.checked_pow(ComplexNumber::new(0.0, 0.0), 0).unwrap(), ONE);
    ///
    /// let root = ComplexNumber::new(-4.0, 0.0).checked_pow(ComplexNumber::new(0.5, 0.0), 0)
    ///                                          .unwrap();
    /// assert_eq!(root, ComplexNumber::new(0.0, 2.0));
    /// ```
    pub fn checked_pow(self, exponent: Self, column: usize) -> EvalResult<Self> {
        let result = if is_near_zero(exponent.imaginary) && is_exact_integer(exponent.real) {
            self.powi_polar(exponent.real, column)?
        } else {
            self.pow_principal(exponent, column)?
        };

        if !result.real.is_finite() || !result.imaginary.is_finite() {
            return Err(RuntimeError::Overflow { column });
        }

        Ok(result)
    }

    /// De Moivre power for an integer-valued exponent `k`.
    fn powi_polar(self, k: f64, column: usize) -> EvalResult<Self> {
        if self.is_zero() && k < 0.0 {
            return Err(RuntimeError::InvalidPower { column });
        }

        let rn = self.abs().powf(k);
        let angle = k * self.arg();

        Ok(Self { real:      rn * angle.cos(),
                  imaginary: rn * angle.sin(), })
    }

    /// General power `exp(w ln z)`.
    fn pow_principal(self, exponent: Self, column: usize) -> EvalResult<Self> {
        if self.is_zero() {
            return match (exponent.real, exponent.imaginary) {
                (0.0, 0.0) => Ok(ONE),
                (real, 0.0) if real > 0.0 => Ok(ZERO),
                (real, 0.0) if real < 0.0 => Err(RuntimeError::InvalidPower { column }),
                _ => Ok(ZERO),
            };
        }

        let w_ln_z = exponent * self.ln();
        Ok(w_ln_z.exp())
    }

    /// Exact zero test used by the power rules, unlike the tolerant `==`.
    fn is_zero(self) -> bool {
        self.abs() == 0.0
    }

    /// Returns the exponential of the complex number.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{ComplexNumber, ONE};
    /// assert_eq!(ComplexNumber::new(0.0, 0.0).exp(), ONE);
    /// ```
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the principal natural logarithm `ln|z| + i arg(z)`.
    ///
    /// The logarithm of zero has a real part of negative infinity.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{ComplexNumber, ZERO};
    /// assert_eq!(ComplexNumber::new(1.0, 0.0).ln(), ZERO);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }

    /// Returns a copy with both components rounded to `places` decimals,
    /// for display. Negative zero becomes zero.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(0.1 + 0.2, -1e-17);
    /// assert_eq!(c.rounded(10).to_string(), "0.3");
    /// ```
    #[must_use]
    pub fn rounded(self, places: u32) -> Self {
        Self { real:      round_to(self.real, places),
               imaginary: round_to(self.imaginary, places), }
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl From<f64> for ComplexNumber {
    fn from(value: f64) -> Self {
        Self { real:      value,
               imaginary: 0.0, }
    }
}

impl From<(f64, f64)> for ComplexNumber {
    fn from(value: (f64, f64)) -> Self {
        Self { real:      value.0,
               imaginary: value.1, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.real, other.real) && approx_eq(self.imaginary, other.imaginary)
    }
}

impl FromStr for ComplexNumber {
    type Err = ParseError;

    /// Reads a complex literal as typed by a user: `3`, `-2.5`, `4i`, `-i`,
    /// `3+4i`, `3 - 4.5i`. Spaces are ignored and `I` is accepted for `i`.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    ///
    /// assert_eq!("3+4i".parse::<ComplexNumber>().unwrap(), ComplexNumber::new(3.0, 4.0));
    /// assert_eq!(" -i ".parse::<ComplexNumber>().unwrap(), ComplexNumber::new(0.0, -1.0));
    /// assert!("3+4j".parse::<ComplexNumber>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidLiteral { input: s.to_string() };
        let compact: String = s.chars()
                               .filter(|c| !c.is_whitespace())
                               .map(|c| if c == 'I' { 'i' } else { c })
                               .collect();

        if compact.is_empty() {
            return Err(invalid());
        }

        let Some(body) = compact.strip_suffix('i') else {
            return parse_component(&compact).map(Self::from).ok_or_else(invalid);
        };

        // Split before the first sign that is not the leading one and not an
        // exponent sign, e.g. `3e-2-4` splits into `3e-2` and `-4`.
        let split = body.char_indices().skip(1).find(|&(idx, c)| {
                                                    (c == '+' || c == '-')
                                                    && !body[..idx].ends_with(['e', 'E'])
                                                });

        let (real, imaginary) = match split {
            Some((idx, _)) => (parse_component(&body[..idx]).ok_or_else(invalid)?,
                               parse_coefficient(&body[idx..]).ok_or_else(invalid)?),
            None => (0.0, parse_coefficient(body).ok_or_else(invalid)?),
        };

        Ok(Self::new(real, imaginary))
    }
}

/// Parses a finite real component.
fn parse_component(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses the coefficient of `i`, where an empty or bare sign means one.
fn parse_coefficient(text: &str) -> Option<f64> {
    match text {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => parse_component(text),
    }
}

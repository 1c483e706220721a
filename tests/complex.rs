use complexa::{
    error::{ParseError, RuntimeError},
    interpreter::value::complex::{ComplexNumber, ONE, ZERO},
};

const SAMPLES: [(f64, f64); 6] =
    [(0.0, 0.0), (1.0, 0.0), (2.0, -3.0), (-1.5, 0.25), (0.0, 7.0), (-4.0, -4.0)];

fn real(value: f64) -> ComplexNumber {
    ComplexNumber::from(value)
}

fn close(a: ComplexNumber, b: ComplexNumber, eps: f64) -> bool {
    (a.real - b.real).abs() < eps && (a.imaginary - b.imaginary).abs() < eps
}

#[test]
fn addition_and_subtraction_are_componentwise() {
    for (a, b) in SAMPLES {
        for (c, d) in SAMPLES {
            let (z1, z2) = (ComplexNumber::new(a, b), ComplexNumber::new(c, d));
            assert_eq!(z1 + z2, ComplexNumber::new(a + c, b + d));
            assert_eq!(z1 - z2, ComplexNumber::new(a - c, b - d));
        }
    }
}

#[test]
fn multiplication_identity() {
    for (a, b) in SAMPLES {
        for (c, d) in SAMPLES {
            let product = ComplexNumber::new(a, b) * ComplexNumber::new(c, d);
            assert_eq!(product, ComplexNumber::new(a * c - b * d, a * d + b * c));
        }
    }
}

#[test]
fn division_undoes_multiplication() {
    for z1 in SAMPLES.map(ComplexNumber::from) {
        for z2 in SAMPLES.map(ComplexNumber::from).into_iter().filter(|z| *z != ZERO) {
            assert_eq!((z1 * z2).checked_div(z2, 0).unwrap(), z1, "({z1}) * ({z2}) / ({z2})");
        }
    }
}

#[test]
fn division_by_zero_fails() {
    for z in SAMPLES.map(ComplexNumber::from) {
        assert_eq!(z.checked_div(ZERO, 3).unwrap_err(),
                   RuntimeError::DivisionByZero { column: 3 });
    }
    // Within tolerance of zero counts as zero.
    assert!(ONE.checked_div(ComplexNumber::new(1e-12, -1e-12), 0).is_err());
}

#[test]
fn conjugate_is_an_involution() {
    for z in SAMPLES.map(ComplexNumber::from) {
        assert_eq!(z.conj().conj(), z);
    }
}

#[test]
fn trivial_exponents() {
    for z in SAMPLES.map(ComplexNumber::from).into_iter().filter(|z| *z != ZERO) {
        assert_eq!(z.checked_pow(ZERO, 0).unwrap(), ONE);
        assert_eq!(z.checked_pow(ONE, 0).unwrap(), z);
    }
}

#[test]
fn integer_powers_follow_de_moivre() {
    let i = ComplexNumber::new(0.0, 1.0);
    assert_eq!(i.checked_pow(real(2.0), 0).unwrap(), ComplexNumber::new(-1.0, 0.0));
    assert_eq!(i.checked_pow(real(3.0), 0).unwrap(), ComplexNumber::new(0.0, -1.0));
    assert_eq!(i.checked_pow(real(-1.0), 0).unwrap(), ComplexNumber::new(0.0, -1.0));

    let z = ComplexNumber::new(1.0, 1.0);
    assert_eq!(z.checked_pow(real(8.0), 0).unwrap(), ComplexNumber::new(16.0, 0.0));
    assert_eq!(z.checked_pow(real(-2.0), 0).unwrap(), ComplexNumber::new(0.0, -0.5));
}

#[test]
fn root_recovers_power() {
    for (z, n) in [(ComplexNumber::new(2.0, 1.0), 2.0),
                   (ComplexNumber::new(1.5, 0.5), 3.0),
                   (ComplexNumber::new(0.5, -0.3), 4.0),
                   (ComplexNumber::new(9.0, 0.0), 5.0)]
    {
        let inverse = ONE.checked_div(real(n), 0).unwrap();
        let back = z.checked_pow(real(n), 0)
                    .and_then(|p| p.checked_pow(inverse, 0))
                    .unwrap();
        assert!(close(back, z, 1e-7), "({z})**{n} root gave {back}");
    }
}

#[test]
fn complex_exponent() {
    // i**i is real: e^(-pi/2).
    let i = ComplexNumber::new(0.0, 1.0);
    let result = i.checked_pow(i, 0).unwrap();
    assert_eq!(result, ComplexNumber::new((-std::f64::consts::FRAC_PI_2).exp(), 0.0));
}

#[test]
fn zero_base_rules() {
    assert_eq!(ZERO.checked_pow(ZERO, 0).unwrap(), ONE);
    assert_eq!(ZERO.checked_pow(real(2.0), 0).unwrap(), ZERO);
    assert_eq!(ZERO.checked_pow(real(0.5), 0).unwrap(), ZERO);
    assert_eq!(ZERO.checked_pow(ComplexNumber::new(1.0, 1.0), 0).unwrap(), ZERO);
    assert_eq!(ZERO.checked_pow(real(-1.0), 4).unwrap_err(),
               RuntimeError::InvalidPower { column: 4 });
    assert_eq!(ZERO.checked_pow(real(-0.5), 4).unwrap_err(),
               RuntimeError::InvalidPower { column: 4 });
}

#[test]
fn tiny_base_is_not_treated_as_zero() {
    let tiny = real(1e-10);

    let inverse = tiny.checked_pow(real(-1.0), 0).unwrap();
    assert!((inverse.real / 1e10 - 1.0).abs() < 1e-9);
    assert!(inverse.imaginary.abs() < 1e-9);

    let fractional = tiny.checked_pow(real(-1.5), 0).unwrap();
    assert!((fractional.real / 1e15 - 1.0).abs() < 1e-9);

    assert_eq!(tiny.checked_pow(real(2.0), 0).unwrap(), ZERO);
}

#[test]
fn overflowing_power_fails() {
    let err = ComplexNumber::new(10.0, 0.0).checked_pow(real(400.0), 2).unwrap_err();
    assert_eq!(err, RuntimeError::Overflow { column: 2 });
}

#[test]
fn modulus_and_argument() {
    let z = ComplexNumber::new(-3.0, 4.0);
    assert!((z.abs() - 5.0).abs() < 1e-12);
    assert!((ComplexNumber::new(-1.0, 0.0).arg() - std::f64::consts::PI).abs() < 1e-12);
    assert!((ComplexNumber::new(0.0, -2.0).arg() + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn equality_is_tolerant() {
    assert_eq!(ComplexNumber::new(1.0, 2.0), ComplexNumber::new(1.0 + 1e-11, 2.0 - 1e-11));
    assert_ne!(ComplexNumber::new(1.0, 2.0), ComplexNumber::new(1.0 + 1e-6, 2.0));
    assert_ne!(ComplexNumber::new(1.0, 2.0), ComplexNumber::new(1.0, -2.0));
}

#[test]
fn display_forms() {
    assert_eq!(ComplexNumber::new(3.0, 4.0).to_string(), "3 + 4i");
    assert_eq!(ComplexNumber::new(3.0, -4.5).to_string(), "3 - 4.5i");
    assert_eq!(ComplexNumber::new(0.0, -2.0).to_string(), "-2i");
    assert_eq!(ComplexNumber::new(2.5, 0.0).to_string(), "2.5");
    assert_eq!(ComplexNumber::new(2.5, 1e-12).to_string(), "2.5");
    assert_eq!(ZERO.to_string(), "0");
}

#[test]
fn rounding_for_display() {
    let z = ComplexNumber::new(1.0 / 3.0, -2.0 / 3.0).rounded(4);
    assert_eq!(z.to_string(), "0.3333 - 0.6667i");

    let tiny = ComplexNumber::new(-1e-15, 2.0).rounded(10);
    assert_eq!(tiny.to_string(), "2i");
    assert!(tiny.real.is_sign_positive());
}

#[test]
fn parses_user_literals() {
    for (input, expected) in [("3", (3.0, 0.0)),
                              ("-2.5", (-2.5, 0.0)),
                              ("4i", (0.0, 4.0)),
                              ("i", (0.0, 1.0)),
                              ("+i", (0.0, 1.0)),
                              ("-i", (0.0, -1.0)),
                              ("3+4i", (3.0, 4.0)),
                              ("3.2+4.1i", (3.2, 4.1)),
                              (" 3 - 4.5 i ", (3.0, -4.5)),
                              ("-1-i", (-1.0, -1.0)),
                              ("2I", (0.0, 2.0)),
                              ("1e-3+2i", (0.001, 2.0))]
    {
        let parsed: ComplexNumber =
            input.parse().unwrap_or_else(|e| panic!("'{input}' was rejected: {e}"));
        assert_eq!(parsed, ComplexNumber::from(expected), "parsing '{input}'");
    }
}

#[test]
fn rejects_malformed_literals() {
    for input in ["", "   ", "abc", "3+4j", "3+4ii", "i3", "inf", "1+", "--1"] {
        let err = input.parse::<ComplexNumber>().unwrap_err();
        assert_eq!(err,
                   ParseError::InvalidLiteral { input: input.to_string() },
                   "'{input}' should be rejected");
    }
}

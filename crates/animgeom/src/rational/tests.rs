use super::*;
use proptest::prelude::*;

fn r(p: i64, q: i64) -> Rational {
    Rational::new(p, q).unwrap()
}

#[test]
fn construction_is_canonical() {
    let a = r(6, -4);
    assert_eq!((a.numerator(), a.denominator()), (-3, 2));
    let z = r(0, -7);
    assert_eq!((z.numerator(), z.denominator()), (0, 1));
    assert_eq!(Rational::new(1, 0), Err(RationalError::DivisionByZero));
    // -2^63 / -1 has no i64 numerator
    assert_eq!(Rational::new(i64::MIN, -1), Err(RationalError::Overflow));
    assert_eq!(r(i64::MIN, -2).numerator(), 1i64 << 62);
}

#[test]
fn basic_arithmetic() {
    assert_eq!(r(1, 3) + r(1, 6), r(1, 2));
    assert_eq!(r(1, 3) - r(1, 2), r(-1, 6));
    assert_eq!(r(2, 3) * r(9, 4), r(3, 2));
    assert_eq!(r(2, 3) / r(4, 9), r(3, 2));
    assert_eq!(-r(2, 3), r(-2, 3));
    assert_eq!(r(-5, 7).abs(), r(5, 7));
    assert_eq!(r(3, 4).checked_div(Rational::ZERO), Err(RationalError::DivisionByZero));
    assert_eq!(Rational::ZERO.recip(), Err(RationalError::DivisionByZero));
}

#[test]
fn modulo_is_floored() {
    assert_eq!(r(7, 2) % r(1, 1), r(1, 2));
    assert_eq!(r(-7, 2) % r(1, 1), r(1, 2));
    assert_eq!(r(7, 2) % r(-1, 1), r(-1, 2));
    assert_eq!(r(5, 3) % r(1, 2), r(1, 6));
    assert_eq!(r(1, 2).checked_rem(Rational::ZERO), Err(RationalError::DivisionByZero));
}

#[test]
fn powers() {
    assert_eq!(r(2, 3).checked_pow(3), Ok(r(8, 27)));
    assert_eq!(r(2, 3).checked_pow(-2), Ok(r(9, 4)));
    assert_eq!(r(-2, 3).checked_pow(-1), Ok(r(-3, 2)));
    assert_eq!(Rational::ZERO.checked_pow(0), Ok(Rational::ONE));
    assert_eq!(Rational::ZERO.checked_pow(-1), Err(RationalError::DivisionByZero));
    assert_eq!(r(3, 1).checked_pow(60), Err(RationalError::Overflow));
}

#[test]
fn ordering_matches_cross_multiplication() {
    assert!(r(1, 3) < r(1, 2));
    assert!(r(-1, 2) < r(-1, 3));
    assert!(r(i64::MAX, 2) > r(i64::MAX - 1, 2));
    let mut v = vec![r(3, 4), r(-1, 2), r(1, 3), Rational::ZERO];
    v.sort();
    assert_eq!(v, vec![r(-1, 2), Rational::ZERO, r(1, 3), r(3, 4)]);
}

#[test]
fn overflow_variants_fall_back_to_f64() {
    match i64::MAX.over_multi(2) {
        Overflow::Approximate(x) => assert!((x - i64::MAX as f64 * 2.0).abs() < 1e4),
        Overflow::Exact(v) => panic!("wrapped to {v}"),
    }
    assert_eq!(3i64.over_multi(4), Overflow::Exact(12));
    assert!(!i64::MAX.over_add(1).is_exact());
    assert!(!i64::MIN.over_diff(1).is_exact());
    assert_eq!(7i64.over_div(2), Ok(Overflow::Approximate(3.5)));
    assert_eq!(8i64.over_div(2), Ok(Overflow::Exact(4)));
    assert_eq!(7i64.over_div(0), Err(RationalError::DivisionByZero));
    assert_eq!((-7i64).over_mod(3), Ok(Overflow::Exact(2)));
    assert_eq!(i64::MIN.over_mod(-1), Ok(Overflow::Exact(0)));
    assert_eq!(2i64.over_pow(10), Ok(Overflow::Exact(1024)));
    assert!(!2i64.over_pow(64).unwrap().is_exact());
    assert_eq!((-1i64).over_pow(-3), Ok(Overflow::Exact(-1)));

    let big = Rational::from(i64::MAX);
    assert!(!big.over_multi(Rational::from(2)).is_exact());
    assert_eq!(r(1, 2).over_add(r(1, 3)), Overflow::Exact(r(5, 6)));
    assert_eq!(r(1, 2).over_div(Rational::ZERO), Err(RationalError::DivisionByZero));
    let approx = r(3, 2).over_pow(200).unwrap();
    assert!(!approx.is_exact());
    assert!((approx.to_f64() / 1.5f64.powi(200) - 1.0).abs() < 1e-12);
    assert_eq!(r(3, 2).over_pow(2), Ok(Overflow::Exact(r(9, 4))));
}

#[test]
fn factorial_and_binomial() {
    assert_eq!(factorial(0), Overflow::Exact(1));
    assert_eq!(factorial(20), Overflow::Exact(2_432_902_008_176_640_000));
    let f21 = factorial(21);
    assert!(!f21.is_exact());
    assert!((f21.to_f64() / 5.109_094_217_170_944e19 - 1.0).abs() < 1e-12);

    assert_eq!(binomial_coefficient(5, 2), Overflow::Exact(10));
    assert_eq!(binomial_coefficient(5, 0), Overflow::Exact(1));
    assert_eq!(binomial_coefficient(3, 5), Overflow::Exact(0));
    assert_eq!(binomial_coefficient(60, 30), Overflow::Exact(118_264_581_564_861_424));
    // Deep chains stay off the call stack.
    let huge = binomial_coefficient(100_000, 50_000);
    assert!(!huge.is_exact());
    assert!(huge.to_f64().is_infinite() || huge.to_f64() > 1e300);
}

#[test]
fn rounding_rules() {
    use RoundingRule::*;
    let cases = [
        // value, toward zero, away, down, up, nearest-away, nearest-even
        (r(7, 2), [3, 4, 3, 4, 4, 4]),
        (r(5, 2), [2, 3, 2, 3, 3, 2]),
        (r(-5, 2), [-2, -3, -3, -2, -3, -2]),
        (r(-7, 3), [-2, -3, -3, -2, -2, -2]),
        (r(8, 3), [2, 3, 2, 3, 3, 3]),
    ];
    let rules = [TowardZero, AwayFromZero, Down, Up, ToNearestOrAwayFromZero, ToNearestOrEven];
    for (value, expected) in cases {
        for (rule, want) in rules.iter().zip(expected) {
            assert_eq!(value.rounded(*rule), Rational::from(want), "{value} {rule:?}");
        }
    }
    assert_eq!(r(3, 2).rounded(ToNearestOrEven), Rational::from(2));
    assert_eq!(r(5, 2).rounded(ToNearestOrEven), Rational::from(2));
    assert_eq!(Rational::from(4).rounded(Up), Rational::from(4));
}

#[test]
fn parts_and_shorthands() {
    assert_eq!(r(-7, 2).integral_part(), -3);
    assert_eq!(r(-7, 2).fractional_part(), r(-1, 2));
    assert_eq!(r(6, 3).fractional_part(), Rational::ZERO);
    assert_eq!(r(-7, 2).floor(), Rational::from(-4));
    assert_eq!(r(-7, 2).ceil(), Rational::from(-3));
    assert_eq!(r(-7, 2).round(), Rational::from(-4));
}

#[test]
fn continued_fraction_approximation() {
    let third = Rational::approximate(1.0 / 3.0, 1000, 1e-9).unwrap();
    assert_eq!(third, r(1, 3));
    let pi = Rational::approximate(std::f64::consts::PI, 1000, 1e-12).unwrap();
    assert_eq!(pi, r(355, 113));
    let pi_small = Rational::approximate(std::f64::consts::PI, 100, 1e-12).unwrap();
    assert_eq!(pi_small, r(22, 7));
    let neg = Rational::approximate(-0.75, 100, 1e-12).unwrap();
    assert_eq!(neg, r(-3, 4));
    assert_eq!(Rational::approximate(2.0, 10, 0.0), Ok(Rational::from(2)));
    assert_eq!(Rational::approximate(f64::NAN, 10, 1e-9), Err(RationalError::NotFinite));
    assert_eq!(Rational::try_from(0.125f64), Ok(r(1, 8)));
}

#[test]
fn text_and_pair_codec() {
    assert_eq!("3/6".parse::<Rational>(), Ok(r(1, 2)));
    assert_eq!(" -4 ".parse::<Rational>(), Ok(Rational::from(-4)));
    assert_eq!("1/0".parse::<Rational>(), Err(RationalError::DivisionByZero));
    assert!(matches!("x/2".parse::<Rational>(), Err(RationalError::Parse(_))));
    assert_eq!(r(-3, 4).to_string(), "-3/4");
    assert_eq!(Rational::from(5).to_string(), "5");

    let json = serde_json::to_string(&r(2, -6)).unwrap();
    assert_eq!(json, "[-1,3]");
    let back: Rational = serde_json::from_str("[4,-8]").unwrap();
    assert_eq!(back, r(-1, 2));
    assert!(serde_json::from_str::<Rational>("[1,0]").is_err());
    assert!(matches!(
        Rational::try_from((1i64, 0i64)),
        Err(RationalError::CorruptData(_))
    ));
}

proptest! {
    #[test]
    fn prop_canonical_form(p in any::<i64>(), q in any::<i64>().prop_filter("nonzero", |q| *q != 0)) {
        if let Ok(x) = Rational::new(p, q) {
            prop_assert!(x.denominator() > 0);
            prop_assert_eq!(gcd(x.numerator(), x.denominator()), 1);
            // same value as the input fraction
            prop_assert_eq!(x.numerator() as i128 * q as i128, p as i128 * x.denominator() as i128);
        }
    }

    #[test]
    fn prop_pair_round_trip(p in -1_000_000i64..1_000_000, q in 1i64..1_000_000) {
        let x = Rational::new(p, q).unwrap();
        let pair: (i64, i64) = x.into();
        prop_assert_eq!(Rational::try_from(pair), Ok(x));
        let json = serde_json::to_string(&x).unwrap();
        prop_assert_eq!(serde_json::from_str::<Rational>(&json).unwrap(), x);
        prop_assert_eq!(x.to_string().parse::<Rational>(), Ok(x));
    }

    #[test]
    fn prop_add_sub_inverse(a in -10_000i64..10_000, b in 1i64..500, c in -10_000i64..10_000, d in 1i64..500) {
        let x = Rational::new(a, b).unwrap();
        let y = Rational::new(c, d).unwrap();
        prop_assert_eq!((x + y) - y, x);
        if !y.is_zero() {
            prop_assert_eq!((x / y) * y, x);
            let m = x % y;
            // floored modulo: 0 <= m/y < 1
            let ratio = m / y;
            prop_assert!(ratio >= Rational::ZERO && ratio < Rational::ONE);
        }
    }
}

//! Bounded rational approximation of reals by continued fractions.

use super::error::RationalError;
use super::types::Rational;

pub const DEFAULT_MAX_DENOMINATOR: i64 = 1_000_000;
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

impl Rational {
    /// Best convergent of `x` with denominator `<= max_denominator`.
    ///
    /// Convergents follow `p2 = a*p1 + p0`, `q2 = a*q1 + q0`. The expansion stops
    /// when the remainder is within `tolerance` of an integer (that integer is the
    /// last partial quotient), or before the first convergent whose denominator
    /// exceeds the bound. Deterministic for a given input.
    pub fn approximate(
        x: f64,
        max_denominator: i64,
        tolerance: f64,
    ) -> Result<Rational, RationalError> {
        if !x.is_finite() {
            return Err(RationalError::NotFinite);
        }
        if x.abs() >= i64::MAX as f64 {
            return Err(RationalError::Overflow);
        }
        let max_q = max_denominator.max(1);
        let tolerance = tolerance.max(0.0);
        let (mut p0, mut q0, mut p1, mut q1) = (0i64, 1i64, 1i64, 0i64);
        let mut r = x;
        let mut steps = 0u32;
        loop {
            let nearest = r.round();
            let done = (r - nearest).abs() <= tolerance;
            let a = if done { nearest } else { r.floor() };
            if a.abs() >= i64::MAX as f64 {
                break;
            }
            let a = a as i64;
            let p2 = a.checked_mul(p1).and_then(|v| v.checked_add(p0));
            let q2 = a.checked_mul(q1).and_then(|v| v.checked_add(q0));
            let (Some(p2), Some(q2)) = (p2, q2) else {
                break;
            };
            if q2 > max_q {
                break;
            }
            (p0, q0, p1, q1) = (p1, q1, p2, q2);
            steps += 1;
            if done {
                break;
            }
            r = 1.0 / (r - a as f64);
        }
        tracing::trace!(x, p = p1, q = q1, steps, "continued fraction stopped");
        Rational::new(p1, q1)
    }
}

/// Uses `DEFAULT_MAX_DENOMINATOR` and `DEFAULT_TOLERANCE`.
impl TryFrom<f64> for Rational {
    type Error = RationalError;

    fn try_from(x: f64) -> Result<Self, Self::Error> {
        Rational::approximate(x, DEFAULT_MAX_DENOMINATOR, DEFAULT_TOLERANCE)
    }
}

//! Exact-or-approximate arithmetic for `i64` and `Rational`.
//!
//! Policy
//! - `Overflow::Exact(v)` is the mathematically exact result.
//! - `Overflow::Approximate(x)` means the exact result is not representable in
//!   the operand type (native range exceeded, or for `i64` a non-integral
//!   quotient); `x` is the `f64` evaluation of the same expression.
//! - Division by zero is never approximated; it is an error.

use super::error::RationalError;
use super::types::Rational;

/// Largest exponent magnitude `Rational::over_pow` attempts exactly.
pub const MAX_EXACT_EXPONENT: u32 = 128;

/// Result of an overflow-aware operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Overflow<T> {
    Exact(T),
    Approximate(f64),
}

impl<T> Overflow<T> {
    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Overflow::Exact(_))
    }

    /// The exact value, dropping approximations.
    #[inline]
    pub fn exact(self) -> Option<T> {
        match self {
            Overflow::Exact(v) => Some(v),
            Overflow::Approximate(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Overflow<U> {
        match self {
            Overflow::Exact(v) => Overflow::Exact(f(v)),
            Overflow::Approximate(x) => Overflow::Approximate(x),
        }
    }
}

impl Overflow<i64> {
    #[inline]
    pub fn to_f64(&self) -> f64 {
        match *self {
            Overflow::Exact(v) => v as f64,
            Overflow::Approximate(x) => x,
        }
    }
}

impl Overflow<Rational> {
    #[inline]
    pub fn to_f64(&self) -> f64 {
        match self {
            Overflow::Exact(v) => v.to_f64(),
            Overflow::Approximate(x) => *x,
        }
    }
}

/// Overflow-aware arithmetic; see the module docs for the result policy.
pub trait OverflowArith: Sized {
    fn over_add(self, rhs: Self) -> Overflow<Self>;
    fn over_diff(self, rhs: Self) -> Overflow<Self>;
    fn over_multi(self, rhs: Self) -> Overflow<Self>;
    fn over_div(self, rhs: Self) -> Result<Overflow<Self>, RationalError>;
    /// Floored modulo `a - b * floor(a / b)`.
    fn over_mod(self, rhs: Self) -> Result<Overflow<Self>, RationalError>;
    fn over_pow(self, exponent: i32) -> Result<Overflow<Self>, RationalError>;
}

#[inline]
fn fallback<T>(op: &'static str, approx: f64) -> Overflow<T> {
    tracing::trace!(op, approx, "exact result out of range; using f64");
    Overflow::Approximate(approx)
}

impl OverflowArith for i64 {
    fn over_add(self, rhs: i64) -> Overflow<i64> {
        match self.checked_add(rhs) {
            Some(v) => Overflow::Exact(v),
            None => fallback("over_add", self as f64 + rhs as f64),
        }
    }

    fn over_diff(self, rhs: i64) -> Overflow<i64> {
        match self.checked_sub(rhs) {
            Some(v) => Overflow::Exact(v),
            None => fallback("over_diff", self as f64 - rhs as f64),
        }
    }

    fn over_multi(self, rhs: i64) -> Overflow<i64> {
        match self.checked_mul(rhs) {
            Some(v) => Overflow::Exact(v),
            None => fallback("over_multi", self as f64 * rhs as f64),
        }
    }

    /// Exact only when `rhs` divides `self` and the quotient fits.
    fn over_div(self, rhs: i64) -> Result<Overflow<i64>, RationalError> {
        if rhs == 0 {
            return Err(RationalError::DivisionByZero);
        }
        let approx = self as f64 / rhs as f64;
        Ok(match (self.checked_rem(rhs), self.checked_div(rhs)) {
            (Some(0), Some(q)) => Overflow::Exact(q),
            (Some(_), Some(_)) => Overflow::Approximate(approx),
            _ => fallback("over_div", approx),
        })
    }

    fn over_mod(self, rhs: i64) -> Result<Overflow<i64>, RationalError> {
        if rhs == 0 {
            return Err(RationalError::DivisionByZero);
        }
        if rhs == -1 {
            return Ok(Overflow::Exact(0));
        }
        let mut r = self % rhs;
        if r != 0 && ((r < 0) != (rhs < 0)) {
            r += rhs;
        }
        Ok(Overflow::Exact(r))
    }

    /// Negative exponents are exact only for `±1`.
    fn over_pow(self, exponent: i32) -> Result<Overflow<i64>, RationalError> {
        if exponent < 0 {
            return match self {
                0 => Err(RationalError::DivisionByZero),
                1 => Ok(Overflow::Exact(1)),
                -1 => Ok(Overflow::Exact(if exponent % 2 == 0 { 1 } else { -1 })),
                _ => Ok(Overflow::Approximate((self as f64).powi(exponent))),
            };
        }
        Ok(match self.checked_pow(exponent.unsigned_abs()) {
            Some(v) => Overflow::Exact(v),
            None => fallback("over_pow", (self as f64).powi(exponent)),
        })
    }
}

impl OverflowArith for Rational {
    fn over_add(self, rhs: Rational) -> Overflow<Rational> {
        match self.checked_add(rhs) {
            Ok(v) => Overflow::Exact(v),
            Err(_) => fallback("over_add", self.to_f64() + rhs.to_f64()),
        }
    }

    fn over_diff(self, rhs: Rational) -> Overflow<Rational> {
        match self.checked_sub(rhs) {
            Ok(v) => Overflow::Exact(v),
            Err(_) => fallback("over_diff", self.to_f64() - rhs.to_f64()),
        }
    }

    fn over_multi(self, rhs: Rational) -> Overflow<Rational> {
        match self.checked_mul(rhs) {
            Ok(v) => Overflow::Exact(v),
            Err(_) => fallback("over_multi", self.to_f64() * rhs.to_f64()),
        }
    }

    fn over_div(self, rhs: Rational) -> Result<Overflow<Rational>, RationalError> {
        match self.checked_div(rhs) {
            Ok(v) => Ok(Overflow::Exact(v)),
            Err(RationalError::Overflow) => Ok(fallback("over_div", self.to_f64() / rhs.to_f64())),
            Err(e) => Err(e),
        }
    }

    fn over_mod(self, rhs: Rational) -> Result<Overflow<Rational>, RationalError> {
        match self.checked_rem(rhs) {
            Ok(v) => Ok(Overflow::Exact(v)),
            Err(RationalError::Overflow) => {
                let (a, b) = (self.to_f64(), rhs.to_f64());
                Ok(fallback("over_mod", a - b * (a / b).floor()))
            }
            Err(e) => Err(e),
        }
    }

    /// Exponents beyond `MAX_EXACT_EXPONENT` go straight to `f64`.
    fn over_pow(self, exponent: i32) -> Result<Overflow<Rational>, RationalError> {
        if self.is_zero() && exponent < 0 {
            return Err(RationalError::DivisionByZero);
        }
        if exponent.unsigned_abs() > MAX_EXACT_EXPONENT {
            return Ok(fallback("over_pow", self.to_f64().powi(exponent)));
        }
        match self.checked_pow(exponent) {
            Ok(v) => Ok(Overflow::Exact(v)),
            Err(RationalError::Overflow) => Ok(fallback("over_pow", self.to_f64().powi(exponent))),
            Err(e) => Err(e),
        }
    }
}

/// `n!`, switching to an `f64` product at the first overflowing factor.
pub fn factorial(n: u32) -> Overflow<i64> {
    let n = n as i64;
    let mut exact: i64 = 1;
    for k in 2..=n {
        match exact.checked_mul(k) {
            Some(v) => exact = v,
            None => {
                let approx = (k..=n).fold(exact as f64, |acc, j| acc * j as f64);
                return fallback("factorial", approx);
            }
        }
    }
    Overflow::Exact(exact)
}

/// `C(n, k)` via `C(n, k) = C(n-1, k-1) * n / k`, unwound from an explicit stack.
pub fn binomial_coefficient(n: u32, k: u32) -> Overflow<i64> {
    if k > n {
        return Overflow::Exact(0);
    }
    let k = k.min(n - k);
    let mut stack: Vec<(u32, u32)> = Vec::with_capacity(k as usize);
    let (mut ni, mut ki) = (n, k);
    while ki > 0 {
        stack.push((ni, ki));
        ni -= 1;
        ki -= 1;
    }
    // Base of the chain is C(n - k, 0) = 1.
    let mut exact: i128 = 1;
    let mut approx: Option<f64> = None;
    while let Some((ni, ki)) = stack.pop() {
        match approx {
            Some(a) => approx = Some(a * ni as f64 / ki as f64),
            None => {
                // Exact: C(ni-1, ki-1) * ni == C(ni, ki) * ki.
                let next = exact * ni as i128 / ki as i128;
                if next > i64::MAX as i128 {
                    approx = Some(next as f64);
                } else {
                    exact = next;
                }
            }
        }
    }
    match approx {
        Some(a) => fallback("binomial_coefficient", a),
        None => Overflow::Exact(exact as i64),
    }
}

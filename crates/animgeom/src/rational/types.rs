//! Canonical `p/q` value type and its exact arithmetic.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RationalError;

/// Exact rational number `p/q`.
///
/// Invariants (hold after every construction):
/// - `q > 0`.
/// - `gcd(|p|, q) == 1`; zero is stored as `0/1`.
///
/// Because the form is canonical, derived `PartialEq`/`Hash` agree with
/// `a.p * b.q == b.p * a.q`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Rational {
    p: i64,
    q: i64,
}

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0) == 0`.
#[inline]
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_u128(a.unsigned_abs() as u128, b.unsigned_abs() as u128) as u64
}

#[inline]
fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Rational {
    pub const ZERO: Rational = Rational { p: 0, q: 1 };
    pub const ONE: Rational = Rational { p: 1, q: 1 };

    /// Canonicalizing constructor: sign moves into the numerator, gcd is divided out.
    pub fn new(p: i64, q: i64) -> Result<Self, RationalError> {
        Self::from_i128(p as i128, q as i128)
    }

    /// Reduce a wide fraction and fit it into `i64`.
    pub(crate) fn from_i128(p: i128, q: i128) -> Result<Self, RationalError> {
        if q == 0 {
            return Err(RationalError::DivisionByZero);
        }
        let negative = (p < 0) != (q < 0);
        let (pa, qa) = (p.unsigned_abs(), q.unsigned_abs());
        let g = gcd_u128(pa, qa);
        let (pa, qa) = (pa / g, qa / g);
        let q = i64::try_from(qa).map_err(|_| RationalError::Overflow)?;
        let pa = i128::try_from(pa).map_err(|_| RationalError::Overflow)?;
        let p = i64::try_from(if negative { -pa } else { pa })
            .map_err(|_| RationalError::Overflow)?;
        Ok(Self { p, q })
    }

    #[inline]
    pub const fn from_integer(n: i64) -> Self {
        Self { p: n, q: 1 }
    }

    #[inline]
    pub fn numerator(&self) -> i64 {
        self.p
    }

    #[inline]
    pub fn denominator(&self) -> i64 {
        self.q
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.p == 0
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.q == 1
    }

    #[inline]
    pub fn signum(&self) -> i64 {
        self.p.signum()
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.p as f64 / self.q as f64
    }

    /// Truncated integral part (`7/2 → 3`, `-7/2 → -3`).
    #[inline]
    pub fn integral_part(&self) -> i64 {
        self.p / self.q
    }

    /// `self - integral_part()`; carries the sign of `self`.
    #[inline]
    pub fn fractional_part(&self) -> Rational {
        Self {
            p: self.p % self.q,
            q: self.q,
        }
        .reduced()
    }

    /// Only used where `q` is already known positive and `p` may share factors.
    fn reduced(self) -> Self {
        let g = gcd(self.p, self.q) as i64;
        if g <= 1 {
            return self;
        }
        Self {
            p: self.p / g,
            q: self.q / g,
        }
    }

    pub fn abs(self) -> Rational {
        or_panic(Self::from_i128((self.p as i128).abs(), self.q as i128), "abs")
    }

    /// `1/self`; zero has no reciprocal.
    pub fn recip(self) -> Result<Rational, RationalError> {
        Self::from_i128(self.q as i128, self.p as i128)
    }

    pub fn checked_add(self, rhs: Rational) -> Result<Rational, RationalError> {
        let (a, b) = (self.wide(), rhs.wide());
        Self::from_i128(a.0 * b.1 + b.0 * a.1, a.1 * b.1)
    }

    pub fn checked_sub(self, rhs: Rational) -> Result<Rational, RationalError> {
        let (a, b) = (self.wide(), rhs.wide());
        Self::from_i128(a.0 * b.1 - b.0 * a.1, a.1 * b.1)
    }

    pub fn checked_mul(self, rhs: Rational) -> Result<Rational, RationalError> {
        let (a, b) = (self.wide(), rhs.wide());
        Self::from_i128(a.0 * b.0, a.1 * b.1)
    }

    pub fn checked_div(self, rhs: Rational) -> Result<Rational, RationalError> {
        let (a, b) = (self.wide(), rhs.wide());
        Self::from_i128(a.0 * b.1, a.1 * b.0)
    }

    /// Floored modulo: `a - b * floor(a / b)`; the result takes the sign of `b`.
    pub fn checked_rem(self, rhs: Rational) -> Result<Rational, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let (a, b) = (self.wide(), rhs.wide());
        // Over the common denominator a.q * b.q both operands are integers.
        let x = a.0 * b.1;
        let y = b.0 * a.1;
        let mut r = x % y;
        if r != 0 && ((r < 0) != (y < 0)) {
            r += y;
        }
        Self::from_i128(r, a.1 * b.1)
    }

    /// Integer power; negative exponents invert first.
    pub fn checked_pow(self, exponent: i32) -> Result<Rational, RationalError> {
        let base = if exponent < 0 { self.recip()? } else { self };
        let e = exponent.unsigned_abs();
        let p = base.p.checked_pow(e).ok_or(RationalError::Overflow)?;
        let q = base.q.checked_pow(e).ok_or(RationalError::Overflow)?;
        // p^e and q^e stay coprime, so no further reduction is needed.
        Ok(Self { p, q })
    }

    #[inline]
    fn wide(self) -> (i128, i128) {
        (self.p as i128, self.q as i128)
    }
}

#[inline]
fn or_panic(r: Result<Rational, RationalError>, op: &str) -> Rational {
    match r {
        Ok(v) => v,
        Err(e) => panic!("attempt to {op} rational failed: {e}"),
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(n as i64)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying preserves order.
        (self.p as i128 * other.q as i128).cmp(&(other.p as i128 * self.q as i128))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Rational {
    type Output = Rational;
    #[inline]
    fn add(self, rhs: Rational) -> Rational {
        or_panic(self.checked_add(rhs), "add")
    }
}

impl Sub for Rational {
    type Output = Rational;
    #[inline]
    fn sub(self, rhs: Rational) -> Rational {
        or_panic(self.checked_sub(rhs), "subtract")
    }
}

impl Mul for Rational {
    type Output = Rational;
    #[inline]
    fn mul(self, rhs: Rational) -> Rational {
        or_panic(self.checked_mul(rhs), "multiply")
    }
}

impl Div for Rational {
    type Output = Rational;
    #[inline]
    fn div(self, rhs: Rational) -> Rational {
        or_panic(self.checked_div(rhs), "divide")
    }
}

impl Rem for Rational {
    type Output = Rational;
    #[inline]
    fn rem(self, rhs: Rational) -> Rational {
        or_panic(self.checked_rem(rhs), "take remainder of")
    }
}

impl Neg for Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        or_panic(Self::from_i128(-(self.p as i128), self.q as i128), "negate")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.q == 1 {
            write!(f, "{}", self.p)
        } else {
            write!(f, "{}/{}", self.p, self.q)
        }
    }
}

/// Accepts `"p/q"` or a bare integer; whitespace around either part is ignored.
impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let int = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| RationalError::Parse(s.to_string()))
        };
        match text.split_once('/') {
            Some((p, q)) => Rational::new(int(p)?, int(q)?),
            None => Ok(Rational::from_integer(int(text)?)),
        }
    }
}

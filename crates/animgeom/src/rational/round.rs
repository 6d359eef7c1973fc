use std::cmp::Ordering;

use super::types::Rational;

/// Rounding modes for `Rational::rounded`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingRule {
    TowardZero,
    AwayFromZero,
    /// Floor.
    Down,
    /// Ceiling.
    Up,
    /// Halves go away from zero.
    #[default]
    ToNearestOrAwayFromZero,
    /// Halves go to the even neighbour (banker's rounding).
    ToNearestOrEven,
}

impl Rational {
    /// Round to an integer-valued rational.
    ///
    /// Each rule is decided from the truncated integral part and a comparison of
    /// the fractional part against `1/2` (`2 * |p mod q|` vs `q`).
    pub fn rounded(self, rule: RoundingRule) -> Rational {
        let (p, q) = (self.numerator(), self.denominator());
        let rem = p % q;
        if rem == 0 {
            return self;
        }
        let trunc = p / q;
        // q >= 2 here, so |trunc| <= i64::MAX / 2 and this cannot overflow.
        let away = trunc + p.signum();
        let half = (2 * rem.unsigned_abs() as u128).cmp(&(q as u128));
        let n = match rule {
            RoundingRule::TowardZero => trunc,
            RoundingRule::AwayFromZero => away,
            RoundingRule::Down => {
                if p < 0 {
                    away
                } else {
                    trunc
                }
            }
            RoundingRule::Up => {
                if p > 0 {
                    away
                } else {
                    trunc
                }
            }
            RoundingRule::ToNearestOrAwayFromZero => match half {
                Ordering::Less => trunc,
                _ => away,
            },
            RoundingRule::ToNearestOrEven => match half {
                Ordering::Less => trunc,
                Ordering::Greater => away,
                Ordering::Equal if trunc % 2 == 0 => trunc,
                Ordering::Equal => away,
            },
        };
        Rational::from_integer(n)
    }

    #[inline]
    pub fn floor(self) -> Rational {
        self.rounded(RoundingRule::Down)
    }

    #[inline]
    pub fn ceil(self) -> Rational {
        self.rounded(RoundingRule::Up)
    }

    #[inline]
    pub fn round(self) -> Rational {
        self.rounded(RoundingRule::ToNearestOrAwayFromZero)
    }
}

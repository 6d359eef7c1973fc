//! Pair encoding `(p, q)` used by serde and external record layers.

use super::error::RationalError;
use super::types::Rational;

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    /// Decode; a zero denominator is corrupt data, everything else is re-canonicalized.
    fn try_from((p, q): (i64, i64)) -> Result<Self, Self::Error> {
        if q == 0 {
            return Err(RationalError::CorruptData(format!(
                "zero denominator in ({p}, {q})"
            )));
        }
        Rational::new(p, q)
    }
}

impl From<Rational> for (i64, i64) {
    fn from(r: Rational) -> Self {
        (r.numerator(), r.denominator())
    }
}

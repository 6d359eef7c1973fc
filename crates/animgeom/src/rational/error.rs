use thiserror::Error;

/// Failures surfaced by rational construction, parsing and decoding.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RationalError {
    /// Denominator (or divisor) is zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Reduced numerator or denominator does not fit in `i64`.
    #[error("rational overflows i64 range")]
    Overflow,
    /// Input float is NaN or infinite.
    #[error("value is not finite")]
    NotFinite,
    /// Text is neither `p/q` nor a bare integer.
    #[error("cannot parse rational from {0:?}")]
    Parse(String),
    /// Encoded pair is malformed (e.g. zero denominator).
    #[error("corrupt rational data: {0}")]
    CorruptData(String),
}

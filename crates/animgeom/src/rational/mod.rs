//! Exact rational numbers with explicit overflow handling.
//!
//! Purpose
//! - Provide a canonical `p/q` value type (`Rational`) used for animation time
//!   and any place where floating drift is unacceptable.
//! - Make precision loss visible: the `over_*` family returns `Overflow<T>`,
//!   so call sites decide whether an approximate `f64` is acceptable.
//!
//! Why this design
//! - Arithmetic runs in `i128` and is reduced before fitting back into `i64`;
//!   cross products of two `i64` values never overflow there.
//! - Operators behave like std integers (panic on division by zero or an
//!   unrepresentable result); `checked_*` and `over_*` are the non-panicking paths.
//!
//! Code cross-refs: `types::Rational`, `overflow::{Overflow, OverflowArith}`,
//! `round::RoundingRule`, `approx::Rational::approximate`.

mod approx;
mod codec;
mod error;
pub mod overflow;
mod round;
mod types;

pub use approx::{DEFAULT_MAX_DENOMINATOR, DEFAULT_TOLERANCE};
pub use error::RationalError;
pub use overflow::{binomial_coefficient, factorial, Overflow, OverflowArith, MAX_EXACT_EXPONENT};
pub use round::RoundingRule;
pub use types::{gcd, Rational};

#[cfg(test)]
mod tests;

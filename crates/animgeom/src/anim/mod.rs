//! Keyframe tracks evaluated at arbitrary rational times.
//!
//! Purpose
//! - Hold an ordered keyframe sequence (`Animation<V>`) for any `Interpolatable`
//!   value type and evaluate it in two phases: locate the segment
//!   (`time_result`), then blend within it (`value`).
//!
//! Why this design
//! - Time is `Rational` so segment lookup is exact; only the normalized
//!   in-segment position is converted to `f64` for blending.
//! - Queries outside the keyed range clamp to the edge keyframe values.
//!
//! Code cross-refs: `interp::{Interpolatable, interpolate_segment}`, `rational::Rational`.

mod keyframe;
mod track;

pub use keyframe::{Keyframe, KeyframeKind};
pub use track::{Animation, TimeResult};

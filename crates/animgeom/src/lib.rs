//! Numeric and geometric kernel for a vector animation editor.
//!
//! Modules
//! - `rational`: exact `i64` fractions with overflow-aware arithmetic.
//! - `interp`: the `Interpolatable` blend operations and spline math.
//! - `anim`: keyframe tracks evaluated at rational times.
//! - `geom2`: points, segments, lines, arcs, and outline containment.
//!
//! Everything here is pure value computation; there is no I/O and no shared
//! state. Callers exchange plain values (points, rationals, times) and
//! receive plain values or booleans back.

pub mod anim;
pub mod geom2;
pub mod interp;
pub mod rational;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::anim::{Animation, Keyframe, KeyframeKind, TimeResult};
    pub use crate::geom2::{
        region_contains, Arc, Edge, GeomCfg, LinearLine, Orientation, PathSegment, Point,
        PointExt, Rect,
    };
    pub use crate::interp::Interpolatable;
    pub use crate::rational::{Overflow, OverflowArith, Rational, RationalError, RoundingRule};
    pub use nalgebra::Vector2 as Vec2;
}

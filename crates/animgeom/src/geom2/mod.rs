//! 2D geometry for hit-testing and path operations.
//!
//! Purpose
//! - Segments (`Edge`), infinite lines (`LinearLine`), and circular arcs (`Arc`)
//!   with distance, nearest-point, intersection, and angular-containment queries.
//! - Even-odd containment over outlines that mix edges and arcs (`region`).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; the 2D cross product is `perp`.
//! - Angles are radians; `normalized_angle` wraps into `(-π, π]`.
//! - Degenerate inputs (point edges, coincident points) have defined results
//!   instead of errors. Tolerances come from `cfg`; `*_with` variants take a
//!   `GeomCfg`.
//! - Arc-arc intersection flattens one arc into chords and is approximate.
//!
//! Code cross-refs: `Edge::ray_casting`, `Arc::ray_casting`, `region_contains`.

mod arc;
pub mod cfg;
mod edge;
mod error;
mod line;
mod point;
mod rect;
pub mod region;

pub use arc::{Arc, Orientation};
pub use cfg::{GeomCfg, ANGLE_EPS, AXIS_SNAP_EPS, DEFAULT_ARC_SAMPLES, POINT_EPS};
pub use edge::Edge;
pub use error::GeomError;
pub use line::LinearLine;
pub use point::{angle_difference, normalized_angle, Point, PointExt};
pub use rect::Rect;
pub use region::{region_contains, PathSegment};

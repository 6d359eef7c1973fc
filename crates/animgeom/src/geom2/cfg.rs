//! Tolerance defaults for 2D geometry.
//!
//! Policy
//! - Fixed constants cover normal drawing scales and are what the plain
//!   methods use. `GeomCfg` carries overrides for the `*_with` variants.

/// Distance below which a point counts as lying on a segment or circle.
pub const POINT_EPS: f64 = 1e-9;
/// Angular slack for boundary hits in arc containment.
pub const ANGLE_EPS: f64 = 1e-12;
/// Angles this close to an axis move exactly along it in `moved_rounded_with`.
pub const AXIS_SNAP_EPS: f64 = 1e-10;
/// Polyline resolution used when one arc is tested against another.
pub const DEFAULT_ARC_SAMPLES: usize = 10;

/// Geometry configuration (tolerances and sampling).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_point: f64,
    pub eps_angle: f64,
    pub arc_samples: usize,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_point: POINT_EPS,
            eps_angle: ANGLE_EPS,
            arc_samples: DEFAULT_ARC_SAMPLES,
        }
    }
}

//! Points as `nalgebra::Vector2<f64>` plus the drawing helpers the editor needs.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::Vector2;

use super::cfg::AXIS_SNAP_EPS;

/// 2D position or vector.
pub type Point = Vector2<f64>;

/// Wrap an angle into `(-π, π]`.
#[inline]
pub fn normalized_angle(a: f64) -> f64 {
    let x = (a + PI).rem_euclid(TAU) - PI;
    if x <= -PI {
        x + TAU
    } else {
        x
    }
}

/// Signed rotation taking direction `a0` to direction `a1`, in `(-π, π]`.
#[inline]
pub fn angle_difference(a0: f64, a1: f64) -> f64 {
    normalized_angle(a1 - a0)
}

/// Drawing helpers on `Point`.
///
/// The 2D cross product is nalgebra's `perp` (`a.x * b.y - a.y * b.x`); the
/// inherent `cross`/`angle` on `Vector2` are the 3D/unsigned variants.
pub trait PointExt {
    fn distance(&self, other: &Point) -> f64;
    fn distance_squared(&self, other: &Point) -> f64;
    fn mid(&self, other: &Point) -> Point;
    /// Direction angle `atan2(y, x)`.
    fn polar_angle(&self) -> f64;
    /// Rotation from `self` to `other` as `atan2(cross, dot)`; independent of lengths.
    fn angle_to(&self, other: &Point) -> f64;
    fn moved_with(&self, distance: f64, angle: f64) -> Point;
    /// Like `moved_with`, but angles within `AXIS_SNAP_EPS` of an axis move
    /// exactly along that axis so orthogonal strokes do not drift.
    fn moved_rounded_with(&self, distance: f64, angle: f64) -> Point;
}

impl PointExt for Point {
    #[inline]
    fn distance(&self, other: &Point) -> f64 {
        (other - self).norm()
    }

    #[inline]
    fn distance_squared(&self, other: &Point) -> f64 {
        (other - self).norm_squared()
    }

    #[inline]
    fn mid(&self, other: &Point) -> Point {
        (self + other) * 0.5
    }

    #[inline]
    fn polar_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn angle_to(&self, other: &Point) -> f64 {
        self.perp(other).atan2(self.dot(other))
    }

    #[inline]
    fn moved_with(&self, distance: f64, angle: f64) -> Point {
        Point::new(
            self.x + distance * angle.cos(),
            self.y + distance * angle.sin(),
        )
    }

    fn moved_rounded_with(&self, distance: f64, angle: f64) -> Point {
        let a = normalized_angle(angle);
        if a.abs() <= AXIS_SNAP_EPS {
            Point::new(self.x + distance, self.y)
        } else if (a - FRAC_PI_2).abs() <= AXIS_SNAP_EPS {
            Point::new(self.x, self.y + distance)
        } else if (a + FRAC_PI_2).abs() <= AXIS_SNAP_EPS {
            Point::new(self.x, self.y - distance)
        } else if PI - a.abs() <= AXIS_SNAP_EPS {
            Point::new(self.x - distance, self.y)
        } else {
            self.moved_with(distance, angle)
        }
    }
}

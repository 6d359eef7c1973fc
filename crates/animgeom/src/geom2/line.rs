use serde::{Deserialize, Serialize};

use super::cfg::GeomCfg;
use super::edge::Edge;
use super::point::{Point, PointExt};

/// Infinite line through `p0` and `p1`. Parameters are not clamped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearLine {
    pub p0: Point,
    pub p1: Point,
}

impl LinearLine {
    #[inline]
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    #[inline]
    pub fn direction(&self) -> Point {
        self.p1 - self.p0
    }

    /// Unclamped projection parameter; 0 when `p0 == p1`.
    pub fn t(&self, p: &Point) -> f64 {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return 0.0;
        }
        (p - self.p0).dot(&d) / len2
    }

    #[inline]
    pub fn nearest_point(&self, p: &Point) -> Point {
        self.p0 + self.direction() * self.t(p)
    }

    #[inline]
    pub fn distance_squared(&self, p: &Point) -> f64 {
        p.distance_squared(&self.nearest_point(p))
    }

    #[inline]
    pub fn distance(&self, p: &Point) -> f64 {
        self.distance_squared(p).sqrt()
    }

    /// Crossing point of two lines; `None` when parallel or degenerate.
    pub fn intersection(&self, other: &LinearLine) -> Option<Point> {
        let a = self.direction();
        let b = other.direction();
        let denom = a.perp(&b);
        if denom == 0.0 {
            return None;
        }
        let t = (other.p0 - self.p0).perp(&b) / denom;
        Some(self.p0 + a * t)
    }

    /// Where the line meets the segment.
    ///
    /// A segment lying on the line reports its `p0`. A degenerate line acts as
    /// the point `p0`.
    pub fn intersection_with_edge(&self, edge: &Edge) -> Option<Point> {
        self.intersection_with_edge_with(edge, &GeomCfg::default())
    }

    pub fn intersection_with_edge_with(&self, edge: &Edge, cfg: &GeomCfg) -> Option<Point> {
        let a = self.direction();
        if a.norm_squared() == 0.0 {
            return edge.t_from_with(&self.p0, cfg).map(|_| self.p0);
        }
        let b = edge.vector();
        let denom = a.perp(&b);
        if denom == 0.0 {
            return (self.distance(&edge.p0) <= cfg.eps_point).then_some(edge.p0);
        }
        let u = (edge.p0 - self.p0).perp(&a) / denom;
        let slack = cfg.eps_point / b.norm();
        (-slack..=1.0 + slack)
            .contains(&u)
            .then(|| edge.point_at(u))
    }

    /// `None` for vertical lines.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        let d = self.direction();
        (d.x != 0.0).then(|| self.p0.y + (x - self.p0.x) * d.y / d.x)
    }

    /// `None` for horizontal lines.
    pub fn x_at(&self, y: f64) -> Option<f64> {
        let d = self.direction();
        (d.y != 0.0).then(|| self.p0.x + (y - self.p0.y) * d.x / d.y)
    }

    /// Closed half-plane test: on or above the line when `is_upper`, on or
    /// below otherwise. Vertical lines compare x instead (upper = right side).
    pub fn contains(&self, p: &Point, is_upper: bool) -> bool {
        let (value, bound) = match self.y_at(p.x) {
            Some(y) => (p.y, y),
            None => (p.x, self.p0.x),
        };
        if is_upper {
            value >= bound
        } else {
            value <= bound
        }
    }
}

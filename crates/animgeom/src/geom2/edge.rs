use serde::{Deserialize, Serialize};

use super::cfg::GeomCfg;
use super::point::{Point, PointExt};
use super::rect::Rect;

/// Finite segment from `p0` (t=0) to `p1` (t=1). `p0 == p1` is a valid point edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub p0: Point,
    pub p1: Point,
}

impl Edge {
    #[inline]
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    #[inline]
    pub fn vector(&self) -> Point {
        self.p1 - self.p0
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    #[inline]
    pub fn mid(&self) -> Point {
        self.p0.mid(&self.p1)
    }

    #[inline]
    pub fn reversed(&self) -> Edge {
        Edge::new(self.p1, self.p0)
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.p0 == self.p1
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.p0, self.p1)
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        self.p0 + self.vector() * t
    }

    /// Projection parameter of `p`, clamped to `[0, 1]`; 0 for a point edge.
    pub fn nearest_t(&self, p: &Point) -> f64 {
        let v = self.vector();
        let len2 = v.norm_squared();
        if len2 == 0.0 {
            return 0.0;
        }
        ((p - self.p0).dot(&v) / len2).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn nearest_point(&self, p: &Point) -> Point {
        self.point_at(self.nearest_t(p))
    }

    #[inline]
    pub fn distance_squared(&self, p: &Point) -> f64 {
        p.distance_squared(&self.nearest_point(p))
    }

    #[inline]
    pub fn distance(&self, p: &Point) -> f64 {
        self.distance_squared(p).sqrt()
    }

    /// Inverse of `point_at`: the parameter of `p` if it lies on the segment.
    pub fn t_from(&self, p: &Point) -> Option<f64> {
        self.t_from_with(p, &GeomCfg::default())
    }

    pub fn t_from_with(&self, p: &Point, cfg: &GeomCfg) -> Option<f64> {
        let t = self.nearest_t(p);
        (self.point_at(t).distance(p) <= cfg.eps_point).then_some(t)
    }

    /// Closed test: endpoints touching the other segment count.
    pub fn intersects(&self, other: &Edge) -> bool {
        if !self.bounds().intersects(&other.bounds()) {
            return false;
        }
        let (d1, d2, d3, d4) = self.sides(other);
        d1 * d2 <= 0.0 && d3 * d4 <= 0.0
    }

    /// Proper crossing point; touching or collinear segments give `None`.
    #[inline]
    pub fn intersection(&self, other: &Edge) -> Option<Point> {
        self.intersection_with_params(other).map(|(p, _, _)| p)
    }

    /// Crossing point with its parameter along `self` (t) and along `other` (u).
    pub fn intersection_with_params(&self, other: &Edge) -> Option<(Point, f64, f64)> {
        let (d1, d2, d3, d4) = self.sides(other);
        if !(d1 * d2 < 0.0 && d3 * d4 < 0.0) {
            return None;
        }
        let a = self.vector();
        let b = other.vector();
        let denom = a.perp(&b);
        if denom == 0.0 {
            return None;
        }
        let w = other.p0 - self.p0;
        let t = w.perp(&b) / denom;
        let u = w.perp(&a) / denom;
        Some((self.point_at(t), t, u))
    }

    /// Contact without a proper crossing (shared endpoint, T-junction, overlap).
    pub fn touches(&self, other: &Edge) -> bool {
        self.intersects(other) && self.intersection_with_params(other).is_none()
    }

    /// Shortest connection from `self` to `other`, as an edge whose `p0` lies on
    /// `self` and `p1` on `other`. Zero length when the segments meet.
    pub fn nearest(&self, other: &Edge) -> Edge {
        if let Some(p) = self.intersection(other) {
            return Edge::new(p, p);
        }
        let candidates = [
            Edge::new(self.p0, other.nearest_point(&self.p0)),
            Edge::new(self.p1, other.nearest_point(&self.p1)),
            Edge::new(self.nearest_point(&other.p0), other.p0),
            Edge::new(self.nearest_point(&other.p1), other.p1),
        ];
        candidates
            .into_iter()
            .min_by(|a, b| {
                a.vector()
                    .norm_squared()
                    .total_cmp(&b.vector().norm_squared())
            })
            .unwrap_or(*self)
    }

    /// Crossings of the ray from `p` towards +x (0 or 1).
    ///
    /// Half-open in y: an endpoint on the ray's height counts only when the
    /// other endpoint is above it, so shared vertices are counted once and
    /// horizontal edges never count.
    pub fn ray_casting(&self, p: &Point) -> u32 {
        let (a, b) = (self.p0, self.p1);
        if (a.y > p.y) == (b.y > p.y) {
            return 0;
        }
        // b.y != a.y here; a vertical edge gives x == a.x.
        let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
        u32::from(p.x < x)
    }

    /// Signed sides: `self` endpoints against `other`'s line, then the reverse.
    fn sides(&self, other: &Edge) -> (f64, f64, f64, f64) {
        let a = self.vector();
        let b = other.vector();
        (
            b.perp(&(self.p0 - other.p0)),
            b.perp(&(self.p1 - other.p0)),
            a.perp(&(other.p0 - self.p0)),
            a.perp(&(other.p1 - self.p0)),
        )
    }
}

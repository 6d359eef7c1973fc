use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::point::Point;

/// Axis-aligned rectangle by its min/max corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Normalizes the corners so that `min <= max` componentwise.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Tight bounds of a point set; `None` when empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        Some(it.fold(Rect::new(first, first), |r, p| r.including(p)))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Closed containment.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Closed overlap; touching rectangles intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    pub fn including(&self, p: Point) -> Rect {
        Rect {
            min: self.min.inf(&p),
            max: self.max.sup(&p),
        }
    }

    /// Shrink by `d` on every side (grow for negative `d`). A rectangle inset
    /// past its centre collapses to the centre point.
    pub fn inset(&self, d: f64) -> Rect {
        let c = (self.min + self.max) * 0.5;
        let lo = self.min.add_scalar(d);
        let hi = self.max.add_scalar(-d);
        Rect {
            min: Point::new(lo.x.min(c.x), lo.y.min(c.y)),
            max: Point::new(hi.x.max(c.x), hi.y.max(c.y)),
        }
    }

    /// Corners counter-clockwise from `min`.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// Boundary edges counter-clockwise from `min`.
    pub fn edges(&self) -> [Edge; 4] {
        let [a, b, c, d] = self.corners();
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, d), Edge::new(d, a)]
    }
}

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use super::cfg::{GeomCfg, ANGLE_EPS, POINT_EPS};
use super::edge::Edge;
use super::error::GeomError;
use super::point::{Point, PointExt};
use super::rect::Rect;

/// Direction of travel from `start_angle` to `end_angle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

/// Circular arc from `start_angle` to `end_angle` (radians) around `center`.
///
/// Immutable: the cached endpoint positions are computed in `new`, and every
/// `with_*` builder goes back through `new`, so they are never stale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArcRepr", into = "ArcRepr")]
pub struct Arc {
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    start_position: Point,
    end_position: Point,
}

/// Wire form; endpoints are derived, not stored.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct ArcRepr {
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl TryFrom<ArcRepr> for Arc {
    type Error = GeomError;

    fn try_from(r: ArcRepr) -> Result<Self, Self::Error> {
        let finite = r.center.iter().all(|c| c.is_finite())
            && r.radius.is_finite()
            && r.start_angle.is_finite()
            && r.end_angle.is_finite();
        if !finite {
            return Err(GeomError::CorruptData("non-finite arc field".into()));
        }
        if r.radius < 0.0 {
            return Err(GeomError::CorruptData(format!(
                "negative arc radius {}",
                r.radius
            )));
        }
        Ok(Arc::new(r.center, r.radius, r.start_angle, r.end_angle))
    }
}

impl From<Arc> for ArcRepr {
    fn from(a: Arc) -> Self {
        ArcRepr {
            center: a.center,
            radius: a.radius,
            start_angle: a.start_angle,
            end_angle: a.end_angle,
        }
    }
}

impl Arc {
    pub fn new(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            start_position: center.moved_with(radius, start_angle),
            end_position: center.moved_with(radius, end_angle),
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }
    #[inline]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }
    #[inline]
    pub fn start_position(&self) -> Point {
        self.start_position
    }
    #[inline]
    pub fn end_position(&self) -> Point {
        self.end_position
    }

    pub fn with_center(&self, center: Point) -> Self {
        Arc::new(center, self.radius, self.start_angle, self.end_angle)
    }

    pub fn with_radius(&self, radius: f64) -> Self {
        Arc::new(self.center, radius, self.start_angle, self.end_angle)
    }

    pub fn with_start_angle(&self, start_angle: f64) -> Self {
        Arc::new(self.center, self.radius, start_angle, self.end_angle)
    }

    pub fn with_end_angle(&self, end_angle: f64) -> Self {
        Arc::new(self.center, self.radius, self.start_angle, end_angle)
    }

    pub fn orientation(&self) -> Orientation {
        if self.start_angle > self.end_angle {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }

    /// Signed angular extent `end - start`.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Arc length; sweeps beyond a full turn count as one circle.
    #[inline]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep().abs().min(TAU)
    }

    #[inline]
    pub fn point_at(&self, angle: f64) -> Point {
        self.center.moved_with(self.radius, angle)
    }

    pub fn reversed(&self) -> Self {
        Arc::new(self.center, self.radius, self.end_angle, self.start_angle)
    }

    /// `segments + 1` evenly spaced points from start to end (at least 2).
    pub fn sample_points(&self, segments: usize) -> Vec<Point> {
        let n = segments.max(1);
        let step = self.sweep() / n as f64;
        (0..=n)
            .map(|i| match i {
                0 => self.start_position,
                i if i == n => self.end_position,
                i => self.point_at(self.start_angle + step * i as f64),
            })
            .collect()
    }

    /// Closed angular containment.
    #[inline]
    pub fn contains(&self, angle: f64) -> bool {
        self.contains_with(angle, true, true)
    }

    /// Angular containment with separate inclusivity at the start and end
    /// angle. The range is taken between `min(start, end)` and
    /// `max(start, end)` modulo 2π; a span of a full turn or more contains
    /// every angle.
    pub fn contains_with(&self, angle: f64, include_start: bool, include_end: bool) -> bool {
        self.contains_with_eps(angle, include_start, include_end, ANGLE_EPS)
    }

    fn contains_with_eps(
        &self,
        angle: f64,
        include_start: bool,
        include_end: bool,
        eps: f64,
    ) -> bool {
        let (lo, hi, include_lo, include_hi) = if self.start_angle <= self.end_angle {
            (self.start_angle, self.end_angle, include_start, include_end)
        } else {
            (self.end_angle, self.start_angle, include_end, include_start)
        };
        let span = hi - lo;
        if span >= TAU {
            return true;
        }
        let d = (angle - lo).rem_euclid(TAU);
        if d <= eps || TAU - d <= eps {
            return include_lo;
        }
        if (d - span).abs() <= eps {
            return include_hi;
        }
        d < span
    }

    /// Squared distance from `p` to the nearest point of the arc.
    pub fn distance_squared(&self, p: &Point) -> f64 {
        p.distance_squared(&self.nearest_point(p))
    }

    #[inline]
    pub fn distance(&self, p: &Point) -> f64 {
        self.distance_squared(p).sqrt()
    }

    /// Radial projection when `p`'s direction from the centre is inside the
    /// span, else the nearer endpoint. The centre itself maps to the start.
    pub fn nearest_point(&self, p: &Point) -> Point {
        let v = p - self.center;
        let len = v.norm();
        if len == 0.0 {
            return self.start_position;
        }
        if self.contains(v.polar_angle()) {
            return self.center + v * (self.radius / len);
        }
        if p.distance_squared(&self.start_position) <= p.distance_squared(&self.end_position) {
            self.start_position
        } else {
            self.end_position
        }
    }

    /// Tight bounds: both endpoints plus every axis extreme inside the span.
    pub fn bounds(&self) -> Rect {
        [0.0, FRAC_PI_2, PI, -FRAC_PI_2]
            .into_iter()
            .filter(|a| self.contains(*a))
            .map(|a| self.point_at(a))
            .fold(Rect::new(self.start_position, self.end_position), |r, p| {
                r.including(p)
            })
    }

    /// True when any part of the arc lies in the closed rectangle.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        if !self.bounds().intersects(&rect.inset(-POINT_EPS)) {
            return false;
        }
        if rect.contains(&self.start_position) {
            return true;
        }
        rect.edges().iter().any(|e| self.intersects_edge(e))
    }

    /// Points where the segment meets the arc. A tangent contact yields a
    /// single point.
    pub fn intersections(&self, edge: &Edge) -> Vec<Point> {
        self.intersections_with(edge, &GeomCfg::default())
    }

    pub fn intersections_with(&self, edge: &Edge, cfg: &GeomCfg) -> Vec<Point> {
        let d = edge.vector();
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            let p = edge.p0;
            let on_circle = (p.distance(&self.center) - self.radius).abs() <= cfg.eps_point;
            return if on_circle && self.contains_eps(&p, cfg) {
                vec![p]
            } else {
                Vec::new()
            };
        }

        // Foot of the perpendicular from the centre, then step ±h along the line.
        let t_foot = (self.center - edge.p0).dot(&d) / len2;
        let foot = edge.point_at(t_foot);
        let mut h2 = self.radius * self.radius - foot.distance_squared(&self.center);
        if h2 < 0.0 {
            // (r + eps)² - r²: the foot may sit up to eps_point outside the circle.
            if h2 < -(2.0 * self.radius + cfg.eps_point) * cfg.eps_point {
                return Vec::new();
            }
            h2 = 0.0;
        }
        let dt = h2.sqrt() / len2.sqrt();
        let candidates = [Some(t_foot - dt), (dt > 0.0).then_some(t_foot + dt)];

        let slack = cfg.eps_point / len2.sqrt();
        candidates
            .iter()
            .flatten()
            .filter(|t| (-slack..=1.0 + slack).contains(*t))
            .map(|t| edge.point_at(*t))
            .filter(|p| self.contains_eps(p, cfg))
            .collect()
    }

    #[inline]
    pub fn intersects_edge(&self, edge: &Edge) -> bool {
        !self.intersections(edge).is_empty()
    }

    /// Arc-arc test against `other` flattened to `DEFAULT_ARC_SAMPLES` chords.
    ///
    /// Approximate: chords cut inside a bulging arc, so near-tangent arcs can
    /// be misreported in either direction.
    pub fn intersects_arc(&self, other: &Arc) -> bool {
        self.intersects_arc_with(other, &GeomCfg::default())
    }

    pub fn intersects_arc_with(&self, other: &Arc, cfg: &GeomCfg) -> bool {
        self.sampled_hit(other, cfg.arc_samples, cfg)
    }

    pub fn intersects_arc_sampled(&self, other: &Arc, samples: usize) -> bool {
        self.sampled_hit(other, samples, &GeomCfg::default())
    }

    fn sampled_hit(&self, other: &Arc, samples: usize, cfg: &GeomCfg) -> bool {
        let points = other.sample_points(samples);
        for (i, w) in points.windows(2).enumerate() {
            if !self.intersections_with(&Edge::new(w[0], w[1]), cfg).is_empty() {
                tracing::trace!(chord = i, samples, "arc sampling stopped at first hit");
                return true;
            }
        }
        false
    }

    /// Crossings of the ray from `p` towards +x.
    ///
    /// Sweeps beyond a full turn count as one circle, so a doubly covered
    /// stretch contributes a single crossing.
    ///
    /// Solves `x = cx ± sqrt(r² - dy²)` and keeps hits right of `p` whose
    /// angle lies on the arc. Uses the same half-open rule as
    /// `Edge::ray_casting`: a point at the ray's height counts as below it.
    /// So an endpoint on the ray counts only when the arc leaves it upwards.
    /// The top tangent never counts, and the bottom tangent counts once per
    /// side of the arc that touches it.
    pub fn ray_casting(&self, p: &Point) -> u32 {
        if self.sweep() == 0.0 {
            return 0;
        }
        let dy = p.y - self.center.y;
        let h2 = self.radius * self.radius - dy * dy;
        if h2 < 0.0 {
            return 0;
        }
        if h2 == 0.0 {
            if dy >= 0.0 || self.center.x <= p.x {
                return 0;
            }
            let bottom = -FRAC_PI_2;
            return if self.contains_with(bottom, false, false) {
                2
            } else {
                u32::from(self.contains(bottom))
            };
        }
        let h = h2.sqrt();
        let ccw = self.orientation() == Orientation::CounterClockwise;
        [h, -h]
            .into_iter()
            .filter(|dx| self.center.x + dx > p.x)
            .filter(|dx| {
                // Travel direction at this angle has y-component of sign ±dx.
                let rising = (*dx > 0.0) == ccw;
                self.contains_with(dy.atan2(*dx), rising, !rising)
            })
            .count() as u32
    }

    fn contains_eps(&self, p: &Point, cfg: &GeomCfg) -> bool {
        let angle = (p - self.center).polar_angle();
        self.contains_with_eps(angle, true, true, cfg.eps_angle)
    }
}

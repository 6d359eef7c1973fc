//! Point-in-region tests over outlines that mix straight edges and arcs.

use serde::{Deserialize, Serialize};

use super::arc::Arc;
use super::edge::Edge;
use super::point::Point;
use super::rect::Rect;

/// One piece of a closed outline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PathSegment {
    Line(Edge),
    Arc(Arc),
}

impl PathSegment {
    #[inline]
    pub fn ray_casting(&self, p: &Point) -> u32 {
        match self {
            PathSegment::Line(e) => e.ray_casting(p),
            PathSegment::Arc(a) => a.ray_casting(p),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            PathSegment::Line(e) => e.bounds(),
            PathSegment::Arc(a) => a.bounds(),
        }
    }

    pub fn distance_squared(&self, p: &Point) -> f64 {
        match self {
            PathSegment::Line(e) => e.distance_squared(p),
            PathSegment::Arc(a) => a.distance_squared(p),
        }
    }
}

/// Even-odd rule: `p` is inside when the +x ray crosses the outline an odd
/// number of times. Points exactly on the outline are unspecified.
pub fn region_contains(segments: &[PathSegment], p: &Point) -> bool {
    let crossings: u32 = segments.iter().map(|s| s.ray_casting(p)).sum();
    crossings % 2 == 1
}

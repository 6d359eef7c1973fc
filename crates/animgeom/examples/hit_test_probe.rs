//! Hit-test timing probe for an animated rounded rectangle.
//!
//! Purpose
//! - Give a reproducible data point for "how long does an even-odd hit test
//!   over a mixed edge/arc outline take per query?"
//! - Exercise track evaluation, arc/edge outlines, and `region_contains`
//!   together the way an editor frame would.
//!
//! Why this shape
//! - The corner radius is animated with a spline track, so each frame rebuilds
//!   the outline from rational times like the editor does.
//! - A fixed query grid keeps the inside fraction comparable between runs.

use std::f64::consts::{FRAC_PI_2, PI};
use std::time::Instant;

use animgeom::prelude::*;

fn rounded_rect(w: f64, h: f64, r: f64) -> Vec<PathSegment> {
    let (x0, y0, x1, y1) = (-w / 2.0, -h / 2.0, w / 2.0, h / 2.0);
    let p = Point::new;
    let arc = |cx: f64, cy: f64, a: f64| PathSegment::Arc(Arc::new(p(cx, cy), r, a, a + FRAC_PI_2));
    let line = |a: Point, b: Point| PathSegment::Line(Edge::new(a, b));
    vec![
        line(p(x0 + r, y0), p(x1 - r, y0)),
        arc(x1 - r, y0 + r, -FRAC_PI_2),
        line(p(x1, y0 + r), p(x1, y1 - r)),
        arc(x1 - r, y1 - r, 0.0),
        line(p(x1 - r, y1), p(x0 + r, y1)),
        arc(x0 + r, y1 - r, FRAC_PI_2),
        line(p(x0, y1 - r), p(x0, y0 + r)),
        arc(x0 + r, y0 + r, PI),
    ]
}

fn main() {
    let radius = Animation::from_keyframes([
        Keyframe::new(0.1, KeyframeKind::Spline, Rational::ZERO),
        Keyframe::new(0.9, KeyframeKind::Spline, Rational::ONE),
        Keyframe::new(0.4, KeyframeKind::Spline, Rational::from(2)),
        Keyframe::new(1.0, KeyframeKind::Spline, Rational::from(3)),
    ]);

    let frames = 24 * 3;
    let grid = 64;
    let start = Instant::now();
    let mut inside = 0usize;
    for f in 0..frames {
        let Ok(t) = Rational::new(f, 24) else {
            continue;
        };
        let r = radius.value_at(t).unwrap_or(0.0).clamp(0.0, 1.0);
        let outline = rounded_rect(4.0, 2.0, r);
        for i in 0..grid {
            for j in 0..grid {
                let q = Point::new(
                    -2.5 + 5.0 * i as f64 / grid as f64,
                    -1.5 + 3.0 * j as f64 / grid as f64,
                );
                inside += usize::from(region_contains(&outline, &q));
            }
        }
    }
    let queries = frames as usize * grid * grid;
    let elapsed = start.elapsed().as_secs_f64();
    println!(
        "queries={queries} inside_fraction={:.4} ns_per_query={:.1}",
        inside as f64 / queries as f64,
        elapsed * 1e9 / queries as f64
    );
}
